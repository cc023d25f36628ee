// File: crates/plotter-render-skia/src/lib.rs
// Summary: Skia backend for plotter-core: raster drawing surface, text shaping, PNG/RGBA export.

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

use anyhow::Result;
use plotter_core::{Plotter, PlotterOptions, Theme};

/// Plot manager drawing on a fresh raster surface. The surface is resized
/// to fit as soon as the first plot is registered.
pub fn raster_plotter(options: PlotterOptions, theme: Theme) -> Result<Plotter<SkiaSurface>> {
    let surface = SkiaSurface::new(1, 1)?;
    Ok(Plotter::with_options(surface, options, theme))
}
