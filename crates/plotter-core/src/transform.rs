// File: crates/plotter-core/src/transform.rs
// Summary: Conversions between device, surface pixel and plot-local coordinates, plus hit-testing.
//
// Device coordinates are what the pointer source reports; surface pixels are
// device coordinates minus the surface origin. Pixel y grows downward while
// plot-local y grows upward (for orientations a and d).

use crate::plot::PlotGeometry;
use crate::types::Pair;

/// Plot-local point to surface pixels, honouring the plot's orientation.
#[inline]
pub fn plot_local_to_surface(p: Pair, plot: &PlotGeometry) -> Pair {
    let o = plot.orientation();
    let (domain, range) = (plot.domain(), plot.range());
    let ppu = plot.pixel_per_unit();
    let offset = plot.offset();

    let dx = if o.mirrors_x() { domain.y - p.x } else { p.x - domain.x };
    let dy = if o.mirrors_y() { range.y - p.y } else { p.y - range.x };
    Pair::new(
        dx * ppu.x + offset.x,
        plot.plot_size().y - dy * ppu.y + offset.y,
    )
}

/// Plot-local point to device coordinates for a surface placed at `origin`.
#[inline]
pub fn plot_local_to_device(p: Pair, origin: Pair, plot: &PlotGeometry) -> Pair {
    plot_local_to_surface(p, plot).plus(origin)
}

/// Device point to the plot's local space; exact inverse of [`plot_local_to_device`].
#[inline]
pub fn device_to_plot_local(device: Pair, origin: Pair, plot: &PlotGeometry) -> Pair {
    let o = plot.orientation();
    let (domain, range) = (plot.domain(), plot.range());
    let ppu = plot.pixel_per_unit();
    let offset = plot.offset();

    let ux = (device.x - origin.x - offset.x) / ppu.x;
    let uy = (plot.plot_size().y - (device.y - origin.y - offset.y)) / ppu.y;
    Pair::new(
        if o.mirrors_x() { domain.y - ux } else { domain.x + ux },
        if o.mirrors_y() { range.y - uy } else { range.x + uy },
    )
}

/// Inclusive test against the plot's domain/range box.
#[inline]
pub fn is_in_bounds(p: Pair, plot: &PlotGeometry) -> bool {
    let (domain, range) = (plot.domain(), plot.range());
    p.x >= domain.x && p.x <= domain.y && p.y >= range.x && p.y <= range.y
}

/// Index of the first plot, in registration order, whose box contains the
/// device point. Overlapping plots resolve to the earliest registered one.
pub fn find_plot_at(device: Pair, origin: Pair, plots: &[PlotGeometry]) -> Option<usize> {
    plots
        .iter()
        .position(|plot| is_in_bounds(device_to_plot_local(device, origin, plot), plot))
}
