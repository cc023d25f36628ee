// File: crates/plotter-core/src/lib.rs
// Summary: Core library entry point; exports the plot model, transforms, manager and paint pipeline.

pub mod types;
pub mod geometry;
pub mod text;
pub mod theme;
pub mod config;
pub mod plot;
pub mod error;
pub mod line;
pub mod transform;
pub mod surface;
pub mod input;
pub mod render;
pub mod plotter;

pub use types::Pair;
pub use geometry::Rect;
pub use text::{FixedAdvance, Font, TextMeasure};
pub use theme::{Color, Theme};
pub use config::{PlotConfig, PlotterOptions};
pub use plot::{MouseState, Orientation, PlotGeometry};
pub use error::{PlotError, PlotResult};
pub use line::Line;
pub use surface::{DrawOp, Path, RecordingSurface, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
pub use input::{PointerEvent, PointerKind, TouchEvent, TouchPhase};
pub use plotter::{PlotId, PlotRef, Plotter};
