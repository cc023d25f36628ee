// File: crates/plotter-core/src/error.rs
// Summary: Recoverable error taxonomy reported by the multi-plot manager.

use thiserror::Error;

/// Every variant is recoverable: the manager turns the failed call into a
/// no-op and reports the error through its diagnostics hook.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("plot reference {0} does not resolve to a registered plot")]
    InvalidPlotReference(String),
    #[error("no plot is selected")]
    NoActivePlot,
    #[error("shape needs at least 2 vertices, got {vertices}")]
    IncompleteShape { vertices: usize },
    #[error("sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),
}

pub type PlotResult<T> = Result<T, PlotError>;
