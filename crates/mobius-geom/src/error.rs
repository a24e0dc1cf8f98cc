//! Error types for strip construction.
//!
//! Every estimator in this crate is a pure computation, so errors can only
//! arise at construction time when the parameters cannot produce a valid
//! sampling grid. Errors carry miette diagnostic codes and recovery help.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for geometry operations.
pub type GeomResult<T> = Result<T, GeomError>;

/// Errors that can occur when building a [`MobiusStrip`](crate::MobiusStrip).
#[derive(Debug, Error, Diagnostic)]
pub enum GeomError {
    /// Resolution below the minimum needed to form a grid.
    ///
    /// The sample spacing along each axis is `span / (n - 1)`, so a
    /// resolution of 0 or 1 would divide by zero.
    #[error("resolution {resolution} is too small: at least 2 samples per axis are required")]
    #[diagnostic(
        code(mobius::params::resolution),
        help("Grid spacing is span / (n - 1); pass a resolution of 2 or more.")
    )]
    ResolutionTooSmall { resolution: usize },

    /// Negative strip width.
    #[error("strip width {width} is negative")]
    #[diagnostic(
        code(mobius::params::width),
        help("Width is a physical extent; pass 0.0 for a degenerate strip or a positive value.")
    )]
    NegativeWidth { width: f64 },

    /// A parameter is NaN or infinite.
    #[error("parameter `{name}` is not finite: {value}")]
    #[diagnostic(
        code(mobius::params::non_finite),
        help("Check for NaN or infinity produced by upstream arithmetic.")
    )]
    NonFiniteParameter { name: &'static str, value: f64 },
}
