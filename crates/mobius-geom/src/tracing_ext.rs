//! Tracing extensions for grid computations.
//!
//! Integrates with the `tracing` ecosystem. Enable output by installing a
//! subscriber in the application:
//!
//! ```rust,ignore
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env())
//!     .init();
//!
//! // Set RUST_LOG=mobius_geom=debug for detailed output,
//! // RUST_LOG=mobius_geom::timing=debug for timing only.
//! ```

use std::time::Instant;
use tracing::{debug, info};

/// A performance timer that logs duration on drop.
///
/// ```rust,ignore
/// fn expensive_operation() {
///     let _timer = OperationTimer::new("expensive_operation");
///     // ... do work ...
/// } // duration is logged here
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
}

impl OperationTimer {
    /// Create a new operation timer.
    pub fn new(name: &'static str) -> Self {
        debug!(target: "mobius_geom::timing", operation = name, "Starting operation");
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Create a timer that also records the grid size being processed.
    pub fn with_samples(name: &'static str, samples: usize) -> Self {
        debug!(
            target: "mobius_geom::timing",
            operation = name,
            samples = samples,
            "Starting operation"
        );
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        info!(
            target: "mobius_geom::timing",
            operation = self.name,
            elapsed_ms = format!("{:.2}", self.elapsed_ms()),
            "Operation completed"
        );
    }
}
