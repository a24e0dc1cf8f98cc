//! Möbius strip mesh generation and numerical surface measurement.
//!
//! This crate models a Möbius strip from three scalar parameters and
//! derives a renderable 3D point mesh plus two scalar geometric
//! quantities: total surface area and boundary (edge) length.
//!
//! # Features
//!
//! - **Mesh generation**: dense `n × n` grid of `(x, y, z)` samples of the
//!   parametric surface, in one contiguous row-major buffer
//! - **Surface area**: finite-difference Jacobian magnitudes summed with
//!   trapezoid weights over the grid
//! - **Edge length**: chord-length sum along the sampled boundary curve
//!
//! All derived values are pure functions of the parameters `(R, w, n)`:
//! deterministic, idempotent, and safe to recompute.
//!
//! # Quick Start
//!
//! ```
//! use mobius_geom::MobiusStrip;
//!
//! let strip = MobiusStrip::new(1.0, 0.3, 300)?;
//!
//! let mesh = strip.generate_mesh();
//! assert_eq!(mesh.rows(), 300);
//!
//! println!("Surface area ≈ {:.4}", strip.surface_area());
//! println!("Edge length ≈ {:.4}", strip.edge_length());
//! # Ok::<(), mobius_geom::GeomError>(())
//! ```
//!
//! # Accuracy
//!
//! Both estimators converge to the continuous values as the resolution
//! grows; there is no adaptive refinement. The edge-length estimate
//! traverses `u ∈ [0, 2π]` at `v = +w/2` only, which is roughly half of
//! the strip's single topological edge — see
//! [`measure::edge_length`] for why this is kept as-is.
//!
//! # Logging
//!
//! Operations emit `tracing` events. Set `RUST_LOG=mobius_geom=debug`
//! for per-operation results or `RUST_LOG=mobius_geom::timing=debug`
//! for timing.

mod error;
mod strip;
mod types;

pub mod measure;
pub mod tracing_ext;

pub use error::{GeomError, GeomResult};
pub use measure::Measurements;
pub use strip::MobiusStrip;
pub use types::SurfaceGrid;
