//! Möbius strip parametrization and mesh generation.

use std::f64::consts::TAU;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{GeomError, GeomResult};
use crate::measure::{self, Measurements};
use crate::types::SurfaceGrid;

/// A Möbius strip described by centerline radius, width, and sampling
/// resolution.
///
/// The surface is the image of the parametric map
///
/// ```text
/// x(u, v) = (R + v·cos(u/2))·cos(u)
/// y(u, v) = (R + v·cos(u/2))·sin(u)
/// z(u, v) = v·sin(u/2)
/// ```
///
/// sampled on an `n × n` grid with `u` over `[0, 2π]` and `v` over
/// `[-w/2, +w/2]`, both endpoint-inclusive. The strip is immutable after
/// construction; every derived quantity (mesh, surface area, edge length)
/// is a pure function of the three parameters and can be recomputed at
/// will with identical results.
///
/// # Parameter constraints
///
/// - `resolution >= 2`, otherwise the grid spacing `span / (n - 1)` would
///   divide by zero.
/// - `width >= 0` and finite.
/// - `radius` must be finite. Its sign and magnitude are not policed: a
///   radius at or below `width / 2` produces a self-intersecting surface,
///   which is the caller's responsibility to avoid.
///
/// # Example
///
/// ```
/// use mobius_geom::MobiusStrip;
///
/// let strip = MobiusStrip::new(1.0, 0.3, 300).unwrap();
/// let mesh = strip.generate_mesh();
/// assert_eq!(mesh.point_count(), 300 * 300);
///
/// let area = strip.surface_area();
/// assert!((area - 1.8850).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MobiusStrip {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl MobiusStrip {
    /// Create a strip, validating the parameters.
    pub fn new(radius: f64, width: f64, resolution: usize) -> GeomResult<Self> {
        if !radius.is_finite() {
            return Err(GeomError::NonFiniteParameter {
                name: "radius",
                value: radius,
            });
        }
        if !width.is_finite() {
            return Err(GeomError::NonFiniteParameter {
                name: "width",
                value: width,
            });
        }
        if width < 0.0 {
            return Err(GeomError::NegativeWidth { width });
        }
        if resolution < 2 {
            return Err(GeomError::ResolutionTooSmall { resolution });
        }

        Ok(Self {
            radius,
            width,
            resolution,
        })
    }

    /// Centerline radius `R`.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strip width `w`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Samples per axis `n`.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Spacing between consecutive `u` samples.
    #[inline]
    pub fn du(&self) -> f64 {
        TAU / (self.resolution - 1) as f64
    }

    /// Spacing between consecutive `v` samples. Zero when `width` is zero.
    #[inline]
    pub fn dv(&self) -> f64 {
        self.width / (self.resolution - 1) as f64
    }

    /// The i-th sample of the angular parameter, in `[0, 2π]`.
    #[inline]
    pub fn u_at(&self, i: usize) -> f64 {
        i as f64 * self.du()
    }

    /// The j-th sample of the cross-strip parameter, in `[-w/2, +w/2]`.
    #[inline]
    pub fn v_at(&self, j: usize) -> f64 {
        -self.width / 2.0 + j as f64 * self.dv()
    }

    /// Evaluate the surface at parameter values `(u, v)`.
    #[inline]
    pub fn point_at(&self, u: f64, v: f64) -> Point3<f64> {
        let half = u / 2.0;
        let radial = self.radius + v * half.cos();
        Point3::new(radial * u.cos(), radial * u.sin(), v * half.sin())
    }

    /// Generate the full `n × n` surface mesh.
    ///
    /// Row `i` of the grid is the circle of samples at `u = u_at(i)`,
    /// column `j` the line of samples at `v = v_at(j)`.
    ///
    /// The `u = 0` and `u = 2π` rows are separate grid rows that land on
    /// the same centerline angle with opposite strip orientation
    /// (`cos(0) = 1` vs `cos(π) = -1`). They are deliberately not stitched
    /// together: the strip's single-edge topology is a property of the
    /// parametrization, not of mesh connectivity.
    pub fn generate_mesh(&self) -> SurfaceGrid {
        let n = self.resolution;
        let grid = SurfaceGrid::from_fn(n, n, |i, j| self.point_at(self.u_at(i), self.v_at(j)));
        debug!(rows = n, cols = n, "generated Möbius strip mesh");
        grid
    }

    /// Sampled points along the boundary curve at `v = +w/2`, ordered by `u`.
    pub fn boundary_points(&self) -> Vec<Point3<f64>> {
        let v = self.width / 2.0;
        (0..self.resolution)
            .map(|i| self.point_at(self.u_at(i), v))
            .collect()
    }

    /// Estimate the total surface area. See [`measure::surface_area`].
    pub fn surface_area(&self) -> f64 {
        measure::surface_area(self)
    }

    /// Estimate the boundary edge length. See [`measure::edge_length`].
    pub fn edge_length(&self) -> f64 {
        measure::edge_length(self)
    }

    /// Compute both estimates plus grid statistics in one call.
    pub fn measure(&self) -> Measurements {
        measure::measure(self)
    }
}
