//! Core grid data types.

use nalgebra::Point3;

/// A dense rectangular grid of 3D sample points.
///
/// Points live in a single contiguous buffer in row-major order: row `i`
/// holds every sample for the i-th `u` value, column `j` the j-th `v`
/// value. Renderers that want a consistent `(x, y, z)` grid can walk
/// [`points`](SurfaceGrid::points) directly or index with
/// [`point`](SurfaceGrid::point).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    rows: usize,
    cols: usize,
    points: Vec<Point3<f64>>,
}

impl SurfaceGrid {
    /// Build a grid by evaluating `f` at every `(row, col)` index pair.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Point3<f64>,
    {
        let mut points = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                points.push(f(i, j));
            }
        }
        Self { rows, cols, points }
    }

    /// Number of rows (samples along `u`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (samples along `v`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of points in the grid.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The point at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> &Point3<f64> {
        debug_assert!(row < self.rows && col < self.cols);
        &self.points[row * self.cols + col]
    }

    /// All points of one row as a contiguous slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[Point3<f64>] {
        let start = row * self.cols;
        &self.points[start..start + self.cols]
    }

    /// The whole grid as a flat row-major slice.
    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Iterate over all points in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }
}
