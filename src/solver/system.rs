//! Dense linear system accumulator and Gaussian elimination.

use crate::error::{MeshSimError, Result};

use super::PIVOT_TOLERANCE;

/// The per-step linear system A·X = -B over the free meshes.
///
/// A is stored row-major in a flat vector. The system is zero-initialized,
/// filled by component stamps, consumed by one [`solve`](Self::solve) call,
/// and discarded at the end of the step.
#[derive(Debug)]
pub struct MeshSystem {
    /// Coefficient matrix A (row-major)
    a: Vec<f64>,
    /// Constant-term vector B
    b: Vec<f64>,
    /// Solution vector X
    x: Vec<f64>,
    /// Matrix dimension (number of free meshes)
    size: usize,
}

impl MeshSystem {
    /// Create a zeroed system of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            b: vec![0.0; size],
            x: vec![0.0; size],
            size,
        }
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Get constant-term element at row.
    pub fn rhs(&self, row: usize) -> f64 {
        self.b[row]
    }

    /// Add to constant-term element at row.
    pub fn add_rhs(&mut self, row: usize, value: f64) {
        self.b[row] += value;
    }

    /// The solution vector, valid after a successful [`solve`](Self::solve).
    pub fn solution(&self) -> &[f64] {
        &self.x
    }

    /// Solve A·X = -B by Gaussian elimination without pivot search.
    ///
    /// The sign flip is applied here, once, by negating B on entry. No row
    /// exchanges are performed: a near-zero diagonal entry fails with
    /// [`MeshSimError::SingularSystem`] even when the system would be
    /// solvable under a row permutation. A zero-dimensional system solves
    /// trivially.
    ///
    /// Consumes A and B in place; call at most once per assembled system.
    pub fn solve(&mut self) -> Result<()> {
        let n = self.size;

        for v in &mut self.b {
            *v = -*v;
        }

        // Forward elimination with normalized pivot rows
        for i in 0..n {
            let pivot = self.a[i * n + i];
            if pivot.abs() < PIVOT_TOLERANCE {
                return Err(MeshSimError::SingularSystem { row: i });
            }
            for j in i..n {
                self.a[i * n + j] /= pivot;
            }
            self.b[i] /= pivot;

            for r in (i + 1)..n {
                let factor = self.a[r * n + i];
                if factor == 0.0 {
                    continue;
                }
                for j in i..n {
                    self.a[r * n + j] -= factor * self.a[i * n + j];
                }
                self.b[r] -= factor * self.b[i];
            }
        }

        // Back substitution (diagonal already normalized to 1)
        for i in (0..n).rev() {
            let mut sum = self.b[i];
            for j in (i + 1)..n {
                sum -= self.a[i * n + j] * self.x[j];
            }
            self.x[i] = sum;
        }

        Ok(())
    }
}
