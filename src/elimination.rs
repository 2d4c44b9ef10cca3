//! Gaussian elimination with partial pivoting
//!
//! Forward elimination reduces A to upper-triangular form with unit diagonal,
//! transforming b in lock-step; back-substitution then recovers x. Pivot rows
//! are chosen by maximum absolute value in the remaining column, and a pivot
//! whose magnitude falls below [`SolverConfig::pivot_tolerance`] aborts the
//! pass with [`SolveError::Singular`].
//!
//! The pass runs on owned working copies cloned from the input system, so the
//! caller's [`LinearSystem`] is left untouched.

use crate::system::LinearSystem;
use crate::traits::RealScalar;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Absolute pivot magnitude below which elimination reports a singular system.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Errors that can occur during elimination
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("matrix is singular or nearly singular (pivot {pivot:.3e} at column {column})")]
    Singular { column: usize, pivot: f64 },
}

/// Solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfig<R> {
    /// Absolute threshold on the pivot magnitude.
    ///
    /// This does not scale with the magnitude of the matrix entries, so a
    /// well-conditioned but uniformly tiny system can be reported singular.
    /// Kept absolute to match the reference classification of inputs.
    pub pivot_tolerance: R,
}

impl<R: RealScalar> Default for SolverConfig<R> {
    fn default() -> Self {
        Self {
            pivot_tolerance: R::from_f64(PIVOT_TOLERANCE).unwrap(),
        }
    }
}

/// Result of the forward elimination pass
///
/// `a` is upper-triangular with unit diagonal and `b` has received the same
/// row operations. `pivot_rows[i]` is the row index selected as pivot for
/// column i (counted in the row arrangement current at that step); an entry
/// equal to i means no swap happened.
#[derive(Debug, Clone)]
pub struct Reduction<T> {
    /// Reduced coefficient matrix
    pub a: Array2<T>,
    /// Reduced right-hand side
    pub b: Array1<T>,
    /// Pivot row chosen per column
    pub pivot_rows: Vec<usize>,
}

impl<T: RealScalar> Reduction<T> {
    /// Recover x from the reduced system by back-substitution.
    ///
    /// Uses the unit diagonal: x[i] = b[i] − Σ_{k>i} a[i][k]·x[k], starting
    /// from the last unknown.
    pub fn back_substitute(&self) -> Array1<T> {
        let n = self.b.len();
        let mut x = Array1::zeros(n);
        for i in (0..n).rev() {
            let mut acc = self.b[i];
            for k in (i + 1)..n {
                acc -= self.a[[i, k]] * x[k];
            }
            x[i] = acc;
        }
        x
    }
}

/// Forward elimination with partial pivoting, using the default configuration
pub fn eliminate<T: RealScalar>(system: &LinearSystem<T>) -> Result<Reduction<T>, SolveError> {
    eliminate_with(system, &SolverConfig::default())
}

/// Forward elimination with partial pivoting
///
/// For each pivot column i: select the row with maximum |value| among rows
/// i..n (ties keep the lowest row index), swap it into position, abort if the
/// pivot magnitude is below tolerance, normalize the pivot row, and eliminate
/// the column from every row below.
pub fn eliminate_with<T: RealScalar>(
    system: &LinearSystem<T>,
    config: &SolverConfig<T>,
) -> Result<Reduction<T>, SolveError> {
    let (mut a, mut b) = system.working_copies();
    let n = system.dim();
    let mut pivot_rows = Vec::with_capacity(n);

    for i in 0..n {
        // Pivot selection: strict comparison keeps the lowest row on ties
        let mut max_row = i;
        let mut max_val = a[[i, i]].magnitude();
        for r in (i + 1)..n {
            let val = a[[r, i]].magnitude();
            if val > max_val {
                max_val = val;
                max_row = r;
            }
        }
        pivot_rows.push(max_row);

        if max_row != i {
            log::debug!("column {}: swapping rows {} and {}", i, i, max_row);
            for j in 0..n {
                let tmp = a[[i, j]];
                a[[i, j]] = a[[max_row, j]];
                a[[max_row, j]] = tmp;
            }
            b.swap(i, max_row);
        }

        let pivot = a[[i, i]];
        if pivot.magnitude() < config.pivot_tolerance {
            log::warn!(
                "column {}: pivot magnitude {:.3e} below tolerance, aborting",
                i,
                pivot.magnitude().to_f64().unwrap_or(0.0)
            );
            return Err(SolveError::Singular {
                column: i,
                pivot: pivot.to_f64().unwrap_or(0.0),
            });
        }

        // Normalize the pivot row so the diagonal entry becomes 1.
        // Columns left of i are already zero for every row at or below i.
        for j in i..n {
            a[[i, j]] /= pivot;
        }
        b[i] /= pivot;

        // Eliminate column i from all rows below
        for r in (i + 1)..n {
            let factor = a[[r, i]];
            for j in i..n {
                let update = factor * a[[i, j]];
                a[[r, j]] -= update;
            }
            let update = factor * b[i];
            b[r] -= update;
        }
    }

    Ok(Reduction { a, b, pivot_rows })
}

/// Solve A·x = b with the default configuration
///
/// Convenience composition of [`eliminate`] and
/// [`Reduction::back_substitute`].
pub fn solve<T: RealScalar>(system: &LinearSystem<T>) -> Result<Array1<T>, SolveError> {
    Ok(eliminate(system)?.back_substitute())
}

/// Solve A·x = b with an explicit configuration
pub fn solve_with<T: RealScalar>(
    system: &LinearSystem<T>,
    config: &SolverConfig<T>,
) -> Result<Array1<T>, SolveError> {
    Ok(eliminate_with(system, config)?.back_substitute())
}
