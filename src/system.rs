//! Linear system representation
//!
//! [`LinearSystem`] owns a validated (A, b) pair. Construction is the only
//! place shape constraints are checked; downstream code (elimination,
//! residual verification) relies on the dimensions being consistent.
//!
//! The system itself is never mutated by solving. Elimination works on
//! cloned working copies, so the original coefficients stay available for
//! residual verification afterwards.

use crate::parse::{parse_equation, InputError};
use crate::traits::RealScalar;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// A dense square system of linear equations A·x = b.
///
/// Intended for small systems (the equation-entry format targets 1–10
/// unknowns); nothing in the representation prevents larger n.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T> {
    a: Array2<T>,
    b: Array1<T>,
}

impl<T: RealScalar> LinearSystem<T> {
    /// Build a system from an already-assembled matrix and right-hand side.
    ///
    /// Fails with [`InputError::DimensionMismatch`] unless A is square with
    /// the same dimension as b, and with [`InputError::EmptySystem`] for
    /// n = 0.
    pub fn new(a: Array2<T>, b: Array1<T>) -> Result<Self, InputError> {
        let n = a.nrows();
        if n == 0 {
            return Err(InputError::EmptySystem);
        }
        if a.ncols() != n {
            return Err(InputError::DimensionMismatch {
                expected: n,
                got: a.ncols(),
            });
        }
        if b.len() != n {
            return Err(InputError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// Number of equations (and unknowns)
    pub fn dim(&self) -> usize {
        self.a.nrows()
    }

    /// Coefficient matrix A
    pub fn matrix(&self) -> ArrayView2<'_, T> {
        self.a.view()
    }

    /// Right-hand side b
    pub fn rhs(&self) -> ArrayView1<'_, T> {
        self.b.view()
    }

    /// Owned copies of A and b for an elimination pass to consume
    pub(crate) fn working_copies(&self) -> (Array2<T>, Array1<T>) {
        (self.a.clone(), self.b.clone())
    }
}

impl LinearSystem<f64> {
    /// Build a system from equation text, one equation per line.
    ///
    /// The number of unknowns is the number of lines; each line must carry
    /// exactly n+1 whitespace-separated real numbers (coefficients, then the
    /// right-hand constant). Stops at the first malformed or unparsable
    /// equation.
    pub fn from_equations<S: AsRef<str>>(lines: &[S]) -> Result<Self, InputError> {
        let n = lines.len();
        if n == 0 {
            return Err(InputError::EmptySystem);
        }

        let mut a = Array2::zeros((n, n));
        let mut b = Array1::zeros(n);
        for (i, line) in lines.iter().enumerate() {
            let (coeffs, rhs) = parse_equation(line.as_ref(), n)?;
            for (j, &c) in coeffs.iter().enumerate() {
                a[[i, j]] = c;
            }
            b[i] = rhs;
        }

        Ok(Self { a, b })
    }
}
