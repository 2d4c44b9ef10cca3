//! Residual verification
//!
//! Recomputes each equation's left-hand side from a candidate solution and
//! reports it next to the equation's constant. This is informational only:
//! it never changes a solve outcome and makes no pass/fail judgment, since
//! floating-point arithmetic means exact equality is not expected.

use crate::system::LinearSystem;
use crate::traits::RealScalar;
use ndarray::Array1;
use serde::Serialize;

/// One equation's verification entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Residual<T> {
    /// Left-hand side recomputed from the candidate solution
    pub computed: T,
    /// Right-hand constant of the original equation
    pub expected: T,
}

impl<T: RealScalar> Residual<T> {
    /// Signed error: computed − expected
    pub fn error(&self) -> T {
        self.computed - self.expected
    }
}

/// Recompute every equation of `system` against the candidate solution `x`.
pub fn residuals<T: RealScalar>(system: &LinearSystem<T>, x: &Array1<T>) -> Vec<Residual<T>> {
    let a = system.matrix();
    let b = system.rhs();

    (0..system.dim())
        .map(|i| {
            let computed = a
                .row(i)
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&aik, &xk)| acc + aik * xk);
            Residual {
                computed,
                expected: b[i],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::solve;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_residuals_identity() {
        let s = LinearSystem::new(array![[1.0, 0.0], [0.0, 1.0]], array![5.0, 7.0]).unwrap();
        let x = solve(&s).unwrap();

        let checks = residuals(&s, &x);
        assert_eq!(checks.len(), 2);
        assert_relative_eq!(checks[0].computed, 5.0);
        assert_relative_eq!(checks[0].expected, 5.0);
        assert_relative_eq!(checks[1].computed, 7.0);
        assert_relative_eq!(checks[1].error(), 0.0);
    }

    #[test]
    fn test_residuals_near_zero_for_solved_system() {
        let s = LinearSystem::new(array![[2.0, 3.0], [1.0, -1.0]], array![5.0, 1.0]).unwrap();
        let x = solve(&s).unwrap();

        for check in residuals(&s, &x) {
            assert_relative_eq!(check.computed, check.expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_residuals_report_wrong_candidate() {
        // A deliberately wrong x still produces a report, just with error
        let s = LinearSystem::new(array![[2.0, 0.0], [0.0, 2.0]], array![4.0, 4.0]).unwrap();
        let x = array![1.0, 1.0];

        let checks = residuals(&s, &x);
        assert_relative_eq!(checks[0].computed, 2.0);
        assert_relative_eq!(checks[0].expected, 4.0);
        assert_relative_eq!(checks[0].error(), -2.0);
    }
}
