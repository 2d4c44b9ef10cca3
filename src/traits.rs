//! Scalar abstraction for the solver
//!
//! This module defines [`RealScalar`], the bound bundle every solver routine
//! is generic over. The reference behavior of the crate is `f64`; `f32` is
//! provided for memory-constrained callers that can tolerate the reduced
//! precision.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in elimination and residual checks.
///
/// This is a closed abstraction: the solver needs ordering, absolute value,
/// and in-place arithmetic, all of which come from the `num_traits` bounds.
/// The associated constants/methods of [`Float`] cover the rest.
pub trait RealScalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
    /// Magnitude |x|, the quantity partial pivoting maximizes
    fn magnitude(&self) -> Self {
        self.abs()
    }
}

impl RealScalar for f64 {}

impl RealScalar for f32 {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude() {
        assert_relative_eq!((-3.0_f64).magnitude(), 3.0);
        assert_relative_eq!(3.0_f32.magnitude(), 3.0);
        assert_relative_eq!(0.0_f64.magnitude(), 0.0);
    }
}
