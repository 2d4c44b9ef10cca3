//! Dense linear system solver for small systems of equations
//!
//! This crate solves A·x = b by Gaussian elimination with partial pivoting
//! and reports a per-equation residual check alongside the solution.
//!
//! # Features
//!
//! - **Elimination**: forward reduction with partial pivoting and
//!   back-substitution, on owned working copies of the input
//! - **Input shaping**: equation-per-line text parsing with fail-fast
//!   validation (`n` equations of `n+1` real coefficients each)
//! - **Residual verification**: informational recomputation of every
//!   equation's left-hand side against its constant
//! - **Generic scalar types**: `f64` (reference behavior) and `f32`
//!
//! # Example
//!
//! ```
//! use linsolve::{residuals, solve, LinearSystem};
//!
//! // 2x + 3y = 5, x − y = 1
//! let system = LinearSystem::from_equations(&["2 3 5", "1 -1 1"])?;
//! let x = solve(&system)?;
//! assert!((x[0] - 1.6).abs() < 1e-10);
//!
//! for check in residuals(&system, &x) {
//!     assert!(check.error().abs() < 1e-10);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod elimination;
pub mod parse;
pub mod residual;
pub mod system;
pub mod traits;

// Re-export main types
pub use system::LinearSystem;
pub use traits::RealScalar;

// Re-export the solver
pub use elimination::{
    eliminate, eliminate_with, solve, solve_with, Reduction, SolveError, SolverConfig,
    PIVOT_TOLERANCE,
};

// Re-export input shaping and verification
pub use parse::{parse_equation, InputError};
pub use residual::{residuals, Residual};
