//! Input shaping for equation text
//!
//! Turns one line of text per equation into coefficient rows. An equation
//! with n unknowns is written as n+1 whitespace-separated real numbers: the
//! n coefficients in a fixed variable order, then the right-hand constant.
//!
//! Validation is fail-fast: processing stops at the first offending
//! equation, before the solver ever runs.

use thiserror::Error;

/// Errors raised while shaping user input into a linear system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("equation \"{equation}\" has {found} terms, expected {expected}")]
    MalformedEquation {
        equation: String,
        expected: usize,
        found: usize,
    },
    #[error("\"{token}\" is not a valid real number")]
    InvalidNumber { token: String },
    #[error("no equations supplied")]
    EmptySystem,
    #[error("matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Parse one equation line into its n coefficients and right-hand constant.
///
/// `n` is the number of unknowns, so the line must carry exactly n+1 tokens.
pub fn parse_equation(line: &str, n: usize) -> Result<(Vec<f64>, f64), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n + 1 {
        return Err(InputError::MalformedEquation {
            equation: line.trim().to_string(),
            expected: n + 1,
            found: tokens.len(),
        });
    }

    let mut values = Vec::with_capacity(n + 1);
    for token in &tokens {
        let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
            token: (*token).to_string(),
        })?;
        values.push(value);
    }

    let rhs = values.pop().expect("n + 1 tokens always leave a constant");
    Ok((values, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_equation() {
        let (coeffs, rhs) = parse_equation("2 3 -1 5", 3).unwrap();
        assert_eq!(coeffs.len(), 3);
        assert_relative_eq!(coeffs[0], 2.0);
        assert_relative_eq!(coeffs[1], 3.0);
        assert_relative_eq!(coeffs[2], -1.0);
        assert_relative_eq!(rhs, 5.0);
    }

    #[test]
    fn test_parse_equation_scientific_notation() {
        let (coeffs, rhs) = parse_equation("1e-3 2.5E2 7", 2).unwrap();
        assert_relative_eq!(coeffs[0], 1e-3);
        assert_relative_eq!(coeffs[1], 250.0);
        assert_relative_eq!(rhs, 7.0);
    }

    #[test]
    fn test_parse_equation_too_few_terms() {
        let err = parse_equation("1 2", 2).unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedEquation {
                equation: "1 2".to_string(),
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn test_parse_equation_too_many_terms() {
        let err = parse_equation("1 2 3 4", 2).unwrap_err();
        assert!(matches!(
            err,
            InputError::MalformedEquation {
                expected: 3,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_equation_bad_token() {
        let err = parse_equation("1 two 3", 2).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn test_parse_equation_ignores_extra_whitespace() {
        let (coeffs, rhs) = parse_equation("  1\t0   5 ", 2).unwrap();
        assert_relative_eq!(coeffs[0], 1.0);
        assert_relative_eq!(coeffs[1], 0.0);
        assert_relative_eq!(rhs, 5.0);
    }
}
