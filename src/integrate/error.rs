//! Error types for numerical integration operations.

use std::fmt;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
#[derive(Debug, Clone)]
pub enum IntegrateError {
    /// A parameter is outside the domain a rule is defined on
    /// (e.g. zero subintervals, or an odd count for Simpson's rule).
    InvalidDomain { parameter: String, message: String },

    /// The adaptive refinement loop hit its safety cap before two
    /// successive estimates agreed to within the requested tolerance.
    DidNotConverge {
        refinements: usize,
        tolerance: f64,
        context: String,
    },
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::DidNotConverge {
                refinements,
                tolerance,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} refinements (tolerance: {:.2e})",
                    context, refinements, tolerance
                )
            }
        }
    }
}

impl std::error::Error for IntegrateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntegrateError::InvalidDomain {
            parameter: "n".to_string(),
            message: "need at least 1 subinterval".to_string(),
        };
        assert!(err.to_string().contains("Invalid parameter 'n'"));

        let err = IntegrateError::DidNotConverge {
            refinements: 30,
            tolerance: 1e-12,
            context: "adaptive_trapezoid".to_string(),
        };
        assert!(err.to_string().contains("did not converge"));
        assert!(err.to_string().contains("30"));
    }
}
