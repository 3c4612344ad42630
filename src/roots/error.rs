//! Error types for root-finding operations.
//!
//! Every failure is terminal for the call that produced it; no solver
//! retries internally. To help with diagnostics the variants carry the last
//! relevant `x` position where one exists.

use std::fmt;

/// Result type for root-finding operations.
pub type RootsResult<T> = Result<T, RootError>;

/// Errors that can occur during a root search.
#[derive(Debug, Clone)]
pub enum RootError {
    /// Bisection was invoked with endpoints whose function values share a
    /// sign, so no root is bracketed.
    InvalidBracket { f_x1: f64, f_x2: f64, context: String },

    /// The solver exhausted its step budget without converging. This
    /// signals non-convergence, not a transient fault.
    StepBudgetExceeded {
        max_steps: usize,
        last_x: f64,
        context: String,
    },

    /// Newton-Raphson hit a point where the derivative is exactly zero and
    /// cannot determine the next step.
    ZeroDerivative { x: f64 },

    /// The secant through the two most recent estimates is horizontal:
    /// their function values are exactly equal (and nonzero), so the update
    /// would divide by zero.
    HorizontalSecant { x0: f64, x1: f64, f_x: f64 },
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBracket { f_x1, f_x2, context } => {
                write!(
                    f,
                    "{}: endpoints do not bracket a root: f(x1)={}, f(x2)={}",
                    context, f_x1, f_x2
                )
            }
            Self::StepBudgetExceeded {
                max_steps,
                last_x,
                context,
            } => {
                write!(
                    f,
                    "{}: exceeded maximum of {} steps without converging (last x = {})",
                    context, max_steps, last_x
                )
            }
            Self::ZeroDerivative { x } => {
                write!(f, "derivative is exactly zero at x = {}", x)
            }
            Self::HorizontalSecant { x0, x1, f_x } => {
                write!(
                    f,
                    "secant is horizontal: f({}) = f({}) = {}",
                    x0, x1, f_x
                )
            }
        }
    }
}

impl std::error::Error for RootError {}
