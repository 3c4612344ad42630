//! calcr - classical numerical methods for univariate real functions.
//!
//! The crate has two independent components with no shared state:
//!
//! - [`roots`] - scalar root finding: four interchangeable solvers
//!   (step-halving search, bisection, secant, Newton-Raphson) sharing a
//!   common result contract with an optional iteration trace.
//! - [`integrate`] - definite-integral approximation: composite trapezoidal
//!   rule, error-controlled adaptive trapezoidal rule, and composite
//!   Simpson's rule.
//!
//! Every routine is a pure function of its arguments: no global or static
//! state is touched, calls are reentrant, and re-invoking a routine with
//! identical arguments reproduces its result bit for bit. Independent calls
//! may run on separate threads without synchronization.
//!
//! User-supplied functions are plain `Fn(f64) -> f64` closures. Evaluation
//! is assumed side-effect-free but possibly expensive, so the root finders
//! report how many iterations they performed.
//!
//! # Example
//!
//! ```
//! use calcr::integrate::trapezoid;
//! use calcr::roots::{bisection, RootOptions};
//!
//! // Area under x^2 on [0, 1]
//! let area = trapezoid(|x| x * x, 0.0, 1.0, 100)?;
//! assert!((area - 1.0 / 3.0).abs() < 1e-3);
//!
//! // Root of x^2 - 4 bracketed by [0, 3]
//! let result = bisection(|x| x * x - 4.0, 0.0, 3.0, &RootOptions::default())?;
//! assert!((result.root - 2.0).abs() < 1e-5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod integrate;
pub mod roots;

// Re-export main types for convenience
pub use integrate::{IntegrateError, IntegrateResult};
pub use roots::{IterationRecord, RootError, RootOptions, RootResult, RootsResult};
