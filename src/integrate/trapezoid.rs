//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions and is exact for integrands of
//! degree one or less.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Levels of interval doubling before adaptive refinement gives up.
/// 2^30 is about a billion subintervals.
const MAX_REFINEMENTS: usize = 30;

/// Integrate using the composite trapezoidal rule.
///
/// Computes the definite integral of `f` over `[a, b]` with `n` equal
/// subintervals: `h * (f(a)/2 + f(a+h) + ... + f(b-h) + f(b)/2)` where
/// `h = (b - a) / n`. No error estimate is produced; the caller chooses the
/// resolution.
///
/// The bounds may be given in either order; swapping them negates the result.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of subintervals (must be at least 1)
///
/// # Errors
///
/// * `InvalidDomain` if `n` is zero
///
/// # Example
///
/// ```
/// use calcr::integrate::trapezoid;
///
/// // Integrate x^3 from 0 to 1; exact value is 1/4
/// let result = trapezoid(|x| x * x * x, 0.0, 1.0, 100).unwrap();
/// assert!((result - 0.25).abs() < 1e-3);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(IntegrateError::InvalidDomain {
            parameter: "n".to_string(),
            message: "need at least 1 subinterval".to_string(),
        });
    }

    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    Ok(h * sum)
}

/// Integrate using the adaptive trapezoidal rule.
///
/// Starts from a single interval and repeatedly doubles the subinterval
/// count until two successive estimates differ by at most `acc`. Each
/// refinement reuses the previous sample sum and evaluates the function only
/// at the newly inserted midpoints: `T_2n = T_n / 2 + h * (sum of midpoints)`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `acc` - Absolute tolerance on the change between successive estimates
///
/// # Errors
///
/// * `InvalidDomain` if `acc` is not a positive number
/// * `DidNotConverge` if the estimates still disagree after 30 doublings
///
/// # Example
///
/// ```
/// use calcr::integrate::adaptive_trapezoid;
///
/// let result = adaptive_trapezoid(|x| x * x, 0.0, 1.0, 1e-6).unwrap();
/// assert!((result - 1.0 / 3.0).abs() < 1e-5);
/// ```
pub fn adaptive_trapezoid<F>(f: F, a: f64, b: f64, acc: f64) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    if !(acc > 0.0) {
        return Err(IntegrateError::InvalidDomain {
            parameter: "acc".to_string(),
            message: format!("tolerance must be a positive number (got {})", acc),
        });
    }

    // Single-interval estimate
    let mut estimate = 0.5 * (b - a) * (f(a) + f(b));

    for level in 1..=MAX_REFINEMENTS {
        let n: u64 = 1 << level;
        let h = (b - a) / n as f64;

        // Only the odd multiples of h are new at this level
        let new_points = 1u64 << (level - 1);
        let mut sum = 0.0;
        for i in 0..new_points {
            sum += f(a + (2 * i + 1) as f64 * h);
        }

        let refined = 0.5 * estimate + h * sum;
        if (refined - estimate).abs() <= acc {
            return Ok(refined);
        }
        estimate = refined;
    }

    Err(IntegrateError::DidNotConverge {
        refinements: MAX_REFINEMENTS,
        tolerance: acc,
        context: "adaptive_trapezoid".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_trapezoid_constant() {
        // Integral of a constant = constant * width, exact even for n = 1
        let result = trapezoid(|_| 5.0, 0.0, 4.0, 1).unwrap();
        assert!((result - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_linear_exact() {
        // Exact for degree <= 1 regardless of resolution
        for n in [1, 2, 3, 17, 100] {
            let result = trapezoid(|x| 2.0 * x + 1.0, 0.0, 2.0, n).unwrap();
            assert!((result - 6.0).abs() < 1e-12, "n = {}: got {}", n, result);
        }
    }

    #[test]
    fn test_trapezoid_quadratic() {
        // Integral of x^2 from 0 to 1 = 1/3
        let result = trapezoid(|x| x * x, 0.0, 1.0, 1000).unwrap();
        assert!((result - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_trapezoid_sin() {
        // Integral of sin(x) from 0 to pi = 2
        let result = trapezoid(|x: f64| x.sin(), 0.0, PI, 1000).unwrap();
        assert!((result - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_trapezoid_reversed_bounds() {
        // Swapping the bounds negates the integral
        let forward = trapezoid(|x| x * x, 0.0, 1.0, 100).unwrap();
        let backward = trapezoid(|x| x * x, 1.0, 0.0, 100).unwrap();
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_zero_subintervals() {
        let result = trapezoid(|x| x, 0.0, 1.0, 0);
        assert!(matches!(result, Err(IntegrateError::InvalidDomain { .. })));
    }

    #[test]
    fn test_adaptive_quadratic() {
        let result = adaptive_trapezoid(|x| x * x, 0.0, 1.0, 1e-6).unwrap();
        assert!((result - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_adaptive_sin() {
        let result = adaptive_trapezoid(|x: f64| x.sin(), 0.0, PI, 1e-8).unwrap();
        assert!((result - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_adaptive_exp() {
        // Integral of exp(x) from 0 to 1 = e - 1
        let result = adaptive_trapezoid(|x: f64| x.exp(), 0.0, 1.0, 1e-8).unwrap();
        let exact = std::f64::consts::E - 1.0;
        assert!((result - exact).abs() < 1e-6);
    }

    #[test]
    fn test_adaptive_empty_interval() {
        // a == b converges immediately to zero
        let result = adaptive_trapezoid(|x| x * x, 2.0, 2.0, 1e-9).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_adaptive_invalid_tolerance() {
        for acc in [0.0, -1.0, f64::NAN] {
            let result = adaptive_trapezoid(|x| x, 0.0, 1.0, acc);
            assert!(matches!(result, Err(IntegrateError::InvalidDomain { .. })));
        }
    }
}
