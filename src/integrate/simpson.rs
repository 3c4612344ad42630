//! Simpson's rule for numerical integration.
//!
//! Simpson's rule fits parabolas through consecutive sample-point triples,
//! achieving O(h⁴) accuracy for smooth functions.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Integrate using the composite Simpson's 1/3 rule.
///
/// Computes `(h/3) * (f(a) + f(b) + 4 * sum of odd samples + 2 * sum of
/// interior even samples)` over `n` equal subintervals, `h = (b - a) / n`.
/// Exact for polynomials up to degree 3.
///
/// The rule pairs subintervals, so `n` must be even; an odd count is
/// rejected rather than silently mis-weighting the tail samples.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of subintervals (even, at least 2)
///
/// # Errors
///
/// * `InvalidDomain` if `n` is zero or odd
///
/// # Example
///
/// ```
/// use calcr::integrate::simpson;
///
/// // Exact for cubics: integral of x^3 from 0 to 1 = 1/4
/// let result = simpson(|x| x * x * x, 0.0, 1.0, 2).unwrap();
/// assert!((result - 0.25).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(IntegrateError::InvalidDomain {
            parameter: "n".to_string(),
            message: "need at least 2 subintervals".to_string(),
        });
    }
    if n % 2 != 0 {
        return Err(IntegrateError::InvalidDomain {
            parameter: "n".to_string(),
            message: format!("Simpson's rule needs an even subinterval count (got {})", n),
        });
    }

    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in (1..n).step_by(2) {
        sum += 4.0 * f(a + i as f64 * h);
    }
    for i in (2..n).step_by(2) {
        sum += 2.0 * f(a + i as f64 * h);
    }

    Ok(sum * h / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_simpson_constant() {
        let result = simpson(|_| 3.0, 0.0, 4.0, 2).unwrap();
        assert!((result - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_simpson_quadratic_exact() {
        // Integral of x^2 from 0 to 1 = 1/3, exact at any even resolution
        for n in [2, 4, 10, 100] {
            let result = simpson(|x| x * x, 0.0, 1.0, n).unwrap();
            assert!(
                (result - 1.0 / 3.0).abs() < 1e-12,
                "n = {}: got {}",
                n,
                result
            );
        }
    }

    #[test]
    fn test_simpson_cubic_exact() {
        // Integral of x^3 from 0 to 1 = 1/4, still exact
        let result = simpson(|x| x * x * x, 0.0, 1.0, 2).unwrap();
        assert!((result - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_simpson_quartic() {
        // Degree 4 is no longer exact but converges fast:
        // integral of x^4 from 0 to 1 = 0.2
        let result = simpson(|x| x.powi(4), 0.0, 1.0, 100).unwrap();
        assert!((result - 0.2).abs() < 1e-8);
    }

    #[test]
    fn test_simpson_sin() {
        // Integral of sin(x) from 0 to pi = 2
        let result = simpson(|x: f64| x.sin(), 0.0, PI, 100).unwrap();
        assert!((result - 2.0).abs() < 1e-7);
    }

    #[test]
    fn test_simpson_reversed_bounds() {
        let forward = simpson(|x: f64| x.exp(), 0.0, 1.0, 50).unwrap();
        let backward = simpson(|x: f64| x.exp(), 1.0, 0.0, 50).unwrap();
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_simpson_rejects_odd_n() {
        for n in [1, 3, 99] {
            let result = simpson(|x| x, 0.0, 1.0, n);
            assert!(
                matches!(result, Err(IntegrateError::InvalidDomain { .. })),
                "n = {} should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_simpson_rejects_zero_n() {
        let result = simpson(|x| x, 0.0, 1.0, 0);
        assert!(matches!(result, Err(IntegrateError::InvalidDomain { .. })));
    }
}
