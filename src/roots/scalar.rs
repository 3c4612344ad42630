//! The four scalar root-finding solvers and their shared result contract.

use crate::roots::error::{RootError, RootsResult};

/// Options shared by all root-finding solvers.
#[derive(Debug, Clone)]
pub struct RootOptions {
    /// Tolerance on the step size or bracket width (must be positive).
    pub accuracy: f64,
    /// Maximum number of iterations before giving up.
    pub max_steps: usize,
    /// Record every accepted `(x, f(x))` pair into the result's trace.
    /// Purely observational; never influences the search itself.
    pub trace: bool,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            accuracy: 1e-6,
            max_steps: 1000,
            trace: false,
        }
    }
}

/// One accepted step of a root search: the estimate and its function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    pub x: f64,
    pub f_x: f64,
}

/// Result from a root-finding solver.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    /// The root found
    pub root: f64,
    /// Function value at the root
    pub function_value: f64,
    /// Number of iterations performed
    pub steps: usize,
    /// Accepted `(x, f(x))` pairs, starting with the initial guess.
    /// Empty unless [`RootOptions::trace`] was set.
    pub trace: Vec<IterationRecord>,
}

fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    // Comparing signs directly instead of multiplying avoids float
    // underflow on products of two tiny values
    (lhs > 0.0 && rhs < 0.0) || (lhs < 0.0 && rhs > 0.0)
}

fn same_sign(lhs: f64, rhs: f64) -> bool {
    (lhs > 0.0 && rhs > 0.0) || (lhs < 0.0 && rhs < 0.0)
}

/// Simple search with step halving.
///
/// Walks from `x0` in strides of `dx`. Whenever a stride flips the sign of
/// `f` the root was overshot: the stride is undone and halved, keeping its
/// direction. Terminates when the stride shrinks below `accuracy` or the
/// current function value is exactly zero.
///
/// `dx` must already point toward the root; if it points away the search
/// walks in the wrong direction until the step budget runs out.
///
/// # Arguments
/// * `f` - Function to find a root of
/// * `x0` - Initial guess
/// * `dx` - Initial stride, signed toward the root
/// * `options` - Solver options
///
/// # Errors
/// * `StepBudgetExceeded` if `max_steps` iterations pass without converging
///
/// # Example
///
/// ```
/// use calcr::roots::{simple_search, RootOptions};
///
/// let result = simple_search(|x| x * x - 4.0, 1.0, 0.1, &RootOptions::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-5);
/// ```
pub fn simple_search<F>(f: F, x0: f64, dx: f64, options: &RootOptions) -> RootsResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut x = x0;
    let mut dx = dx;
    let mut fx = f(x);
    let mut steps = 0;
    let mut trace = Vec::new();
    if options.trace {
        trace.push(IterationRecord { x, f_x: fx });
    }

    while dx.abs() > options.accuracy && fx != 0.0 {
        x += dx;
        let f_new = f(x);

        if is_sign_change(fx, f_new) {
            // stepped past the root: step back and halve the stride
            x -= dx;
            dx /= 2.0;
        } else {
            fx = f_new;
        }

        steps += 1;
        if steps > options.max_steps {
            return Err(RootError::StepBudgetExceeded {
                max_steps: options.max_steps,
                last_x: x,
                context: "simple_search".to_string(),
            });
        }
        if options.trace {
            trace.push(IterationRecord { x, f_x: fx });
        }
    }

    Ok(RootResult {
        root: x,
        function_value: fx,
        steps,
        trace,
    })
}

/// Bisection method.
///
/// Requires `f(x1)` and `f(x2)` of opposite sign. Each iteration evaluates
/// the midpoint and replaces whichever endpoint shares its sign, halving the
/// bracket. Terminates when the bracket width shrinks below `accuracy` or
/// the midpoint's function value is exactly zero. Convergence is linear but
/// guaranteed for any valid bracket.
///
/// The endpoints may be given in either order.
///
/// # Arguments
/// * `f` - Function to find a root of
/// * `x1` - One bracket endpoint
/// * `x2` - The other bracket endpoint
/// * `options` - Solver options
///
/// # Errors
/// * `InvalidBracket` if `f(x1)` and `f(x2)` share a sign; no further
///   evaluations are made in that case
/// * `StepBudgetExceeded` if `max_steps` iterations pass without converging
///
/// # Example
///
/// ```
/// use calcr::roots::{bisection, RootOptions};
///
/// let result = bisection(|x| x * x - 4.0, 0.0, 3.0, &RootOptions::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-5);
/// ```
pub fn bisection<F>(f: F, x1: f64, x2: f64, options: &RootOptions) -> RootsResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    let f1 = f(x1);
    let f2 = f(x2);
    if same_sign(f1, f2) {
        return Err(RootError::InvalidBracket {
            f_x1: f1,
            f_x2: f2,
            context: "bisection".to_string(),
        });
    }

    let mut lo = x1;
    let mut hi = x2;
    let mut f_lo = f1;
    let mut mid = 0.5 * (lo + hi);
    let mut f_mid = f(mid);
    let mut width = hi - lo;
    let mut steps = 0;
    let mut trace = Vec::new();
    if options.trace {
        trace.push(IterationRecord { x: mid, f_x: f_mid });
    }

    while width.abs() > options.accuracy {
        if f_mid == 0.0 {
            break;
        }

        if same_sign(f_mid, f_lo) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
        f_mid = f(mid);
        width = hi - lo;

        steps += 1;
        if steps > options.max_steps {
            return Err(RootError::StepBudgetExceeded {
                max_steps: options.max_steps,
                last_x: mid,
                context: "bisection".to_string(),
            });
        }
        if options.trace {
            trace.push(IterationRecord { x: mid, f_x: f_mid });
        }
    }

    Ok(RootResult {
        root: mid,
        function_value: f_mid,
        steps,
        trace,
    })
}

/// Secant method.
///
/// Keeps the two most recent estimates and steps to the root of the line
/// through their `(x, f(x))` pairs. Superlinear convergence near simple
/// roots, but without a bracket there is no guarantee: poor seeds can
/// diverge until the step budget runs out. Either seed evaluating to
/// exactly zero returns immediately.
///
/// # Arguments
/// * `f` - Function to find a root of
/// * `x0` - First guess
/// * `x1` - Second guess
/// * `options` - Solver options
///
/// # Errors
/// * `HorizontalSecant` if the two most recent function values are exactly
///   equal, leaving no slope to step along
/// * `StepBudgetExceeded` if `max_steps` iterations pass without converging
///
/// # Example
///
/// ```
/// use calcr::roots::{secant, RootOptions};
///
/// let result = secant(|x| x * x - 4.0, 1.0, 3.0, &RootOptions::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-5);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, options: &RootOptions) -> RootsResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut x_cur = x1;
    let mut f_prev = f(x_prev);
    let mut trace = Vec::new();
    if options.trace {
        trace.push(IterationRecord {
            x: x_prev,
            f_x: f_prev,
        });
    }
    if f_prev == 0.0 {
        return Ok(RootResult {
            root: x_prev,
            function_value: f_prev,
            steps: 0,
            trace,
        });
    }

    let mut dx = x_cur - x_prev;
    let mut steps = 0;

    while dx.abs() > options.accuracy {
        let f_cur = f(x_cur);
        if options.trace {
            trace.push(IterationRecord {
                x: x_cur,
                f_x: f_cur,
            });
        }
        if f_cur == 0.0 {
            return Ok(RootResult {
                root: x_cur,
                function_value: f_cur,
                steps,
                trace,
            });
        }
        if f_cur == f_prev {
            return Err(RootError::HorizontalSecant {
                x0: x_prev,
                x1: x_cur,
                f_x: f_cur,
            });
        }

        // Interpolate the line through the two latest pairs to its zero
        dx *= -f_cur / (f_cur - f_prev);
        x_prev = x_cur;
        f_prev = f_cur;
        x_cur += dx;

        steps += 1;
        if steps > options.max_steps {
            return Err(RootError::StepBudgetExceeded {
                max_steps: options.max_steps,
                last_x: x_cur,
                context: "secant".to_string(),
            });
        }
    }

    let function_value = f(x_cur);
    Ok(RootResult {
        root: x_cur,
        function_value,
        steps,
        trace,
    })
}

/// Newton-Raphson (tangent) method.
///
/// Steps along the tangent line: `x_new = x - f(x) / df(x)`. Quadratic
/// convergence near simple roots with nonzero derivative. There is no
/// safeguard against divergence or oscillation for poor initial guesses;
/// such searches end in `StepBudgetExceeded`.
///
/// # Arguments
/// * `f` - Function to find a root of
/// * `df` - Derivative of `f`
/// * `x0` - Initial guess
/// * `options` - Solver options
///
/// # Errors
/// * `ZeroDerivative` if `df` evaluates to exactly zero at any iterate,
///   including `x0` before the first step
/// * `StepBudgetExceeded` if `max_steps` iterations pass without converging
///
/// # Example
///
/// ```
/// use calcr::roots::{newton, RootOptions};
///
/// let result = newton(|x| x * x - 4.0, |x| 2.0 * x, 1.5, &RootOptions::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-6);
/// ```
pub fn newton<F, DF>(f: F, df: DF, x0: f64, options: &RootOptions) -> RootsResult<RootResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = x0;
    let mut fx = f(x);
    let mut steps = 0;
    let mut trace = Vec::new();
    if options.trace {
        trace.push(IterationRecord { x, f_x: fx });
    }

    loop {
        let dfx = df(x);
        if dfx == 0.0 {
            return Err(RootError::ZeroDerivative { x });
        }
        if fx == 0.0 {
            return Ok(RootResult {
                root: x,
                function_value: fx,
                steps,
                trace,
            });
        }

        let dx = -fx / dfx;
        x += dx;
        fx = f(x);
        steps += 1;
        if options.trace {
            trace.push(IterationRecord { x, f_x: fx });
        }

        if dx.abs() <= options.accuracy || fx == 0.0 {
            return Ok(RootResult {
                root: x,
                function_value: fx,
                steps,
                trace,
            });
        }
        if steps > options.max_steps {
            return Err(RootError::StepBudgetExceeded {
                max_steps: options.max_steps,
                last_x: x,
                context: "newton".to_string(),
            });
        }
    }
}
