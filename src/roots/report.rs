//! Display-only rendering of root-finding traces.
//!
//! Nothing here affects the numerical contract: a trace is rendered from the
//! records a solver already returned, and the formatting configuration is
//! passed explicitly rather than held in shared state.

use std::fmt::Write;

use crate::roots::scalar::IterationRecord;

/// Column layout for [`render`].
#[derive(Debug, Clone)]
pub struct TraceFormat {
    /// Digits after the decimal point.
    pub precision: usize,
    /// Width of each numeric column.
    pub width: usize,
}

impl Default for TraceFormat {
    fn default() -> Self {
        Self {
            precision: 12,
            width: 20,
        }
    }
}

/// Render a recorded trace as a step table.
///
/// One row per record: step index, root estimate, step size (the change
/// from the previous estimate, blank on the first row), and function value.
///
/// # Example
///
/// ```
/// use calcr::roots::{bisection, render, RootOptions, TraceFormat};
///
/// let options = RootOptions { trace: true, ..Default::default() };
/// let result = bisection(|x| x * x - 4.0, 0.0, 3.0, &options).unwrap();
///
/// let table = render("Bisection Search", options.accuracy, &result.trace, &TraceFormat::default());
/// assert!(table.contains("ROOT FINDING using Bisection Search"));
/// ```
pub fn render(
    algorithm: &str,
    accuracy: f64,
    trace: &[IterationRecord],
    format: &TraceFormat,
) -> String {
    let w = format.width;
    let p = format.precision;

    let mut out = String::new();
    let _ = writeln!(out, " ROOT FINDING using {}", algorithm);
    let _ = writeln!(out, " Requested accuracy = {:e}", accuracy);
    let _ = writeln!(
        out,
        " {:>4}  {:>w$}  {:>w$}  {:>w$}",
        "Step", "Guess For Root", "Step Size", "Function Value"
    );
    let rule = "-".repeat(w);
    let _ = writeln!(out, " {:>4}  {:>w$}  {:>w$}  {:>w$}", "----", rule, rule, rule);

    for (step, record) in trace.iter().enumerate() {
        let dx = if step == 0 {
            String::new()
        } else {
            format!("{:.p$}", record.x - trace[step - 1].x)
        };
        let _ = writeln!(
            out,
            " {:>4}  {:>w$.p$}  {:>w$}  {:>w$.p$}",
            step, record.x, dx, record.f_x
        );
    }

    out
}
