use super::calculator::{CalculationError, Calculator};
use super::input_sanitizer::{parse_measurement, sanitize_number_input};
use super::triangle_calculator::TriangleCalculator;

/// Outcome of one solve: nothing to show, a domain error to surface, or `N`.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Empty,
    Invalid(String),
    Value(f64),
}

impl Solution {
    /// Text for the result field; `N` is rendered with four decimals.
    pub fn result_text(&self) -> String {
        match self {
            Solution::Value(n) => format!("{:.4}", n),
            Solution::Empty | Solution::Invalid(_) => String::new(),
        }
    }

    /// Text for the error line, empty when there is nothing to report.
    pub fn error_text(&self) -> &str {
        match self {
            Solution::Invalid(message) => message,
            Solution::Empty | Solution::Value(_) => "",
        }
    }
}

impl From<Result<f64, CalculationError>> for Solution {
    fn from(result: Result<f64, CalculationError>) -> Self {
        match result {
            Ok(n) => Solution::Value(n),
            Err(CalculationError::NoValue) => Solution::Empty,
            Err(e @ CalculationError::DomainViolation) => Solution::Invalid(e.to_string()),
        }
    }
}

/// Computes `N` from already-parsed measurements.
fn calculate_n(
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
) -> Result<f64, CalculationError> {
    let (a, b, c) = match (a, b, c) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return Err(CalculationError::NoValue),
    };
    TriangleCalculator::new(b, c)?.perform_calculation(a)
}

/// Sanitizes and parses the three raw field texts, then solves.
pub fn solve(a_text: &str, b_text: &str, c_text: &str) -> Solution {
    let [a, b, c] =
        [a_text, b_text, c_text].map(|text| parse_measurement(&sanitize_number_input(text)));
    calculate_n(a, b, c).into()
}
