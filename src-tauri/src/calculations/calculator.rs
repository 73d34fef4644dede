use thiserror::Error;

/// Message shown when the side lengths cannot form the construction.
pub const DOMAIN_VIOLATION_MESSAGE: &str = "b² ≥ c² を満たしていません。";

pub trait Calculator {
    fn perform_calculation(&self, a: f64) -> Result<f64, CalculationError>;
}

// Blank or half-typed input folds into NoValue so live editing never flashes an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("no value")]
    NoValue,
    #[error("{}", DOMAIN_VIOLATION_MESSAGE)]
    DomainViolation,
}

impl CalculationError {
    /// The text a form should show for this error, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            CalculationError::NoValue => None,
            CalculationError::DomainViolation => Some(DOMAIN_VIOLATION_MESSAGE),
        }
    }
}
