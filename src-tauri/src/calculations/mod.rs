pub mod calculator;
pub mod input_sanitizer;
pub mod solver;
pub mod triangle_calculator;

pub use calculator::{CalculationError, Calculator, DOMAIN_VIOLATION_MESSAGE};
pub use solver::{solve, Solution};
