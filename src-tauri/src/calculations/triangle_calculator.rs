use super::calculator::{CalculationError, Calculator};
use std::f64::consts::SQRT_2;

pub struct TriangleCalculator {
    c: f64,
    alpha: f64,
}

impl TriangleCalculator {
    pub fn new(b: f64, c: f64) -> Result<Self, CalculationError> {
        if b.is_nan() || c.is_nan() {
            return Err(CalculationError::NoValue);
        }

        // b² < c² without squaring, so lengths near f64::MAX stay finite.
        let (b, c) = (b.abs(), c.abs());
        if b < c {
            return Err(CalculationError::DomainViolation);
        }

        // sqrt(b² - c²) = sqrt(b - c) * sqrt(b + c), with b + c halved to avoid overflow.
        let alpha = (b - c).sqrt() * (b / 2.0 + c / 2.0).sqrt() * SQRT_2;
        if !alpha.is_finite() {
            return Err(CalculationError::NoValue);
        }

        Ok(TriangleCalculator { c, alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self, a: f64) -> f64 {
        a - self.alpha
    }
}

impl Calculator for TriangleCalculator {
    fn perform_calculation(&self, a: f64) -> Result<f64, CalculationError> {
        if a.is_nan() {
            return Err(CalculationError::NoValue);
        }
        let n = self.beta(a).hypot(self.c);
        if n.is_finite() {
            Ok(n)
        } else {
            Err(CalculationError::NoValue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_zero_when_b_equals_c() {
        let calculator = TriangleCalculator::new(4.0, 4.0).unwrap();
        assert_eq!(calculator.alpha(), 0.0);
        let n = calculator.perform_calculation(5.0).unwrap();
        assert!((n - 41f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rejects_b_shorter_than_c() {
        assert_eq!(
            TriangleCalculator::new(3.0, 5.0).err(),
            Some(CalculationError::DomainViolation)
        );
    }

    #[test]
    fn beta_may_go_negative() {
        let calculator = TriangleCalculator::new(8.0, 6.0).unwrap();
        assert!(calculator.beta(1.0) < 0.0);
        let n = calculator.perform_calculation(1.0).unwrap();
        let expected = ((1.0 - 28f64.sqrt()).powi(2) + 36.0).sqrt();
        assert!((n - expected).abs() < 1e-12);
    }

    #[test]
    fn huge_lengths_do_not_overflow() {
        let calculator = TriangleCalculator::new(1e200, 1.0).unwrap();
        assert!((calculator.alpha() / 1e200 - 1.0).abs() < 1e-12);
        let n = calculator.perform_calculation(1.0).unwrap();
        assert!((n / 1e200 - 1.0).abs() < 1e-12);

        let calculator = TriangleCalculator::new(f64::MAX, f64::MAX).unwrap();
        assert_eq!(calculator.alpha(), 0.0);
        assert_eq!(calculator.perform_calculation(1.0).unwrap(), f64::MAX);
    }

    #[test]
    fn result_beyond_f64_is_no_value() {
        let calculator = TriangleCalculator::new(f64::MAX, f64::MAX).unwrap();
        assert_eq!(
            calculator.perform_calculation(f64::MAX),
            Err(CalculationError::NoValue)
        );
    }
}
