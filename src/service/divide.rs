use tracing::debug;

use crate::config::DivisionMode;
use crate::errors::{DemoError, DemoResult, ErrorCode, ErrorMessage};
use crate::metrics::DIVISIONS_TOTAL;

/// Message attached to every failed division
pub const DIVISION_BY_ZERO: &str = "division by zero";

/// Stateless integer division service
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideService {
    mode: DivisionMode,
}

impl DivideService {
    pub fn new(mode: DivisionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DivisionMode {
        self.mode
    }

    /// Divide `a` by `b`.
    ///
    /// Every failure of the division is reported the same way, as a
    /// `BAD_REQUEST` business error with the message "division by zero".
    pub fn divide(&self, a: i32, b: i32) -> DemoResult<f64> {
        debug!(a, b, mode = %self.mode, "performing division");

        match self.quotient(a, b) {
            Some(result) => {
                DIVISIONS_TOTAL.with_label_values(&["ok"]).inc();
                Ok(result)
            }
            None => {
                DIVISIONS_TOTAL.with_label_values(&["failed"]).inc();
                Err(DemoError::Business(ErrorMessage::from_override(
                    ErrorCode::BadRequest,
                    DIVISION_BY_ZERO,
                )))
            }
        }
    }

    fn quotient(&self, a: i32, b: i32) -> Option<f64> {
        match self.mode {
            DivisionMode::Exact => (b != 0).then(|| f64::from(a) / f64::from(b)),
            // i32::MIN / -1 wraps to i32::MIN, as two's-complement division does
            DivisionMode::Truncate => (b != 0).then(|| f64::from(a.wrapping_div(b))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn division_by_zero() -> DemoError {
        DemoError::Business(ErrorMessage::from_override(
            ErrorCode::BadRequest,
            "division by zero",
        ))
    }

    #[test]
    fn test_divide_exact() {
        let service = DivideService::new(DivisionMode::Exact);
        assert_eq!(assert_ok!(service.divide(10, 2)), 5.0);
        assert_eq!(assert_ok!(service.divide(7, 2)), 3.5);
        assert_eq!(assert_ok!(service.divide(-9, 4)), -2.25);
        assert_eq!(assert_ok!(service.divide(0, 5)), 0.0);
    }

    #[test]
    fn test_divide_truncate() {
        let service = DivideService::new(DivisionMode::Truncate);
        assert_eq!(assert_ok!(service.divide(10, 2)), 5.0);
        assert_eq!(assert_ok!(service.divide(7, 2)), 3.0);
        assert_eq!(assert_ok!(service.divide(-7, 2)), -3.0);
    }

    #[test]
    fn test_divide_by_zero_is_business_error() {
        for mode in [DivisionMode::Exact, DivisionMode::Truncate] {
            let service = DivideService::new(mode);
            for a in [i32::MIN, -1, 0, 1, 10, i32::MAX] {
                let err = assert_err!(service.divide(a, 0));
                assert_eq!(err, division_by_zero());
                assert_eq!(err.error_message().code(), "BAD_REQUEST");
                assert_eq!(err.error_message().message(), "division by zero");
            }
        }
    }

    #[test]
    fn test_min_divided_by_minus_one() {
        let service = DivideService::new(DivisionMode::Truncate);
        assert_eq!(assert_ok!(service.divide(i32::MIN, -1)), -2_147_483_648.0);

        // Widening first cannot overflow
        let service = DivideService::new(DivisionMode::Exact);
        assert_eq!(assert_ok!(service.divide(i32::MIN, -1)), 2_147_483_648.0);
    }

    #[test]
    fn test_default_mode_is_exact() {
        assert_eq!(DivideService::default().mode(), DivisionMode::Exact);
    }
}
