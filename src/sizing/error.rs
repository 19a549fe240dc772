use thiserror::Error;

/// Caller contract violations rejected at search entry. An infeasible
/// area budget is not an error; the search reports that as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("allowed area must be positive, got {0} sq ft")]
    NonPositiveArea(f64),

    #[error("maverik height ratio must be positive, got {0}")]
    NonPositiveRatio(f64),

    #[error("catalog contains a zero digit size")]
    ZeroDigitSize,

    #[error("digit size {digit_size}: dimensions must be positive")]
    ZeroDimension { digit_size: u32 },

    #[error("digit size {digit_size}: min bound exceeds max bound")]
    InvertedRange { digit_size: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SizingError::NonPositiveArea(-3.0).to_string(),
            "allowed area must be positive, got -3 sq ft"
        );
        assert_eq!(
            SizingError::InvertedRange { digit_size: 24 }.to_string(),
            "digit size 24: min bound exceeds max bound"
        );
    }
}
