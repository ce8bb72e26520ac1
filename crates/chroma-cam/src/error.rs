//! Error types for appearance model construction.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised while deriving viewing conditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CamError {
    /// Adapting field luminance must be strictly positive.
    #[error("adapting luminance must be positive, got {la} cd/m2")]
    NonPositiveLuminance {
        /// Rejected adapting luminance.
        la: f32,
    },

    /// Reference white must carry positive, finite luminance.
    #[error("white point luminance must be positive and finite, got Y={y}")]
    InvalidWhitePoint {
        /// Rejected white point Y.
        y: f32,
    },
}

impl CamError {
    /// Create a non-positive adapting luminance error.
    pub fn non_positive_luminance(la: f32) -> Self {
        Self::NonPositiveLuminance { la }
    }

    /// Create an invalid white point error.
    pub fn invalid_white_point(y: f32) -> Self {
        Self::InvalidWhitePoint { y }
    }

    /// Check if this is a luminance error.
    pub fn is_luminance_error(&self) -> bool {
        matches!(self, Self::NonPositiveLuminance { .. })
    }

    /// Check if this is a white point error.
    pub fn is_white_point_error(&self) -> bool {
        matches!(self, Self::InvalidWhitePoint { .. })
    }
}

/// Result alias for appearance model operations.
pub type CamResult<T> = Result<T, CamError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CamError::non_positive_luminance(-1.0);
        assert!(err.to_string().contains("-1"));

        let err = CamError::invalid_white_point(0.0);
        assert!(err.to_string().contains("Y=0"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(CamError::non_positive_luminance(0.0).is_luminance_error());
        assert!(!CamError::non_positive_luminance(0.0).is_white_point_error());
        assert!(CamError::invalid_white_point(f32::NAN).is_white_point_error());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CamError::non_positive_luminance(0.0),
            CamError::NonPositiveLuminance { la: 0.0 }
        );
    }
}
