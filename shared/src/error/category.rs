use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Which part of the desk an error belongs to, from the code's thousands digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Booking,
    Payment,
    Printing,
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 => Self::Booking,
            2 => Self::Payment,
            3 => Self::Printing,
            _ => Self::System,
        }
    }

    /// The operator can fix it by changing their input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::General | Self::Booking | Self::Payment)
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Booking);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Printing);
        assert_eq!(ErrorCategory::from_code(9003), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(12000), ErrorCategory::System);
    }

    #[test]
    fn test_codes_land_in_their_category() {
        assert_eq!(ErrorCode::MissingReason.category(), ErrorCategory::Booking);
        assert_eq!(ErrorCode::InvalidAmount.category(), ErrorCategory::Payment);
        assert_eq!(ErrorCode::PrintFailed.category(), ErrorCategory::Printing);
        assert_eq!(ErrorCode::UpstreamError.category(), ErrorCategory::System);

        assert!(ErrorCode::InvalidAmount.category().is_user_error());
        assert!(!ErrorCode::NetworkError.category().is_user_error());
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Booking).unwrap(),
            "\"booking\""
        );
    }
}
