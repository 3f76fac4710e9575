//! Response envelopes returned by the remote booking API

use serde::{Deserialize, Serialize};

use crate::models::Booking;

/// `{ success, booking?, error? }` returned by status and payment updates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn ok(booking: Option<Booking>) -> Self {
        Self {
            success: true,
            booking,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            booking: None,
            error: Some(error.into()),
        }
    }

    /// Convert the envelope into a result, using `"Unknown error"` when
    /// the remote side reports failure without a message
    pub fn into_result(self) -> Result<Option<Booking>, String> {
        if self.success {
            Ok(self.booking)
        } else {
            Err(self.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

/// `{ success, data?, error? }` returned by read endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}
