//! Unified error codes
//!
//! Every crate maps its own error enum onto an [`ErrorCode`]; the code's
//! leading digit gives the [`ErrorCategory`]:
//!
//! | range | category |
//! |-------|----------|
//! | 0xxx  | general  |
//! | 1xxx  | booking lifecycle |
//! | 2xxx  | payment  |
//! | 3xxx  | printing |
//! | 9xxx  | system / booking service |
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::MissingReason).with_detail("bookingId", "b-42");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, 1002);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
