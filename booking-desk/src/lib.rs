//! Booking Desk - catering booking operations
//!
//! # Overview
//!
//! Works on snapshots fetched from the booking service:
//!
//! - **Bookings** (`bookings`): balances, kitchen rollup, day summary,
//!   filter/sort with facet counts, validated status and payment changes
//! - **Printing** (`printing`): receipts, kitchen dockets, prep sheets
//! - **Report** (`report`): one delivery day, fetched and derived
//!
//! # Module structure
//!
//! ```text
//! booking-desk/src/
//! ├── core/          # configuration
//! ├── bookings/      # booking views and actions
//! ├── printing/      # docket renderers
//! ├── report.rs      # day report
//! └── utils/         # logging
//! ```

pub mod bookings;
pub mod core;
pub mod printing;
pub mod report;
pub mod utils;

pub use bookings::{BookingError, BookingFilters, BookingResult, StatusController};
pub use self::core::Config;
pub use report::DayReport;
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}
