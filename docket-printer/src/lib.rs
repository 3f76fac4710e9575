//! # docket-printer
//!
//! Receipt and kitchen-docket layout plus ESC/POS thermal printing.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - a [`Docket`] document model rendered to plain text or ESC/POS bytes
//! - ESC/POS command building
//! - Windows-1252 encoding for Western thermal printers
//! - Network printing (TCP port 9100)
//!
//! Business logic (WHAT to print) stays in application code:
//! receipts, kitchen dockets and prep sheets are rendered by `booking-desk`.
//!
//! ## Example
//!
//! ```ignore
//! use docket_printer::{Docket, NetworkPrinter, Printer};
//!
//! let mut docket = Docket::new();
//! docket.title("KITCHEN DOCKET");
//! docket.sep_double();
//! docket.pair("Butter Chicken", "x5");
//!
//! println!("{}", docket.to_text(42));
//!
//! let printer = NetworkPrinter::from_addr("192.168.1.100:9100")?;
//! printer.print(&docket.to_escpos(42)).await?;
//! ```

mod document;
mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use document::{Docket, DocketLine};
pub use encoding::{convert_to_codepage, pad_text, text_width, truncate_text, wrap_text};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{NetworkPrinter, Printer};
