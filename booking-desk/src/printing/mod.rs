//! Receipt, kitchen docket and prep sheet printing
//!
//! Renderers build printer-agnostic [`docket_printer::Docket`]s;
//! [`print_docket`] sends one to a network printer.

pub mod renderer;

use docket_printer::{Docket, NetworkPrinter, PrintResult, Printer};
use tracing::instrument;

pub use renderer::{KitchenDocketRenderer, PrepSheetRenderer, ReceiptRenderer};

/// Encode `docket` for `width` columns and send it to `printer`
#[instrument(skip(printer, docket), fields(addr = %printer.addr()))]
pub async fn print_docket(printer: &NetworkPrinter, docket: &Docket, width: usize) -> PrintResult<()> {
    printer.print(&docket.to_escpos(width)).await
}
