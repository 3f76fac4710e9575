use anyhow::Context;
use booking_client::BookingApi;
use booking_desk::printing::{KitchenDocketRenderer, ReceiptRenderer, print_docket};
use booking_desk::{Config, DayReport, setup_environment};
use chrono::NaiveDate;
use docket_printer::{Docket, NetworkPrinter};
use shared::{Booking, BookingStatus, PaymentStatus};

const USAGE: &str = "usage: booking-desk [YYYY-MM-DD] | receipt <booking-id> | docket <booking-id>
       | status <booking-id> <status> [reason...] | pay <booking-id> <payment-status> <amount>";

enum Command {
    Day(NaiveDate),
    Receipt(String),
    Docket(String),
    Status {
        id: String,
        status: BookingStatus,
        reason: Option<String>,
    },
    Pay {
        id: String,
        payment_status: PaymentStatus,
        amount: f64,
    },
}

fn parse_args(config: &Config) -> anyhow::Result<Command> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let today = || chrono::Utc::now().with_timezone(&config.timezone).date_naive();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => Ok(Command::Day(today())),
        ["receipt", id] => Ok(Command::Receipt(id.to_string())),
        ["docket", id] => Ok(Command::Docket(id.to_string())),
        ["status", id, status, reason @ ..] => Ok(Command::Status {
            id: id.to_string(),
            status: status.parse().map_err(anyhow::Error::msg)?,
            reason: (!reason.is_empty()).then(|| reason.join(" ")),
        }),
        ["pay", id, payment_status, amount] => Ok(Command::Pay {
            id: id.to_string(),
            payment_status: payment_status.parse().map_err(anyhow::Error::msg)?,
            amount: amount
                .parse()
                .with_context(|| format!("invalid amount '{}'", amount))?,
        }),
        [date] => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{}'\n{}", date, USAGE))?;
            Ok(Command::Day(date))
        }
        _ => anyhow::bail!(USAGE),
    }
}

fn show_change(before: &Booking, updated: Option<Booking>) {
    let after = updated.as_ref().unwrap_or(before);
    println!(
        "{}: {} / {} (balance {})",
        after.booking_reference,
        after.status,
        after.payment_status,
        shared::money::format_amount(after.balance())
    );
}

/// Show on stdout, then send to the kitchen printer when one is configured
async fn output(config: &Config, docket: &Docket) -> anyhow::Result<()> {
    println!("{}", docket.to_text(config.paper_width));

    if let Some(addr) = &config.printer_addr {
        let printer = NetworkPrinter::from_addr(addr)?;
        print_docket(&printer, docket, config.paper_width)
            .await
            .with_context(|| format!("printing to {}", addr))?;
        tracing::info!(printer = %addr, "Docket printed");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, config, logging
    let config = setup_environment()?;
    let command = parse_args(&config)?;

    tracing::info!(api = %config.api_url, env = %config.environment, "Booking desk starting");

    // 2. Booking service client
    let client = config.client_config().build_http_client()?;

    // 3. Fetch, then render and print or apply a change
    match command {
        Command::Day(date) => {
            let report = DayReport::fetch(&client, date).await?;
            output(&config, &report.prep_sheet()).await?;
        }
        Command::Receipt(id) => {
            let booking = client.fetch_booking(&id).await?;
            output(&config, &ReceiptRenderer::new(config.timezone).render(&booking)).await?;
        }
        Command::Docket(id) => {
            let booking = client.fetch_booking(&id).await?;
            output(&config, &KitchenDocketRenderer.render(&booking)).await?;
        }
        Command::Status { id, status, reason } => {
            let booking = client.fetch_booking(&id).await?;
            let controller = config.status_controller(client)?;
            let updated = controller
                .request_status_change(&booking, status, None, reason.as_deref())
                .await?;
            show_change(&booking, updated);
        }
        Command::Pay {
            id,
            payment_status,
            amount,
        } => {
            let booking = client.fetch_booking(&id).await?;
            let controller = config.status_controller(client)?;
            let updated = controller
                .request_payment_change(&booking, payment_status, amount)
                .await?;
            show_change(&booking, updated);
        }
    }

    Ok(())
}
