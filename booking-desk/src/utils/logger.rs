//! Logging Infrastructure
//!
//! Structured logging for development and production.
//! Features:
//! - Console output, pretty or JSON
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent audit logs (never deleted), fed by [`audit_log!`](crate::audit_log)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Application logs older than this are removed
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

/// Target that routes an event to the audit stream
pub const AUDIT_TARGET: &str = "audit";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Delete `app.YYYY-MM-DD.log` files older than the retention window
///
/// Audit logs live in their own directory and are never touched.
/// Returns the number of files removed.
pub fn cleanup_old_logs(log_dir: &Path, today: NaiveDate) -> anyhow::Result<usize> {
    let cutoff = today - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date_part) = name
            .strip_prefix("app.")
            .and_then(|d| d.strip_suffix(".log"))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

fn daily_appender(dir: PathBuf, prefix: &str) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(&dir)?;
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)?)
}

fn file_layer(appender: RollingFileAppender, json_format: bool, audit: bool) -> BoxedLayer {
    let keep = move |meta: &tracing::Metadata<'_>| (meta.target() == AUDIT_TARGET) == audit;
    let base = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(appender));

    if json_format {
        base.json()
            .with_current_span(true)
            .with_filter(tracing_subscriber::filter::filter_fn(keep))
            .boxed()
    } else {
        base.with_filter(tracing_subscriber::filter::filter_fn(keep))
            .boxed()
    }
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON output (production) or pretty output (development)
/// * `log_dir` - Optional directory for file logging; gets `app/` and `audit/`
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let console_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);
    if json_format {
        layers.push(
            console
                .json()
                .with_current_span(true)
                .with_filter(console_filter())
                .boxed(),
        );
    } else {
        layers.push(console.with_filter(console_filter()).boxed());
    }

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app = daily_appender(log_dir.join("app"), "app")?;
        let audit = daily_appender(log_dir.join("audit"), "audit")?;

        layers.push(
            file_layer(app, json_format, false)
                .with_filter(EnvFilter::new(level))
                .boxed(),
        );
        layers.push(file_layer(audit, json_format, true));

        // One-shot tools have no runtime when logging starts
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(periodic_cleanup(log_dir.to_path_buf()));
        }
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Runs every hour to clean old application logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        let today = chrono::Local::now().date_naive();
        if let Err(e) = cleanup_old_logs(&log_dir, today) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
        sleep(Duration::from_secs(3600)).await;
    }
}

/// Audit log helper - records booking mutations
///
/// Audit records go to `audit/audit.YYYY-MM-DD.log` and are never deleted.
///
/// # Examples
/// ```ignore
/// audit_log!("desk", "status_change", "booking:BK-0042");
/// audit_log!("desk", "payment_update", "booking:BK-0042", "deposit 90.00");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($actor:expr, $action:expr, $resource:expr) => {
        ::tracing::info!(
            target: "audit",
            actor = $actor,
            action = $action,
            resource = $resource,
            "AUDIT"
        );
    };
    ($actor:expr, $action:expr, $resource:expr, $details:expr) => {
        ::tracing::info!(
            target: "audit",
            actor = $actor,
            action = $action,
            resource = $resource,
            details = $details,
            "AUDIT"
        );
    };
}
