use std::sync::Arc;

use booking_client::{BookingApi, ClientConfig, ClientResult, Notifier, WebhookNotifier};
use chrono_tz::Tz;

use crate::bookings::StatusController;

/// Booking desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BOOKING_API_URL | http://localhost:5000 | booking service base URL |
/// | BOOKING_API_TOKEN | (none) | bearer token for the booking service |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout for API and webhook calls |
/// | LOG_LEVEL | info | tracing filter |
/// | LOG_JSON | false | JSON console/file logs |
/// | LOG_DIR | (none) | enables daily-rotated file logs |
/// | PAPER_WIDTH | 42 | docket width in characters |
/// | PRINTER_ADDR | (none) | `host:port` of the kitchen printer |
/// | TIMEZONE | Europe/London | timezone for printed timestamps |
/// | NOTIFY_WEBHOOK_URL | (none) | email/SMS notification webhook |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// BOOKING_API_URL=https://bookings.example.com PRINTER_ADDR=10.0.0.20:9100 booking-desk 2024-06-14
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Docket width in characters (32 for 58mm paper, 42/48 for 80mm)
    pub paper_width: usize,
    pub printer_addr: Option<String>,
    pub timezone: Tz,
    pub notify_webhook_url: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` is this over `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty("BOOKING_API_URL")
                .unwrap_or_else(|| "http://localhost:5000".into()),
            api_token: non_empty("BOOKING_API_TOKEN"),
            request_timeout_secs: non_empty("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
            paper_width: non_empty("PAPER_WIDTH")
                .and_then(|v| v.parse().ok())
                .filter(|w| *w >= 24)
                .unwrap_or(42),
            printer_addr: non_empty("PRINTER_ADDR"),
            timezone: non_empty("TIMEZONE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::Europe::London),
            notify_webhook_url: non_empty("NOTIFY_WEBHOOK_URL"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Client settings for the booking service
    pub fn client_config(&self) -> ClientConfig {
        let config =
            ClientConfig::new(self.api_url.clone()).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    /// Webhook notifier when `NOTIFY_WEBHOOK_URL` is set
    pub fn notifier(&self) -> ClientResult<Option<Arc<dyn Notifier>>> {
        match &self.notify_webhook_url {
            Some(url) => {
                let notifier: Arc<dyn Notifier> =
                    Arc::new(WebhookNotifier::new(url.clone(), self.request_timeout_secs)?);
                Ok(Some(notifier))
            }
            None => Ok(None),
        }
    }

    /// Status controller over `api`, notifying customers when a webhook is set
    pub fn status_controller<A: BookingApi>(&self, api: A) -> ClientResult<StatusController<A>> {
        let controller = StatusController::new(api);
        Ok(match self.notifier()? {
            Some(notifier) => controller.with_notifier(notifier),
            None => controller,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.paper_width, 42);
        assert_eq!(config.timezone, chrono_tz::Europe::London);
        assert!(config.printer_addr.is_none());
        assert!(!config.log_json);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BOOKING_API_URL", "https://bookings.example.com"),
            ("BOOKING_API_TOKEN", "secret"),
            ("PAPER_WIDTH", "32"),
            ("TIMEZONE", "Australia/Sydney"),
            ("LOG_JSON", "true"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.api_url, "https://bookings.example.com");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.paper_width, 32);
        assert_eq!(config.timezone, chrono_tz::Australia::Sydney);
        assert!(config.log_json);
        assert!(config.is_production());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            ("PAPER_WIDTH", "8"),
            ("REQUEST_TIMEOUT_SECS", "soon"),
            ("TIMEZONE", "Mars/Olympus"),
            ("PRINTER_ADDR", "   "),
        ]);
        assert_eq!(config.paper_width, 42);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.timezone, chrono_tz::Europe::London);
        assert!(config.printer_addr.is_none());
    }

    #[test]
    fn test_client_config() {
        let config = config_from(&[("BOOKING_API_TOKEN", "t"), ("REQUEST_TIMEOUT_SECS", "5")]);
        let client = config.client_config();
        assert_eq!(client.token.as_deref(), Some("t"));
        assert_eq!(client.timeout, 5);
    }

    #[test]
    fn test_notifier_only_when_configured() {
        assert!(config_from(&[]).notifier().unwrap().is_none());

        let config = config_from(&[("NOTIFY_WEBHOOK_URL", "http://127.0.0.1:9/notify")]);
        assert!(config.notifier().unwrap().is_some());
    }

    #[test]
    fn test_status_controller_picks_up_webhook() {
        let plain = config_from(&[]);
        let api = plain.client_config().build_http_client().unwrap();
        assert!(!plain.status_controller(api).unwrap().notifies());

        let hooked = config_from(&[("NOTIFY_WEBHOOK_URL", "http://127.0.0.1:9/notify")]);
        let api = hooked.client_config().build_http_client().unwrap();
        assert!(hooked.status_controller(api).unwrap().notifies());
    }
}
