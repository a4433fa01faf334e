//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `ORDERVIEW_BASE_URL`: order server root (default `http://localhost:8080`)
//! - `ORDERVIEW_LOG_FILE`: where the TUI writes its logs (default `orderview.log`)
//! - `ORDERVIEW_STALE_POLICY`: `last-response` or `latest-request`
//! - `ORDERVIEW_SURFACE_ERRORS`: show transport errors in the status bar
//!
//! Empty values are treated as unset.

use std::path::PathBuf;

use crate::dispatch::StalePolicy;

/// Default order server root.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default log file for TUI mode.
const DEFAULT_LOG_FILE: &str = "orderview.log";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub orders: OrdersConfig,
    pub ui: UiConfig,
}

/// Where and how orders are fetched.
#[derive(Debug)]
pub struct OrdersConfig {
    pub base_url: String,
}

/// Terminal UI behaviour.
#[derive(Debug)]
pub struct UiConfig {
    pub log_file: PathBuf,
    pub stale_policy: StalePolicy,
    pub surface_transport_errors: bool,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`OrderViewError::Config`](crate::OrderViewError::Config) if
/// `ORDERVIEW_STALE_POLICY` or `ORDERVIEW_SURFACE_ERRORS` holds a value
/// outside the accepted set.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("ORDERVIEW_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let log_file = non_empty_var("ORDERVIEW_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let stale_policy = match non_empty_var("ORDERVIEW_STALE_POLICY") {
        Some(value) => value.parse::<StalePolicy>()?,
        None => StalePolicy::default(),
    };

    let surface_transport_errors = match non_empty_var("ORDERVIEW_SURFACE_ERRORS") {
        Some(value) => parse_flag("ORDERVIEW_SURFACE_ERRORS", &value)?,
        None => false,
    };

    Ok(AppConfig {
        orders: OrdersConfig { base_url },
        ui: UiConfig {
            log_file,
            stale_policy,
            surface_transport_errors,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_flag(name: &str, value: &str) -> crate::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(crate::OrderViewError::Config(format!(
            "{name} must be true, false, 1 or 0 (got {other:?})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    /// Serializes every test that touches the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Holds [`ENV_LOCK`] for the whole call; nothing else in this crate's
    /// unit tests reads these variables.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: ENV_LOCK is held, no other test thread touches the environment.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    const ALL_VARS: [&str; 4] = [
        "ORDERVIEW_BASE_URL",
        "ORDERVIEW_LOG_FILE",
        "ORDERVIEW_STALE_POLICY",
        "ORDERVIEW_SURFACE_ERRORS",
    ];

    #[test]
    fn defaults_without_env_vars() {
        let vars: Vec<_> = ALL_VARS.iter().map(|k| (*k, None)).collect();
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.orders.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.ui.log_file, PathBuf::from(DEFAULT_LOG_FILE));
            assert_eq!(config.ui.stale_policy, StalePolicy::LastResponseWins);
            assert!(!config.ui.surface_transport_errors);
        });
    }

    #[test]
    fn loads_overrides_from_env() {
        with_env(
            &[
                ("ORDERVIEW_BASE_URL", Some("http://orders.internal:9000")),
                ("ORDERVIEW_LOG_FILE", Some("/tmp/ov.log")),
                ("ORDERVIEW_STALE_POLICY", Some("latest-request")),
                ("ORDERVIEW_SURFACE_ERRORS", Some("1")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.orders.base_url, "http://orders.internal:9000");
                assert_eq!(config.ui.log_file, PathBuf::from("/tmp/ov.log"));
                assert_eq!(config.ui.stale_policy, StalePolicy::LatestRequestWins);
                assert!(config.ui.surface_transport_errors);
            },
        );
    }

    #[test]
    fn rejects_unknown_stale_policy() {
        with_env(&[("ORDERVIEW_STALE_POLICY", Some("first-wins"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("ORDERVIEW_STALE_POLICY"));
        });
    }

    #[test]
    fn rejects_malformed_flag() {
        with_env(
            &[
                ("ORDERVIEW_STALE_POLICY", None),
                ("ORDERVIEW_SURFACE_ERRORS", Some("yes please")),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("ORDERVIEW_SURFACE_ERRORS"));
            },
        );
    }

    #[test]
    fn empty_values_treated_as_absent() {
        let vars: Vec<_> = ALL_VARS.iter().map(|k| (*k, Some(""))).collect();
        with_env(&vars, || {
            let config = fetch_config().unwrap();
            assert_eq!(config.orders.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.ui.stale_policy, StalePolicy::LastResponseWins);
            assert!(!config.ui.surface_transport_errors);
        });
    }
}
