//! Application configuration from environment variables
//!
//! `.env` is loaded by `main` before [`Config::from_env`] runs.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Longest accepted session idle timeout, one day
const MAX_SESSION_IDLE_MINUTES: u64 = 24 * 60;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Messenger host for deep links, e.g. `wa.me`
    pub messaging_host: String,
    /// Business phone number in international format, digits only
    pub whatsapp_phone: String,
    pub instagram_url: String,
    pub static_dir: PathBuf,
    /// Sessions idle longer than this are dropped
    pub session_idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            messaging_host: "wa.me".to_string(),
            whatsapp_phone: "77474507959".to_string(),
            instagram_url: "https://www.instagram.com/sparkle.clean.kz/".to_string(),
            static_dir: PathBuf::from("static"),
            session_idle: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    /// Read configuration, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: "BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("MESSAGING_HOST") {
            config.messaging_host = value;
        }

        if let Some(value) = lookup("WHATSAPP_PHONE") {
            let digits: String = value.chars().filter(|c| !matches!(c, ' ' | '-' | '+')).collect();
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::Invalid {
                    var: "WHATSAPP_PHONE",
                    value,
                    reason: "expected a phone number in international format".to_string(),
                });
            }
            config.whatsapp_phone = digits;
        }

        if let Some(value) = lookup("INSTAGRAM_URL") {
            config.instagram_url = value;
        }

        if let Some(value) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }

        if let Some(value) = lookup("SESSION_IDLE_MINUTES") {
            let minutes: u64 = value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "SESSION_IDLE_MINUTES",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            let seconds = minutes
                .checked_mul(60)
                .filter(|_| (1..=MAX_SESSION_IDLE_MINUTES).contains(&minutes))
                .ok_or_else(|| ConfigError::Invalid {
                    var: "SESSION_IDLE_MINUTES",
                    value: value.clone(),
                    reason: format!("expected 1 to {} minutes", MAX_SESSION_IDLE_MINUTES),
                })?;
            config.session_idle = Duration::from_secs(seconds);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppState;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.messaging_host, "wa.me");
        assert_eq!(config.whatsapp_phone, "77474507959");
        assert_eq!(config.session_idle, Duration::from_secs(1800));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("WHATSAPP_PHONE", "+7 700 123-45-67"),
            ("SESSION_IDLE_MINUTES", "5"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.whatsapp_phone, "77001234567");
        assert_eq!(config.session_idle, Duration::from_secs(300));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).is_err());
        assert!(Config::from_lookup(lookup(&[("WHATSAPP_PHONE", "call us")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SESSION_IDLE_MINUTES", "soon")])).is_err());
    }

    #[test]
    fn test_session_idle_bounds() {
        for minutes in ["0", "1441", "600000000", "307445734561825861"] {
            let err = Config::from_lookup(lookup(&[("SESSION_IDLE_MINUTES", minutes)])).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { var: "SESSION_IDLE_MINUTES", .. }),
                "{} should be rejected",
                minutes
            );
        }

        let config = Config::from_lookup(lookup(&[("SESSION_IDLE_MINUTES", "1440")])).unwrap();
        assert_eq!(config.session_idle, Duration::from_secs(86_400));
        let _ = AppState::new(config);
    }
}
