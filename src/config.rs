//! # Configuration
//!
//! Command-line flags with environment fallbacks, parsed once in `main`.
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--bind` | `CITY_INFO_BIND` | `127.0.0.1:54673` |
//! | `--mailbox-capacity` | `CITY_INFO_MAILBOX_CAPACITY` | `32` |
//! | `--log-format` | `CITY_INFO_LOG_FORMAT` | `compact` |
//!
//! Log levels are not configured here; they come from `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Runtime settings for the city info service.
#[derive(Debug, Clone, Parser)]
#[command(name = "city-info", version, about = "Serves cities and their points of interest")]
pub struct Config {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "CITY_INFO_BIND", default_value = "127.0.0.1:54673")]
    pub bind: SocketAddr,

    /// Capacity of the catalog actor's mailbox.
    #[arg(
        long,
        env = "CITY_INFO_MAILBOX_CAPACITY",
        default_value_t = 32,
        value_parser = parse_capacity
    )]
    pub mailbox_capacity: usize,

    /// Log line format.
    #[arg(long, env = "CITY_INFO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single lines with spans inline.
    Compact,
    /// One JSON object per line.
    Json,
}

// tokio's mpsc::channel panics on a zero capacity
fn parse_capacity(raw: &str) -> Result<usize, String> {
    let capacity: usize = raw
        .parse()
        .map_err(|e| format!("`{raw}` is not a valid capacity: {e}"))?;
    if capacity == 0 {
        return Err("mailbox capacity must be greater than zero".to_string());
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["city-info"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:54673".parse().unwrap());
        assert_eq!(config.mailbox_capacity, 32);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "city-info",
            "--bind",
            "0.0.0.0:8080",
            "--mailbox-capacity",
            "4",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.mailbox_capacity, 4);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = Config::try_parse_from(["city-info", "--mailbox-capacity", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(Config::try_parse_from(["city-info", "--log-format", "xml"]).is_err());
    }
}
