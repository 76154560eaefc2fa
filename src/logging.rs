// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: listings and favorite request failures
//! - `warn`: image fallbacks, unreadable config or state files
//! - `info`: startup, screen changes
//! - `debug`: gallery navigation and image load routing
//!
//! The filter is read from `SOUQ_GALLERY_LOG` (same syntax as `RUST_LOG`).
//! When unset, `--log-level` decides the level for this crate while other
//! crates stay at `warn`.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a full filter directive.
pub const ENV_LOG_FILTER: &str = "SOUQ_GALLERY_LOG";

/// Parses a `--log-level` value, falling back to `info`.
#[must_use]
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(level: Level) {
    let filter = build_env_filter(level);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| default_filter(level))
}

fn default_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::new(format!("warn,souq_gallery={level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_known_names() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), Level::WARN);
    }

    #[test]
    fn parse_level_falls_back_to_info() {
        assert_eq!(parse_level(None), Level::INFO);
        assert_eq!(parse_level(Some("chatty")), Level::INFO);
    }

    #[test]
    fn default_filter_scopes_level_to_crate() {
        let filter = default_filter(Level::DEBUG);
        let rendered = filter.to_string();
        assert!(rendered.contains("souq_gallery=debug"));
        assert!(rendered.contains("warn"));
    }
}
