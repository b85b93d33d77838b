//! `RUST_LOG` handling for the activity log and the `log` facade.

pub use crate::error_classifier::LogLevel;
use std::env;

/// Target name used in `RUST_LOG` directives, e.g. `sentiment_dashboard=debug`.
const CRATE_TARGET: &str = "sentiment_dashboard";

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

/// Picks the level that applies to this crate. A directive naming the crate
/// wins over a bare global level; anything unparseable falls back to info.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut global = None;
    for directive in rust_log.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) if target == CRATE_TARGET => {
                if let Some(level) = parse_level(level) {
                    return level;
                }
            }
            Some(_) => {}
            None => global = global.or_else(|| parse_level(directive)),
        }
    }
    global.unwrap_or(LogLevel::Info)
}

fn parse_level(raw: &str) -> Option<LogLevel> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        _ => None,
    }
}

/// Applies the `RUST_LOG` threshold to the `log` facade.
pub fn init_max_level() {
    log::set_max_level(get_rust_log_level().into());
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_levels() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("WARNING"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
    }

    #[test]
    // A directive for this crate should win over the global level and other crates.
    fn test_parse_crate_directive() {
        assert_eq!(
            parse_rust_log_level("reqwest=trace,sentiment_dashboard=error"),
            LogLevel::Error
        );
        assert_eq!(
            parse_rust_log_level("warn,sentiment_dashboard=debug"),
            LogLevel::Debug
        );
        assert_eq!(parse_rust_log_level("hyper=trace,error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("hyper=trace"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
    }
}
