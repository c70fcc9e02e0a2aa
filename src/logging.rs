use std::sync::OnceLock;

use derive_more::Display;
use serde::Deserialize;

/// Log levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug = 0,
    #[display(fmt = " INFO")]
    Info = 1,
    #[display(fmt = " WARN")]
    Warn = 2,
    #[display(fmt = "ERROR")]
    Error = 3,
}

/// Which part of the page a log line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "nav")]
    Navigation,
    #[display(fmt = "reveal")]
    Reveal,
    #[display(fmt = "hero")]
    HeroChart,
    #[display(fmt = "stats")]
    StatsCharts,
    #[display(fmt = "calc:{}", _0)]
    Calculator(&'static str),
    #[display(fmt = "playbook")]
    Playbook,
    #[display(fmt = "config")]
    Config,
    #[display(fmt = "app")]
    App,
}

static MIN_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Set the minimum level once at startup. Later calls are ignored.
pub fn init(level: LogLevel) {
    let _ = MIN_LEVEL.set(level);
}

pub fn min_level() -> LogLevel {
    MIN_LEVEL.get().copied().unwrap_or(LogLevel::Info)
}

pub fn format_entry(level: LogLevel, component: LogComponent, message: &str) -> String {
    format!("[{}] {}: {}", level, component, message)
}

pub fn log(level: LogLevel, component: LogComponent, message: &str) {
    if level < min_level() {
        return;
    }
    let line = format_entry(level, component, message);
    match level {
        LogLevel::Debug => gloo::console::debug!(line),
        LogLevel::Info => gloo::console::log!(line),
        LogLevel::Warn => gloo::console::warn!(line),
        LogLevel::Error => gloo::console::error!(line),
    }
}

pub fn debug(component: LogComponent, message: &str) {
    log(LogLevel::Debug, component, message);
}

pub fn info(component: LogComponent, message: &str) {
    log(LogLevel::Info, component, message);
}

pub fn warn(component: LogComponent, message: &str) {
    log(LogLevel::Warn, component, message);
}

pub fn error(component: LogComponent, message: &str) {
    log(LogLevel::Error, component, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_carries_level_and_component() {
        let line = format_entry(LogLevel::Warn, LogComponent::Calculator("roi"), "rejected input");
        assert_eq!(line, "[ WARN] calc:roi: rejected input");
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
