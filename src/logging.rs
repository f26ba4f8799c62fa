//! Stderr logger for the `log` facade
//!
//! Board output goes to stdout, so log records are kept on stderr.

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error` .. `trace`, `off`)
pub const LOG_ENV: &str = "GORDLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the level: `--debug` wins, then `GORDLE_LOG`, then `warn`
#[must_use]
pub fn level_from(debug: bool, env_value: Option<&str>) -> LevelFilter {
    if debug {
        return LevelFilter::Debug;
    }
    env_value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger; later calls keep the first logger
pub fn init_logging(debug: bool) {
    let env_value = env::var(LOG_ENV).ok();
    let level = level_from(debug, env_value.as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
