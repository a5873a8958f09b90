#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Writes records to stderr so stdout carries only the game transcript.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "FLEETGRID_LOG";

/// Install the stderr logger with the level from `FLEETGRID_LOG`.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
