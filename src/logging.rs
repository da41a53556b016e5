// src/logging.rs
//! `log` クレートのマクロ (info! とか warn!) をブラウザのコンソールに流すロガー。

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::console_log;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let prefix = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        console_log(&format!("[{}] {}: {}", prefix, record.target(), record.args()));
    }

    fn flush(&self) {}
}

/// Installs the console logger. A second call keeps the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
