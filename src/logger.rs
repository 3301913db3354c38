//! Browser console sink for the `log` facade

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

use crate::core::error::Result;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// `[HH:MM:SS.mmm] LEVEL target: message`
pub fn format_record(level: Level, target: &str, args: &std::fmt::Arguments<'_>) -> String {
    format!(
        "[{}] {} {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        level,
        target,
        args
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from(format_record(record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
