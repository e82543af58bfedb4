//! `log` backend that writes to the browser console.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug)]
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("console logger already installed");
    }
    log::set_max_level(level);
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), record.args());
        write(record.level(), &line);
    }

    fn flush(&self) {}
}

pub(crate) fn format_line(
    level: Level,
    target: &str,
    args: &fmt::Arguments<'_>,
) -> String {
    format!("[{level}] {target}: {args}")
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug => console::debug_1(&line),
        Level::Trace => console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_level_and_target() {
        let line = format_line(
            Level::Warn,
            "folio_config::loader",
            &format_args!("period {} ms", 400),
        );
        assert_eq!(line, "[WARN] folio_config::loader: period 400 ms");
    }
}
