use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use wasm_bindgen::JsValue;

/// Console-backed logger with a minimum level filter
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_log_entry(entry: &LogEntry) -> String {
        let date = js_sys::Date::new(&JsValue::from_f64(entry.timestamp as f64));
        format!(
            "[{:02}:{:02}:{:02}.{:03}] {} {} | {}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds(),
            entry.level,
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = JsValue::from_str(&Self::format_log_entry(&entry));
        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            _ => web_sys::console::log_1(&formatted),
        }
    }
}

/// Time provider backed by the browser clock
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds()
        )
    }

    fn clock_label(&self) -> String {
        let date = js_sys::Date::new_0();
        let hours = date.get_hours();
        let meridiem = if hours < 12 { "AM" } else { "PM" };
        let clock_hours = match hours % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", clock_hours, date.get_minutes(), meridiem)
    }
}
