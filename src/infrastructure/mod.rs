pub mod http;
pub mod rendering;

/// Browser-backed implementations of the domain logging abstractions
pub mod services {
    use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

    /// Console logger implementation for the WASM environment
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

        fn format_entry(&self, entry: &LogEntry) -> String {
            use crate::domain::logging::get_time_provider;
            let timestamp = get_time_provider().format_timestamp(entry.timestamp);
            format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message)
        }
    }

    impl Logger for ConsoleLogger {
        fn log(&self, entry: LogEntry) {
            if entry.level < self.min_level {
                return;
            }

            let formatted = self.format_entry(&entry);
            match entry.level {
                LogLevel::Debug => gloo::console::debug!(formatted),
                LogLevel::Info => gloo::console::info!(formatted),
                LogLevel::Warn => gloo::console::warn!(formatted),
                LogLevel::Error => gloo::console::error!(formatted),
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
            let date = js_sys::Date::new(&(timestamp as f64).into());
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                date.get_hours(),
                date.get_minutes(),
                date.get_seconds(),
                date.get_milliseconds()
            )
        }
    }
}
