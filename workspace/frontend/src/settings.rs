use log::Level;
use web_sys::window;

use common::HISTORY_DAYS;

const KEY_API_HOST: &str = "volstack_api_host";
const KEY_API_PORT: &str = "volstack_api_port";
const KEY_API_PATH: &str = "volstack_api_path";
const KEY_API_USE_HTTPS: &str = "volstack_api_use_https";
const KEY_LOG_LEVEL: &str = "volstack_log_level";
const KEY_HISTORY_DAYS: &str = "volstack_history_days";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Forecast service host (e.g., "127.0.0.1")
    pub api_host: String,

    /// Forecast service port
    pub api_port: u16,

    /// Path prefix in front of every endpoint, empty by default
    pub api_path: String,

    pub api_use_https: bool,

    pub log_level: Level,

    pub debug_mode: bool,

    /// How many days of history the history tab asks for
    pub history_days: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            history_days: HISTORY_DAYS,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_host)) = storage.get_item(KEY_API_HOST) {
                settings.api_host = api_host;
            }

            if let Ok(Some(api_port)) = storage.get_item(KEY_API_PORT) {
                if let Ok(port) = api_port.parse::<u16>() {
                    settings.api_port = port;
                }
            }

            if let Ok(Some(api_path)) = storage.get_item(KEY_API_PATH) {
                settings.api_path = api_path;
            }

            if let Ok(Some(use_https)) = storage.get_item(KEY_API_USE_HTTPS) {
                settings.api_use_https = use_https.eq_ignore_ascii_case("true");
            }

            if let Ok(Some(level)) = storage.get_item(KEY_LOG_LEVEL) {
                settings.log_level = level.parse::<Level>().unwrap_or(settings.log_level);
            }

            if let Ok(Some(days)) = storage.get_item(KEY_HISTORY_DAYS) {
                if let Ok(days) = days.parse::<u32>() {
                    if days > 0 {
                        settings.history_days = days;
                    }
                }
            }
        }

        settings
    }

    /// Base service URL (protocol + host + port + path prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!(
            "{}://{}:{}{}",
            protocol,
            self.api_host,
            self.api_port,
            self.api_path.trim_end_matches('/')
        )
    }

    /// Full URL for an endpoint such as `/predict`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
