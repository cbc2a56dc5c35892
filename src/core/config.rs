// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub duplicate_suffix: bool,
    pub max_min_length: i64,
    pub default_min_length: i64,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            duplicate_suffix: false,
            max_min_length: 4096,
            default_min_length: 12,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, starting from the
    /// defaults. Values that fail to parse keep their default and are
    /// returned as warnings, since this runs before the logger exists.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Ignoring invalid WEB_PORT '{}'", val)),
            }
        }

        // Password Generation
        if let Some(val) = lookup("DUPLICATE_SUFFIX") {
            match parse_bool(&val) {
                Some(duplicate) => config.duplicate_suffix = duplicate,
                None => warnings.push(format!("Ignoring invalid DUPLICATE_SUFFIX '{}'", val)),
            }
        }

        if let Some(val) = lookup("MAX_MIN_LENGTH") {
            match val.parse::<i64>() {
                Ok(max) if max > 0 => config.max_min_length = max,
                _ => warnings.push(format!("Ignoring invalid MAX_MIN_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_MIN_LENGTH") {
            match val.parse::<i64>() {
                Ok(length) if length > 0 => config.default_min_length = length,
                _ => warnings.push(format!("Ignoring invalid DEFAULT_MIN_LENGTH '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown LOG_LEVEL '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
