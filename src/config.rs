use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use hand_rom_wasm::window::{MAX_WINDOW, MIN_FRAMES};
use hand_rom_wasm::WindowPolicy;

use crate::constants::{DEFAULT_CORS_ORIGIN, DEFAULT_MAX_FRAMES_PER_REQUEST};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub cors_origin: String,
    pub rom: RomEnvConfig,
}

#[derive(Debug, Clone)]
pub struct RomEnvConfig {
    pub min_frames: usize,
    pub window_size: usize,
    pub max_frames_per_request: usize,
}

impl Default for RomEnvConfig {
    fn default() -> Self {
        Self {
            min_frames: MIN_FRAMES,
            window_size: MAX_WINDOW,
            max_frames_per_request: DEFAULT_MAX_FRAMES_PER_REQUEST,
        }
    }
}

impl RomEnvConfig {
    /// Invalid bounds fall back to the default 10/20 policy.
    pub fn window_policy(&self) -> WindowPolicy {
        match WindowPolicy::new(self.min_frames, self.window_size) {
            Ok(policy) => policy,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid ROM window config, using default policy");
                WindowPolicy::default()
            }
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_or_parse("HOST", IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            port: env_or_parse("PORT", 3000_u16),
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            rom: RomEnvConfig {
                min_frames: env_or_parse("ROM_MIN_FRAMES", MIN_FRAMES),
                window_size: env_or_parse("ROM_WINDOW_SIZE", MAX_WINDOW),
                max_frames_per_request: env_or_parse(
                    "ROM_MAX_FRAMES_PER_REQUEST",
                    DEFAULT_MAX_FRAMES_PER_REQUEST,
                ),
            },
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn managed_keys() -> &'static [&'static str] {
        &[
            "HOST",
            "PORT",
            "RUST_LOG",
            "ENABLE_FILE_LOGS",
            "ROM_MIN_FRAMES",
            "ROM_WINDOW_SIZE",
            "ROM_MAX_FRAMES_PER_REQUEST",
        ]
    }

    fn clear_keys(keys: &[&str]) {
        for key in keys {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_defaults_when_missing() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        let cfg = Config::from_env();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.enable_file_logs);
        assert_eq!(cfg.rom.min_frames, 10);
        assert_eq!(cfg.rom.window_size, 20);
        assert_eq!(cfg.rom.max_frames_per_request, 600);
        assert_eq!(cfg.rom.window_policy(), WindowPolicy::default());
    }

    #[test]
    fn parses_numeric_values() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("PORT", "4000");
        env::set_var("ROM_MIN_FRAMES", "5");
        env::set_var("ROM_WINDOW_SIZE", " 8 ");
        env::set_var("ENABLE_FILE_LOGS", "yes");

        let cfg = Config::from_env();
        assert_eq!(cfg.port, 4000);
        assert!(cfg.enable_file_logs);
        let policy = cfg.rom.window_policy();
        assert_eq!(policy.min_frames(), 5);
        assert_eq!(policy.max_frames(), 8);
        clear_keys(managed_keys());
    }

    #[test]
    fn invalid_values_fall_back() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("PORT", "bad");
        env::set_var("ROM_MAX_FRAMES_PER_REQUEST", "-1");

        let cfg = Config::from_env();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.rom.max_frames_per_request, 600);
        clear_keys(managed_keys());
    }

    #[test]
    fn inverted_window_uses_default_policy() {
        let rom = RomEnvConfig {
            min_frames: 30,
            window_size: 20,
            ..RomEnvConfig::default()
        };
        assert_eq!(rom.window_policy(), WindowPolicy::default());
    }
}
