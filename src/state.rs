use std::sync::Arc;
use std::time::Instant;

use hand_rom_wasm::WindowPolicy;

use crate::config::Config;

/// 只读共享状态：分析本身无状态，帧缓冲由调用方随请求提交
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    window_policy: WindowPolicy,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            window_policy: config.rom.window_policy(),
            config: Arc::new(config.clone()),
            started_at: Instant::now(),
        }
    }

    pub fn window_policy(&self) -> &WindowPolicy {
        &self.window_policy
    }

    pub fn max_frames_per_request(&self) -> usize {
        self.config.rom.max_frames_per_request
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
