use std::net::{IpAddr, Ipv4Addr};

use axum::Router;

use hand_rom::config::{Config, RomEnvConfig};
use hand_rom::routes::build_router;
use hand_rom::state::AppState;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub config: Config,
}

// 直接构造 Config，避免 set_var 造成多线程测试环境变量竞态
pub fn test_config(rom: RomEnvConfig) -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 3000,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        rom,
    }
}

pub async fn spawn_test_app_with(rom: RomEnvConfig) -> TestApp {
    let config = test_config(rom);
    let state = AppState::new(&config);
    let app = build_router(state.clone());

    TestApp { app, state, config }
}

pub async fn spawn_test_app() -> TestApp {
    spawn_test_app_with(RomEnvConfig::default()).await
}
