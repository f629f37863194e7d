//! 手指关节活动度 (ROM) 计算库
//!
//! 本库基于 MediaPipe 手部 21 关键点计算四指的关节屈曲角，编译为 WebAssembly
//! 在浏览器端运行，同时作为普通 Rust 库供服务端复用。
//!
//! ## 模块
//! - `landmark`: 关键点与帧数据模型
//! - `angle`: 顶点角与屈曲角换算
//! - `finger`: 四指关节链与单帧测量
//! - `window`: 多帧窗口最大值聚合
//! - `report`: 按模式生成结构化报告 (关节角 / TAM)
//! - `present`: 报告渲染 (HTML / 纯文本)
//! - `bindings`: wasm-bindgen 入口

pub mod angle;
pub mod bindings;
pub mod error;
pub mod finger;
pub mod landmark;
pub mod present;
pub mod report;
pub mod window;

// 重新导出核心类型，方便外部使用
pub use angle::{flexion_angle, raw_angle};
pub use bindings::RomAnalyzer;
pub use error::RomError;
pub use finger::{measure_finger, measure_frame, Finger, HandAngles, JointAngles};
pub use landmark::{frames_from_flat, Frame, Landmark};
pub use present::{HtmlPresenter, Presenter, TextPresenter};
pub use report::{analyze, build_report, FingerMeasure, FingerReport, Mode, RomReport};
pub use window::{aggregate_window, WindowAggregate, WindowPolicy};
