/// 请求体上限：2 MiB
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// 单次请求允许提交的最大帧数
pub const DEFAULT_MAX_FRAMES_PER_REQUEST: usize = 600;

/// 默认允许的前端来源（采集页开发服务器）
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// 日志文件名前缀
pub const LOG_FILE_PREFIX: &str = "hand-rom";
