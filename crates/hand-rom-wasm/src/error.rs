use thiserror::Error;

/// 关节活动度分析错误
///
/// 均为"软失败"：调用方记录诊断信息后直接返回，不更新输出。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomError {
    #[error("insufficient frames: {available} available, at least {required} required")]
    InsufficientFrames { available: usize, required: usize },
    #[error("malformed frame data: expected a multiple of {expected} values, got {actual}")]
    MalformedFrame { expected: usize, actual: usize },
    #[error("invalid window policy: min_frames={min_frames}, max_frames={max_frames}")]
    InvalidPolicy { min_frames: usize, max_frames: usize },
}
