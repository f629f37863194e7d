//! 多帧窗口聚合模块
//!
//! 单帧测量受关键点抖动影响较大。取最近 N 帧（最多 20 帧，至少需要 10 帧），
//! 对每个关节逐帧计算屈曲角后取窗口内最大值：ROM 测量应报告达到的峰值屈曲，
//! 瞬时值或平均值都会低估真实活动度。
//!
//! 帧缓冲由调用方持有并追加，本模块只读取尾部窗口，不做任何修改。

use crate::error::RomError;
use crate::finger::{measure_frame, HandAngles};
use crate::landmark::Frame;

/// 分析所需最少帧数
pub const MIN_FRAMES: usize = 10;

/// 分析窗口最大帧数
pub const MAX_WINDOW: usize = 20;

/// 窗口选择策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    min_frames: usize,
    max_frames: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            min_frames: MIN_FRAMES,
            max_frames: MAX_WINDOW,
        }
    }
}

impl WindowPolicy {
    /// `min_frames` 必须 ≥ 1 且不大于 `max_frames`
    pub fn new(min_frames: usize, max_frames: usize) -> Result<Self, RomError> {
        if min_frames == 0 || max_frames < min_frames {
            return Err(RomError::InvalidPolicy {
                min_frames,
                max_frames,
            });
        }
        Ok(Self {
            min_frames,
            max_frames,
        })
    }

    pub fn min_frames(&self) -> usize {
        self.min_frames
    }

    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    /// 选取最近 min(max_frames, 可用帧数) 帧
    pub fn select<'a>(&self, frames: &'a [Frame]) -> Result<&'a [Frame], RomError> {
        if frames.len() < self.min_frames {
            return Err(RomError::InsufficientFrames {
                available: frames.len(),
                required: self.min_frames,
            });
        }
        let start = frames.len() - frames.len().min(self.max_frames);
        Ok(&frames[start..])
    }
}

/// 窗口聚合结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowAggregate {
    pub frames_used: usize,
    pub hand: HandAngles,
}

/// 对窗口内各关节屈曲角取最大值
pub fn aggregate_window(
    frames: &[Frame],
    policy: &WindowPolicy,
) -> Result<WindowAggregate, RomError> {
    let window = policy.select(frames)?;

    // 屈曲角恒 ≥ 0，以全零为初值取最大值即可
    let hand = window
        .iter()
        .map(measure_frame)
        .fold(HandAngles::default(), HandAngles::max);

    Ok(WindowAggregate {
        frames_used: window.len(),
        hand,
    })
}
