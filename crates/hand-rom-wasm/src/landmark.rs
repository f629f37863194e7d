//! 手部关键点数据模型
//!
//! 采用 MediaPipe HandLandmarker 的 21 点手部模型，按位置索引：
//! 0 为手腕，5-8 食指，9-12 中指，13-16 无名指，17-20 小指。

use serde::{Deserialize, Serialize};

use crate::error::RomError;

/// 每帧关键点数量
pub const LANDMARK_COUNT: usize = 21;

/// 扁平数组中每帧的浮点数个数 (21 × xyz)
pub const FLAT_FRAME_LEN: usize = LANDMARK_COUNT * 3;

/// 手腕关键点索引
pub const WRIST: usize = 0;

/// 三维关键点，同时用作差向量
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 从 `other` 指向 `self` 的向量
    pub fn sub(&self, other: &Landmark) -> Landmark {
        Landmark::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn dot(&self, other: &Landmark) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// 分量绝对值的最大值（无穷范数）
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// 单个采样时刻的 21 个关键点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame(pub [Landmark; LANDMARK_COUNT]);

impl Default for Frame {
    fn default() -> Self {
        Self([Landmark::default(); LANDMARK_COUNT])
    }
}

impl Frame {
    /// 从 63 个浮点数构造单帧：x0, y0, z0, x1, y1, z1, ...
    pub fn from_flat(values: &[f64]) -> Result<Self, RomError> {
        if values.len() != FLAT_FRAME_LEN {
            return Err(RomError::MalformedFrame {
                expected: FLAT_FRAME_LEN,
                actual: values.len(),
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (slot, xyz) in landmarks.iter_mut().zip(values.chunks_exact(3)) {
            *slot = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Ok(Self(landmarks))
    }

    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.0[index]
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(Landmark::is_finite)
    }
}

/// 将 k × 63 个浮点数拆分为 k 帧，按时间顺序排列
pub fn frames_from_flat(values: &[f64]) -> Result<Vec<Frame>, RomError> {
    if values.len() % FLAT_FRAME_LEN != 0 {
        return Err(RomError::MalformedFrame {
            expected: FLAT_FRAME_LEN,
            actual: values.len(),
        });
    }

    values.chunks_exact(FLAT_FRAME_LEN).map(Frame::from_flat).collect()
}
