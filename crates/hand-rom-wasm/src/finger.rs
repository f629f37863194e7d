//! 手指与关节定义
//!
//! 四指（食指、中指、无名指、小指）各有固定的 4 点链：MCP → PIP → DIP → 指尖。
//! 拇指不参与计算。

use serde::{Deserialize, Serialize};

use crate::angle::flexion_angle;
use crate::landmark::{Frame, WRIST};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// 报告输出顺序
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// 关键点索引链 [MCP, PIP, DIP, TIP]
    pub const fn chain(self) -> [usize; 4] {
        match self {
            Finger::Index => [5, 6, 7, 8],
            Finger::Middle => [9, 10, 11, 12],
            Finger::Ring => [13, 14, 15, 16],
            Finger::Pinky => [17, 18, 19, 20],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    const fn position(self) -> usize {
        match self {
            Finger::Index => 0,
            Finger::Middle => 1,
            Finger::Ring => 2,
            Finger::Pinky => 3,
        }
    }
}

/// 单指三个关节的屈曲角（度）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub mcp: f64,
    pub pip: f64,
    pub dip: f64,
}

impl JointAngles {
    /// 总运动角 TAM = MCP + PIP + DIP
    pub fn tam(&self) -> f64 {
        self.mcp + self.pip + self.dip
    }

    /// 逐关节取最大值
    pub fn max(self, other: JointAngles) -> JointAngles {
        JointAngles {
            mcp: self.mcp.max(other.mcp),
            pip: self.pip.max(other.pip),
            dip: self.dip.max(other.dip),
        }
    }
}

/// 四指关节角，按 [`Finger::ALL`] 顺序存放
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandAngles([JointAngles; 4]);

impl HandAngles {
    pub fn get(&self, finger: Finger) -> JointAngles {
        self.0[finger.position()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Finger, JointAngles)> + '_ {
        Finger::ALL.iter().map(move |&finger| (finger, self.get(finger)))
    }

    /// 逐指、逐关节取最大值
    pub fn max(self, other: HandAngles) -> HandAngles {
        let mut merged = self;
        for (slot, angles) in merged.0.iter_mut().zip(other.0) {
            *slot = slot.max(angles);
        }
        merged
    }
}

pub fn measure_finger(frame: &Frame, finger: Finger) -> JointAngles {
    let [p0, p1, p2, p3] = finger.chain();
    let wrist = frame.landmark(WRIST);

    JointAngles {
        mcp: flexion_angle(wrist, frame.landmark(p0), frame.landmark(p1)),
        pip: flexion_angle(frame.landmark(p0), frame.landmark(p1), frame.landmark(p2)),
        dip: flexion_angle(frame.landmark(p1), frame.landmark(p2), frame.landmark(p3)),
    }
}

pub fn measure_frame(frame: &Frame) -> HandAngles {
    HandAngles(Finger::ALL.map(|finger| measure_finger(frame, finger)))
}
