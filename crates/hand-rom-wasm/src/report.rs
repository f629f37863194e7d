//! 按模式生成结构化报告
//!
//! - `EXT_OK`（可伸展）：分别报告 MCP / PIP / DIP 屈曲角
//! - 其他（不可伸展）：只报告总运动角 TAM。伸展角不可靠时单关节数值没有解释意义，
//!   但三者之和仍然有效。

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::error::RomError;
use crate::finger::Finger;
use crate::landmark::Frame;
use crate::window::{aggregate_window, WindowAggregate, WindowPolicy};

/// 可伸展模式的字面量
pub const EXT_OK: &str = "EXT_OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// 伸展可能：输出各关节屈曲角
    #[serde(rename = "EXT_OK")]
    ExtensionOk,
    /// 伸展不能：只输出 TAM
    #[serde(rename = "TAM")]
    TotalActiveMotion,
}

impl Mode {
    /// 仅 `"EXT_OK"`（区分大小写）进入关节模式，其余任意字符串均为 TAM 模式
    pub fn parse(raw: &str) -> Self {
        if raw == EXT_OK {
            Mode::ExtensionOk
        } else {
            Mode::TotalActiveMotion
        }
    }
}

impl From<&str> for Mode {
    fn from(raw: &str) -> Self {
        Mode::parse(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FingerMeasure {
    Joints { mcp: f64, pip: f64, dip: f64 },
    Tam { tam: f64 },
}

/// 单指结果，序列化为 `{finger, mcp, pip, dip}` 或 `{finger, tam}`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerReport {
    pub finger: Finger,
    pub measure: FingerMeasure,
}

// 手写为 struct 而非 `#[serde(flatten)]`：flatten 走 serialize_map，
// serde-wasm-bindgen 会把它变成 JS Map 而不是普通对象。
impl Serialize for FingerReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.measure {
            FingerMeasure::Joints { mcp, pip, dip } => {
                let mut state = serializer.serialize_struct("FingerReport", 4)?;
                state.serialize_field("finger", &self.finger)?;
                state.serialize_field("mcp", &mcp)?;
                state.serialize_field("pip", &pip)?;
                state.serialize_field("dip", &dip)?;
                state.end()
            }
            FingerMeasure::Tam { tam } => {
                let mut state = serializer.serialize_struct("FingerReport", 2)?;
                state.serialize_field("finger", &self.finger)?;
                state.serialize_field("tam", &tam)?;
                state.end()
            }
        }
    }
}

/// 一次分析的完整结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RomReport {
    pub mode: Mode,
    pub frames_used: usize,
    pub fingers: Vec<FingerReport>,
}

pub fn build_report(aggregate: &WindowAggregate, mode: Mode) -> RomReport {
    let fingers = aggregate
        .hand
        .iter()
        .map(|(finger, angles)| {
            let measure = match mode {
                Mode::ExtensionOk => FingerMeasure::Joints {
                    mcp: angles.mcp,
                    pip: angles.pip,
                    dip: angles.dip,
                },
                Mode::TotalActiveMotion => FingerMeasure::Tam { tam: angles.tam() },
            };
            FingerReport { finger, measure }
        })
        .collect();

    RomReport {
        mode,
        frames_used: aggregate.frames_used,
        fingers,
    }
}

/// 窗口聚合 + 报告生成
pub fn analyze(frames: &[Frame], mode: Mode, policy: &WindowPolicy) -> Result<RomReport, RomError> {
    let aggregate = aggregate_window(frames, policy)?;
    Ok(build_report(&aggregate, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    fn straight_frame() -> Frame {
        let mut frame = Frame::default();
        for finger in Finger::ALL {
            for (k, idx) in finger.chain().into_iter().enumerate() {
                frame.0[idx] = Landmark::new(k as f64 + 1.0, 0.0, 0.0);
            }
        }
        frame
    }

    /// 中指 MCP 与 PIP 各弯曲 90°
    fn middle_bent_frame() -> Frame {
        let mut frame = straight_frame();
        frame.0[9] = Landmark::new(1.0, 0.0, 0.0);
        frame.0[10] = Landmark::new(1.0, 1.0, 0.0);
        frame.0[11] = Landmark::new(2.0, 1.0, 0.0);
        frame.0[12] = Landmark::new(3.0, 1.0, 0.0);
        frame
    }

    #[test]
    fn mode_parsing_is_exact() {
        assert_eq!(Mode::parse("EXT_OK"), Mode::ExtensionOk);
        assert_eq!(Mode::parse("ext_ok"), Mode::TotalActiveMotion);
        assert_eq!(Mode::parse(""), Mode::TotalActiveMotion);
        assert_eq!(Mode::from("EXT_NG"), Mode::TotalActiveMotion);
    }

    #[test]
    fn ext_ok_reports_three_joints_per_finger() {
        let frames = vec![middle_bent_frame(); 10];
        let report = analyze(&frames, Mode::ExtensionOk, &WindowPolicy::default()).unwrap();

        assert_eq!(report.fingers.len(), 4);
        assert!(report
            .fingers
            .iter()
            .all(|f| matches!(f.measure, FingerMeasure::Joints { .. })));

        match report.fingers[1].measure {
            FingerMeasure::Joints { mcp, pip, dip } => {
                assert!((mcp - 90.0).abs() < 1e-6);
                assert!((pip - 90.0).abs() < 1e-6);
                assert!(dip.abs() < 1e-6);
            }
            FingerMeasure::Tam { .. } => panic!("expected joint angles"),
        }
    }

    #[test]
    fn tam_mode_sums_joint_maxima() {
        let mut frames = vec![straight_frame(); 9];
        frames.push(middle_bent_frame());
        let report = analyze(&frames, Mode::TotalActiveMotion, &WindowPolicy::default()).unwrap();

        assert_eq!(report.frames_used, 10);
        assert_eq!(report.fingers[1].finger, Finger::Middle);
        match report.fingers[1].measure {
            FingerMeasure::Tam { tam } => assert!((tam - 180.0).abs() < 1e-6),
            FingerMeasure::Joints { .. } => panic!("expected TAM"),
        }
        match report.fingers[0].measure {
            FingerMeasure::Tam { tam } => assert!(tam.abs() < 1e-6),
            FingerMeasure::Joints { .. } => panic!("expected TAM"),
        }
    }

    #[test]
    fn report_serializes_flat_finger_entries() {
        let frames = vec![straight_frame(); 12];
        let report = analyze(&frames, Mode::TotalActiveMotion, &WindowPolicy::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "TAM");
        assert_eq!(json["framesUsed"], 12);
        assert_eq!(json["fingers"][3]["finger"], "pinky");
        assert!(json["fingers"][3]["tam"].is_number());
        assert!(json["fingers"][3].get("mcp").is_none());
    }

    #[test]
    fn ext_ok_entries_keep_field_order() {
        let frames = vec![middle_bent_frame(); 10];
        let report = analyze(&frames, Mode::ExtensionOk, &WindowPolicy::default()).unwrap();
        let json = serde_json::to_string(&report.fingers[1]).unwrap();

        assert!(json.starts_with(r#"{"finger":"middle","mcp":"#));
        assert!(json.contains(r#","pip":"#));
        assert!(json.contains(r#","dip":"#));
        assert!(!json.contains("tam"));
    }
}
