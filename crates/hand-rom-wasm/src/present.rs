//! 报告展示层
//!
//! 分析结果与展示格式解耦：同一份 [`RomReport`] 可渲染为页面标记或纯文本。
//! 数值统一保留一位小数。

use std::fmt::Write;

use crate::report::{FingerMeasure, RomReport};

pub trait Presenter {
    /// HTTP Content-Type
    fn content_type(&self) -> &'static str;

    fn render(&self, report: &RomReport) -> String;
}

/// 结果页使用的固定 HTML 片段
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPresenter;

impl Presenter for HtmlPresenter {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, report: &RomReport) -> String {
        let mut out = String::new();
        for entry in &report.fingers {
            let name = entry.finger.name();
            // 写入 String 不会失败
            let _ = match entry.measure {
                FingerMeasure::Joints { mcp, pip, dip } => write!(
                    out,
                    "\n<b>{name}</b><br>\nMCP：屈曲 {mcp:.1}°<br>\nPIP：屈曲 {pip:.1}°<br>\nDIP：屈曲 {dip:.1}°<br><br>\n"
                ),
                FingerMeasure::Tam { tam } => write!(
                    out,
                    "\n<b>{name}</b><br>\n総運動角（TAM）：{tam:.1}°<br><br>\n"
                ),
            };
        }
        out
    }
}

/// 每指一行的纯文本
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, report: &RomReport) -> String {
        report
            .fingers
            .iter()
            .map(|entry| {
                let name = entry.finger.name();
                match entry.measure {
                    FingerMeasure::Joints { mcp, pip, dip } => {
                        format!("{name}: MCP {mcp:.1}° PIP {pip:.1}° DIP {dip:.1}°\n")
                    }
                    FingerMeasure::Tam { tam } => format!("{name}: TAM {tam:.1}°\n"),
                }
            })
            .collect()
    }
}
