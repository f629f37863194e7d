//! 浏览器端入口
//!
//! 关键点采集与帧缓冲由页面脚本负责，这里只接收扁平的 Float64Array：
//! 每帧 63 个数 (21 点 × xyz)，k 帧依次拼接。

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::angle::flexion_angle;
use crate::error::RomError;
use crate::finger::measure_frame;
use crate::landmark::{frames_from_flat, Frame, Landmark};
use crate::present::{HtmlPresenter, Presenter, TextPresenter};
use crate::report::{analyze, Mode, RomReport};
use crate::window::WindowPolicy;

/// 关节活动度分析器
///
/// 持有窗口策略；分析失败时只保留最近一次的原因，供 `lastError` 读取。
#[wasm_bindgen]
pub struct RomAnalyzer {
    policy: WindowPolicy,
    last_error: RefCell<Option<String>>,
}

#[wasm_bindgen]
impl RomAnalyzer {
    /// 创建分析器
    ///
    /// # 参数
    /// - `min_frames`: 最少帧数，推荐 10
    /// - `window_size`: 窗口最大帧数，推荐 20
    ///
    /// 参数非法时使用默认策略 (10, 20)。
    #[wasm_bindgen(constructor)]
    pub fn new(min_frames: usize, window_size: usize) -> Self {
        Self {
            policy: WindowPolicy::new(min_frames, window_size).unwrap_or_default(),
            last_error: RefCell::new(None),
        }
    }

    /// 分析帧缓冲，返回结构化报告；帧数不足或数据格式错误时返回 null
    pub fn analyze(&self, flat: &[f64], mode: &str) -> JsValue {
        match self.report(flat, mode) {
            Some(report) => to_js(&report).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// 分析并渲染为结果页 HTML 片段
    #[wasm_bindgen(js_name = "renderHtml")]
    pub fn render_html(&self, flat: &[f64], mode: &str) -> Option<String> {
        self.render(flat, mode, &HtmlPresenter)
    }

    /// 分析并渲染为纯文本
    #[wasm_bindgen(js_name = "renderText")]
    pub fn render_text(&self, flat: &[f64], mode: &str) -> Option<String> {
        self.render(flat, mode, &TextPresenter)
    }

    #[wasm_bindgen(js_name = "getMinFrames")]
    pub fn get_min_frames(&self) -> usize {
        self.policy.min_frames()
    }

    #[wasm_bindgen(js_name = "getWindowSize")]
    pub fn get_window_size(&self) -> usize {
        self.policy.max_frames()
    }

    /// 最近一次分析失败的原因；成功后清空
    #[wasm_bindgen(getter, js_name = "lastError")]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }
}

impl RomAnalyzer {
    fn report(&self, flat: &[f64], mode: &str) -> Option<RomReport> {
        let result = self.try_report(flat, mode);
        *self.last_error.borrow_mut() = result.as_ref().err().map(RomError::to_string);
        result.ok()
    }

    fn try_report(&self, flat: &[f64], mode: &str) -> Result<RomReport, RomError> {
        let frames = frames_from_flat(flat)?;
        analyze(&frames, Mode::parse(mode), &self.policy)
    }

    fn render(&self, flat: &[f64], mode: &str, presenter: &dyn Presenter) -> Option<String> {
        self.report(flat, mode).map(|report| presenter.render(&report))
    }
}

/// 单帧四指关节角：[index.mcp, index.pip, index.dip, middle.mcp, ..., pinky.dip]
#[wasm_bindgen(js_name = "measureFrame")]
pub fn measure_frame_js(flat: &[f64]) -> Option<js_sys::Float64Array> {
    measure_frame_flat(flat).map(|angles| js_sys::Float64Array::from(&angles[..]))
}

/// 三个 xyz 点的屈曲角（度），`b` 为顶点；输入不足 3 个分量时返回 undefined
#[wasm_bindgen(js_name = "flexionAngle")]
pub fn flexion_angle_js(a: &[f64], b: &[f64], c: &[f64]) -> Option<f64> {
    Some(flexion_angle(&point(a)?, &point(b)?, &point(c)?))
}

/// 映射按普通 JS 对象输出，与 JSON 形状一致
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn point(xyz: &[f64]) -> Option<Landmark> {
    match xyz {
        [x, y, z, ..] => Some(Landmark::new(*x, *y, *z)),
        _ => None,
    }
}

fn measure_frame_flat(flat: &[f64]) -> Option<[f64; 12]> {
    let frame = Frame::from_flat(flat).ok()?;
    let mut out = [0.0; 12];
    for (chunk, (_, angles)) in out.chunks_exact_mut(3).zip(measure_frame(&frame).iter()) {
        chunk.copy_from_slice(&[angles.mcp, angles.pip, angles.dip]);
    }
    Some(out)
}
