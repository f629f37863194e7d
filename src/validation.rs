//! 帧缓冲输入校验，在进入角度计算之前执行。
use hand_rom_wasm::Frame;

/// 校验帧数上限与坐标有限性；帧数下限由窗口策略负责
pub fn validate_frames(frames: &[Frame], max_frames: usize) -> Result<(), String> {
    if frames.len() > max_frames {
        return Err(format!(
            "Too many frames: {} submitted, at most {max_frames} allowed",
            frames.len()
        ));
    }
    if let Some(pos) = frames.iter().position(|f| !f.is_finite()) {
        return Err(format!("Frame {pos} contains non-finite coordinates"));
    }
    Ok(())
}
