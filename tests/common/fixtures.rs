use hand_rom_wasm::{Finger, Frame, Landmark};
use serde_json::{json, Value};

/// [MCP, PIP, DIP] 屈曲角（度）
pub type Bends = [f64; 3];

pub const STRAIGHT: Bends = [0.0, 0.0, 0.0];

/// 在 xy 平面内按给定屈曲角摆放四指关节链，手腕位于原点，MCP 位于 (1, 0, 0)
pub fn hand_frame(bends: [Bends; 4]) -> Frame {
    let mut frame = Frame::default();
    for (finger, finger_bends) in Finger::ALL.into_iter().zip(bends) {
        let chain = finger.chain();
        let mut pos = Landmark::new(1.0, 0.0, 0.0);
        let mut heading = 0.0_f64;
        frame.0[chain[0]] = pos;
        for (idx, bend) in chain[1..].iter().zip(finger_bends) {
            heading += bend.to_radians();
            pos = Landmark::new(pos.x + heading.cos(), pos.y + heading.sin(), 0.0);
            frame.0[*idx] = pos;
        }
    }
    frame
}

pub fn straight_frame() -> Frame {
    hand_frame([STRAIGHT; 4])
}

/// 只弯曲一根手指
pub fn single_finger_frame(finger: Finger, bends: Bends) -> Frame {
    let mut all = [STRAIGHT; 4];
    let pos = Finger::ALL.iter().position(|f| *f == finger).expect("known finger");
    all[pos] = bends;
    hand_frame(all)
}

pub fn analyze_body(frames: &[Frame], mode: &str) -> Value {
    json!({
        "frames": frames,
        "mode": mode,
    })
}
