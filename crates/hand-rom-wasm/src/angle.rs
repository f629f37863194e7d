//! 关节角度计算（含医学补正）
//!
//! MediaPipe 给出的是外角：手指伸直时顶点角约为 180°。
//! 临床记录屈曲角：伸直为 0°，弯曲越大角度越大。

use crate::landmark::Landmark;

/// 以 `b` 为顶点的夹角（度）
///
/// 公式: cos(θ) = û1 · û2，v1 = a - b，v2 = c - b，各自先归一化。
/// 任一向量为零向量或含非有限分量时返回 0，避免 NaN 向下游传播。
pub fn raw_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    let (Some(u1), Some(u2)) = (direction(&a.sub(b)), direction(&c.sub(b))) else {
        return 0.0;
    };

    u1.dot(&u2).clamp(-1.0, 1.0).acos().to_degrees()
}

/// 单位方向向量
///
/// 先按最大分量缩放再求模，坐标极小或极大时平方和也不会下溢/上溢。
fn direction(v: &Landmark) -> Option<Landmark> {
    let m = v.max_abs();
    if m == 0.0 || !m.is_finite() || !v.is_finite() {
        return None;
    }

    let scaled = Landmark::new(v.x / m, v.y / m, v.z / m);
    let len = scaled.norm();
    Some(Landmark::new(scaled.x / len, scaled.y / len, scaled.z / len))
}

/// 屈曲角（度），范围 [0, 180]
///
/// `flexion = clamp(180 - raw, 0, 180)`。退化输入的 raw 为 0，因此屈曲角为 180。
pub fn flexion_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    (180.0 - raw_angle(a, b, c)).clamp(0.0, 180.0)
}
