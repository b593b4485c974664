/// `part / whole × 100`, clamped to [0, 100]; 0 when nothing was counted
pub fn running_percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}
