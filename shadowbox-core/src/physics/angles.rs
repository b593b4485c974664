//! Joint and trajectory angles using dot product
//!
//! cos(θ) = (v1 · v2) / (|v1| × |v2|)

use crate::pose::Position;

/// Below this length a vector has no usable direction
const MIN_LENGTH: f32 = 0.0001;

/// Angle between two vectors in degrees (0 - 180).
///
/// None if either vector is degenerate.
pub fn angle_between(v1: &Position, v2: &Position) -> Option<f32> {
    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < MIN_LENGTH || mag2 < MIN_LENGTH {
        return None;
    }
    let cos_angle = (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// Calculate elbow angle in degrees
///
/// - 90° = fully bent (fist near shoulder)
/// - 180° = fully straight (arm extended)
pub fn calculate_elbow_angle(shoulder: &Position, elbow: &Position, wrist: &Position) -> f32 {
    let upper_arm = shoulder - elbow;
    let forearm = wrist - elbow;
    // Assume straight if we can't calculate
    angle_between(&upper_arm, &forearm).unwrap_or(180.0)
}
