//! Feature extraction for technique classification
//!
//! Features are taken at peak extension. Lengths are normalized by torso
//! length (shoulder center to hip center) so they hold across camera
//! distances; when the hips are not tracked the arm length is used instead.

use serde::Serialize;

use crate::physics::{angle_between, calculate_elbow_angle, ConfidenceGate};
use crate::pose::{midpoint, Joint, LandmarkFrame, Position, Side};

/// Image-space "up" when no torso is available (y grows downward)
const IMAGE_UP: [f32; 3] = [0.0, -1.0, 0.0];

/// Below this a normalization length is unusable
const MIN_SCALE: f32 = 0.0001;

/// One arm's joints for a single frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmPose {
    pub shoulder: Position,
    pub elbow: Position,
    pub wrist: Position,
}

impl ArmPose {
    /// Arm joints for `side`, or None if any is below the detection threshold
    pub fn from_frame(frame: &LandmarkFrame, side: Side, gate: &ConfidenceGate) -> Option<Self> {
        let [shoulder, elbow, wrist] = gate.positions(
            frame,
            [Joint::shoulder(side), Joint::elbow(side), Joint::wrist(side)],
        )?;
        Some(Self {
            shoulder,
            elbow,
            wrist,
        })
    }

    /// Shoulder to wrist distance
    pub fn reach(&self) -> f32 {
        (self.wrist - self.shoulder).norm()
    }

    fn length(&self) -> f32 {
        (self.elbow - self.shoulder).norm() + (self.wrist - self.elbow).norm()
    }
}

/// Torso reference: midline direction and length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torso {
    /// Hip center → shoulder center
    pub midline: Position,
    pub length: f32,
}

impl Torso {
    pub fn from_frame(frame: &LandmarkFrame, gate: &ConfidenceGate) -> Option<Self> {
        let [ls, rs, lh, rh] = gate.positions(
            frame,
            [
                Joint::LeftShoulder,
                Joint::RightShoulder,
                Joint::LeftHip,
                Joint::RightHip,
            ],
        )?;
        let midline = midpoint(&ls, &rs) - midpoint(&lh, &rh);
        let length = midline.norm();
        if length < MIN_SCALE {
            return None;
        }
        Some(Self { midline, length })
    }
}

/// Geometry of one strike at peak extension
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrikeFeatures {
    /// |wrist.x - shoulder.x|, normalized
    pub horizontal_offset: f32,
    /// shoulder.y - wrist.y, normalized; positive when the wrist is higher
    pub vertical_offset: f32,
    /// Degrees, 180 = straight arm
    pub elbow_angle: f32,
    /// Shoulder→wrist angle from the upward midline, degrees (90 = level)
    pub trajectory_angle: f32,
    /// Wrist path vs. arm direction, degrees (0 = radial, 90 = arcing)
    pub sweep_angle: f32,
    pub wrist_above_elbow: bool,
    /// Raw shoulder to wrist distance, used to locate the peak
    pub reach: f32,
}

/// Extract features for an arm, given where the wrist started the cycle
pub fn extract_features(arm: &ArmPose, onset: &Position, torso: Option<&Torso>) -> StrikeFeatures {
    let reach_vector = arm.wrist - arm.shoulder;
    let (midline, scale) = match torso {
        Some(t) => (t.midline, t.length),
        None => (Position::from(IMAGE_UP), arm.length()),
    };
    let scale = scale.max(MIN_SCALE);

    let path = arm.wrist - onset;

    StrikeFeatures {
        horizontal_offset: reach_vector.x.abs() / scale,
        vertical_offset: -reach_vector.y / scale,
        elbow_angle: calculate_elbow_angle(&arm.shoulder, &arm.elbow, &arm.wrist),
        trajectory_angle: angle_between(&reach_vector, &midline).unwrap_or(90.0),
        sweep_angle: angle_between(&path, &reach_vector).unwrap_or(0.0),
        wrist_above_elbow: arm.wrist.y < arm.elbow.y,
        reach: reach_vector.norm(),
    }
}
