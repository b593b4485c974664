//! Tracked joint identities (MediaPipe Pose indices)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total landmarks produced by MediaPipe Pose
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Body side of a paired joint or hand
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joints the engine tracks. Discriminants are MediaPipe landmark indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Nose = 0,
    LeftEar = 7,
    RightEar = 8,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftAnkle = 27,
    RightAnkle = 28,
}

impl Joint {
    pub const COUNT: usize = 13;

    pub const ALL: [Joint; Joint::COUNT] = [
        Joint::Nose,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// MediaPipe landmark index
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Dense position in `Joint::ALL`, used for per-joint storage
    pub(crate) fn slot(&self) -> usize {
        match self {
            Joint::Nose => 0,
            Joint::LeftEar => 1,
            Joint::RightEar => 2,
            Joint::LeftShoulder => 3,
            Joint::RightShoulder => 4,
            Joint::LeftElbow => 5,
            Joint::RightElbow => 6,
            Joint::LeftWrist => 7,
            Joint::RightWrist => 8,
            Joint::LeftHip => 9,
            Joint::RightHip => 10,
            Joint::LeftAnkle => 11,
            Joint::RightAnkle => 12,
        }
    }

    pub fn wrist(side: Side) -> Joint {
        match side {
            Side::Left => Joint::LeftWrist,
            Side::Right => Joint::RightWrist,
        }
    }

    pub fn elbow(side: Side) -> Joint {
        match side {
            Side::Left => Joint::LeftElbow,
            Side::Right => Joint::RightElbow,
        }
    }

    pub fn shoulder(side: Side) -> Joint {
        match side {
            Side::Left => Joint::LeftShoulder,
            Side::Right => Joint::RightShoulder,
        }
    }
}
