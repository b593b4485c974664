//! Landmark samples and per-frame snapshots
//!
//! A `LandmarkFrame` is built once per processed video frame and never
//! mutated afterwards. Coordinates follow image conventions: x grows to the
//! right, y grows downward.

use nalgebra::Vector3;

use super::joint::{Joint, POSE_LANDMARK_COUNT};
use crate::error::FrameError;

/// x, y, z in pixel (or normalized) units
pub type Position = Vector3<f32>;

/// x, y, z, visibility per landmark in the MediaPipe flat array
pub const VALUES_PER_LANDMARK: usize = 4;

/// One joint observation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSample {
    pub joint: Joint,
    pub position: Position,
    /// 0.0 - 1.0
    pub confidence: f32,
}

impl LandmarkSample {
    pub fn new(joint: Joint, x: f32, y: f32, z: f32, confidence: f32) -> Self {
        Self {
            joint,
            position: Position::new(x, y, z),
            confidence,
        }
    }

    pub fn is_detectable(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }
}

/// Immutable snapshot of every tracked joint for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    index: u64,
    timestamp_ms: Option<f64>,
    samples: [Option<LandmarkSample>; Joint::COUNT],
}

impl LandmarkFrame {
    /// Frame with no detected person
    pub fn empty(index: u64) -> Self {
        Self {
            index,
            timestamp_ms: None,
            samples: [None; Joint::COUNT],
        }
    }

    pub fn from_samples(index: u64, samples: impl IntoIterator<Item = LandmarkSample>) -> Self {
        samples
            .into_iter()
            .fold(Self::empty(index), |frame, sample| frame.with_sample(sample))
    }

    /// Decode the MediaPipe flat array: 33 landmarks × (x, y, z, visibility),
    /// normalized. x and z scale by `width`, y by `height`.
    ///
    /// An empty slice is a "no detection" frame.
    pub fn from_mediapipe(
        index: u64,
        timestamp_ms: Option<f64>,
        data: &[f32],
        width: f32,
        height: f32,
    ) -> Result<Self, FrameError> {
        let mut frame = Self::empty(index);
        frame.timestamp_ms = timestamp_ms;

        if data.is_empty() {
            return Ok(frame);
        }

        let expected = POSE_LANDMARK_COUNT * VALUES_PER_LANDMARK;
        if data.len() != expected {
            return Err(FrameError::MalformedLength {
                len: data.len(),
                expected,
            });
        }

        for joint in Joint::ALL {
            let base = joint.index() * VALUES_PER_LANDMARK;
            frame.samples[joint.slot()] = Some(LandmarkSample::new(
                joint,
                data[base] * width,
                data[base + 1] * height,
                data[base + 2] * width,
                data[base + 3],
            ));
        }

        Ok(frame)
    }

    pub fn with_timestamp(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    pub fn with_sample(mut self, sample: LandmarkSample) -> Self {
        self.samples[sample.joint.slot()] = Some(sample);
        self
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp_ms(&self) -> Option<f64> {
        self.timestamp_ms
    }

    pub fn get(&self, joint: Joint) -> Option<&LandmarkSample> {
        self.samples[joint.slot()].as_ref()
    }

    /// Sample for `joint` only if it clears the detection threshold
    pub fn detectable(&self, joint: Joint, threshold: f32) -> Option<&LandmarkSample> {
        self.get(joint).filter(|s| s.is_detectable(threshold))
    }

    pub fn samples(&self) -> impl Iterator<Item = &LandmarkSample> {
        self.samples.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.iter().all(Option::is_none)
    }

    /// Reject frames with NaN/infinite coordinates or out-of-range confidence
    pub fn validate(&self) -> Result<(), FrameError> {
        for sample in self.samples() {
            if !sample.position.iter().all(|v| v.is_finite()) {
                return Err(FrameError::NonFiniteCoordinate {
                    joint: sample.joint,
                });
            }
            if !(0.0..=1.0).contains(&sample.confidence) {
                return Err(FrameError::ConfidenceOutOfRange {
                    joint: sample.joint,
                    confidence: sample.confidence,
                });
            }
        }
        Ok(())
    }
}

pub fn midpoint(a: &Position, b: &Position) -> Position {
    (a + b) * 0.5
}
