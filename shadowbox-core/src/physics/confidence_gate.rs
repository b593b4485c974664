//! Confidence gate
//!
//! Landmarks below the detection threshold are treated as missing for the
//! frame. Every evaluator asks the gate instead of reading raw confidence.

use crate::pose::{Joint, LandmarkFrame, LandmarkSample, Position};

#[derive(Clone, Copy, Debug)]
pub struct ConfidenceGate {
    /// Minimum confidence to accept raw data
    threshold: f32,
}

impl ConfidenceGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn sample<'a>(&self, frame: &'a LandmarkFrame, joint: Joint) -> Option<&'a LandmarkSample> {
        frame.detectable(joint, self.threshold)
    }

    pub fn position(&self, frame: &LandmarkFrame, joint: Joint) -> Option<Position> {
        self.sample(frame, joint).map(|s| s.position)
    }

    /// Positions for all `joints`, or None if any one is untracked
    pub fn positions<const N: usize>(
        &self,
        frame: &LandmarkFrame,
        joints: [Joint; N],
    ) -> Option<[Position; N]> {
        let mut out = [Position::zeros(); N];
        for (slot, joint) in out.iter_mut().zip(joints) {
            *slot = self.position(frame, joint)?;
        }
        Some(out)
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(0.5)
    }
}
