//! Guard ("head coverage") evaluation
//!
//! A frame is covered when both wrists are higher than the nose and each
//! sits within the coverage radius of the head center (midpoint of the
//! ears). Untracked landmarks mean not covered; the frame still counts.

use super::percent::running_percent;
use crate::config::EngineConfig;
use crate::physics::ConfidenceGate;
use crate::pose::{midpoint, Joint, LandmarkFrame};

#[derive(Clone, Debug)]
pub struct DefenseEvaluator {
    gate: ConfidenceGate,
    coverage_radius: f32,
    covered_frames: u64,
    frame_count: u64,
}

impl DefenseEvaluator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            gate: ConfidenceGate::new(config.detection_threshold),
            coverage_radius: config.defense.coverage_radius,
            covered_frames: 0,
            frame_count: 0,
        }
    }

    /// Guard test for one frame, without touching the counters
    pub fn is_covered(&self, frame: &LandmarkFrame) -> bool {
        let Some([nose, left_ear, right_ear, left_wrist, right_wrist]) = self.gate.positions(
            frame,
            [
                Joint::Nose,
                Joint::LeftEar,
                Joint::RightEar,
                Joint::LeftWrist,
                Joint::RightWrist,
            ],
        ) else {
            return false;
        };

        let head = midpoint(&left_ear, &right_ear);
        [left_wrist, right_wrist].iter().all(|wrist| {
            // y grows downward: higher on screen means smaller y
            wrist.y < nose.y && (wrist - head).norm() <= self.coverage_radius
        })
    }

    /// Count the frame and return whether it was covered
    pub fn process(&mut self, frame: &LandmarkFrame) -> bool {
        let covered = self.is_covered(frame);
        self.frame_count += 1;
        if covered {
            self.covered_frames += 1;
        }
        covered
    }

    pub fn percent(&self) -> f64 {
        running_percent(self.covered_frames, self.frame_count)
    }

    pub fn covered_frames(&self) -> u64 {
        self.covered_frames
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn reset(&mut self) {
        self.covered_frames = 0;
        self.frame_count = 0;
    }
}
