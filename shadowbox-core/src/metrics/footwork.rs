//! Footwork activity evaluation
//!
//! Active when the ankles and hips together travelled further than the
//! activity distance over the last `window` frames.

use super::percent::running_percent;
use crate::config::EngineConfig;
use crate::physics::{ConfidenceGate, JointHistory};
use crate::pose::{Joint, LandmarkFrame};

/// Joints whose movement counts as footwork
pub const FOOTWORK_JOINTS: [Joint; 4] = [
    Joint::LeftAnkle,
    Joint::RightAnkle,
    Joint::LeftHip,
    Joint::RightHip,
];

#[derive(Clone, Debug)]
pub struct FootworkEvaluator {
    gate: ConfidenceGate,
    window: usize,
    activity_distance: f32,
    histories: [JointHistory; 4],
    active_frames: u64,
    frame_count: u64,
}

impl FootworkEvaluator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            gate: ConfidenceGate::new(config.detection_threshold),
            window: config.footwork.window,
            activity_distance: config.footwork.activity_distance,
            histories: std::array::from_fn(|_| JointHistory::new(config.history_capacity)),
            active_frames: 0,
            frame_count: 0,
        }
    }

    /// Update joint histories, count the frame, return whether it was active
    pub fn process(&mut self, frame: &LandmarkFrame) -> bool {
        let mut tracked = true;
        for (joint, history) in FOOTWORK_JOINTS.iter().zip(self.histories.iter_mut()) {
            match self.gate.position(frame, *joint) {
                Some(position) => history.push(position, frame.index()),
                None => {
                    // Untracked: restart so the gap is not read as movement
                    history.clear();
                    tracked = false;
                }
            }
        }

        let active = tracked && self.travelled() > self.activity_distance;
        self.frame_count += 1;
        if active {
            self.active_frames += 1;
        }
        active
    }

    /// Combined path length of all footwork joints over the window
    pub fn travelled(&self) -> f32 {
        self.histories
            .iter()
            .map(|h| h.displacement(self.window))
            .sum()
    }

    pub fn percent(&self) -> f64 {
        running_percent(self.active_frames, self.frame_count)
    }

    pub fn active_frames(&self) -> u64 {
        self.active_frames
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn reset(&mut self) {
        for history in &mut self.histories {
            history.clear();
        }
        self.active_frames = 0;
        self.frame_count = 0;
    }
}
