//! Rolling joint history
//!
//! Tracks the last N positions of one joint and derives per-frame velocity
//! and accumulated path length from them.

use std::collections::VecDeque;

use crate::pose::Position;

/// Default number of samples kept per joint
pub const HISTORY_FRAMES: usize = 5;

/// A position stamped with the frame it was observed in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedPosition {
    pub position: Position,
    pub frame: u64,
}

/// Fixed-capacity FIFO of recent positions for a single joint
#[derive(Clone, Debug)]
pub struct JointHistory {
    history: VecDeque<TimedPosition>,
    capacity: usize,
}

impl JointHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once full
    pub fn push(&mut self, position: Position, frame: u64) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(TimedPosition { position, frame });
    }

    /// Distance between the two newest samples per elapsed frame.
    ///
    /// Frame gaps (dropped frames) are divided out. None until two samples exist.
    pub fn velocity(&self) -> Option<f32> {
        let newest = self.latest()?;
        let prev = self.previous()?;
        let frames = newest.frame.saturating_sub(prev.frame).max(1) as f32;
        Some((newest.position - prev.position).norm() / frames)
    }

    /// Total path length over the last `k` samples
    pub fn displacement(&self, k: usize) -> f32 {
        let k = k.min(self.history.len());
        if k < 2 {
            return 0.0;
        }
        let start = self.history.len() - k;
        self.history
            .range(start..)
            .zip(self.history.range(start + 1..))
            .map(|(a, b)| (b.position - a.position).norm())
            .sum()
    }

    pub fn latest(&self) -> Option<&TimedPosition> {
        self.history.back()
    }

    /// Sample just before the newest
    pub fn previous(&self) -> Option<&TimedPosition> {
        let len = self.history.len();
        if len < 2 {
            None
        } else {
            self.history.get(len - 2)
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for JointHistory {
    fn default() -> Self {
        Self::new(HISTORY_FRAMES)
    }
}
