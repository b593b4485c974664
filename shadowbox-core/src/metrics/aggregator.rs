//! Session totals
//!
//! `MetricsAggregator` is the only writer of `SessionStats`. Counts only
//! ever grow; percentages are recomputed from frame counters each frame.

use serde::Serialize;

use super::defense::DefenseEvaluator;
use super::footwork::FootworkEvaluator;
use crate::classifier::{StrikeEvent, Technique};
use crate::config::EngineConfig;
use crate::pose::{LandmarkFrame, Side};

/// Running statistics for one session
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub jabs: u64,
    pub crosses: u64,
    pub hooks: u64,
    pub uppercuts: u64,
    pub left_strikes: u64,
    pub right_strikes: u64,
    pub total_strikes: u64,
    /// 0 - 100
    pub head_coverage_percent: f64,
    /// 0 - 100
    pub footwork_active_percent: f64,
    /// Accepted frames
    pub frame_count: u64,
    pub covered_frames: u64,
    pub footwork_active_frames: u64,
    /// Frames refused as malformed
    pub rejected_frames: u64,
    pub last_strike: Option<StrikeEvent>,
}

impl SessionStats {
    pub fn technique_count(&self, technique: Technique) -> u64 {
        match technique {
            Technique::Jab => self.jabs,
            Technique::Cross => self.crosses,
            Technique::Hook => self.hooks,
            Technique::Uppercut => self.uppercuts,
        }
    }

    pub fn side_count(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.left_strikes,
            Side::Right => self.right_strikes,
        }
    }

    /// Time spent with the guard up, at the given frame rate
    pub fn covered_seconds(&self, fps: f64) -> f64 {
        frames_to_seconds(self.covered_frames, fps)
    }

    /// Time spent moving the feet, at the given frame rate
    pub fn footwork_seconds(&self, fps: f64) -> f64 {
        frames_to_seconds(self.footwork_active_frames, fps)
    }
}

fn frames_to_seconds(frames: u64, fps: f64) -> f64 {
    if fps > 0.0 {
        frames as f64 / fps
    } else {
        0.0
    }
}

/// Owns the evaluators and folds their output into `SessionStats`
#[derive(Clone, Debug)]
pub struct MetricsAggregator {
    stats: SessionStats,
    defense: DefenseEvaluator,
    footwork: FootworkEvaluator,
}

impl MetricsAggregator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            stats: SessionStats::default(),
            defense: DefenseEvaluator::new(config),
            footwork: FootworkEvaluator::new(config),
        }
    }

    /// Count strikes. Applied events are never taken back.
    pub fn update_punches(&mut self, events: &[StrikeEvent]) {
        for event in events {
            let stats = &mut self.stats;
            stats.total_strikes += 1;
            match event.side {
                Side::Left => stats.left_strikes += 1,
                Side::Right => stats.right_strikes += 1,
            }
            match event.technique {
                Technique::Jab => stats.jabs += 1,
                Technique::Cross => stats.crosses += 1,
                Technique::Hook => stats.hooks += 1,
                Technique::Uppercut => stats.uppercuts += 1,
            }
            stats.last_strike = Some(*event);
        }
    }

    pub fn update_defense(&mut self, frame: &LandmarkFrame) -> bool {
        let covered = self.defense.process(frame);
        self.stats.covered_frames = self.defense.covered_frames();
        self.stats.head_coverage_percent = self.defense.percent();
        covered
    }

    pub fn update_footwork(&mut self, frame: &LandmarkFrame) -> bool {
        let active = self.footwork.process(frame);
        self.stats.footwork_active_frames = self.footwork.active_frames();
        self.stats.footwork_active_percent = self.footwork.percent();
        active
    }

    /// Fold one accepted frame: frame count, strikes, guard, footwork
    pub fn update_frame(&mut self, frame: &LandmarkFrame, events: &[StrikeEvent]) {
        self.stats.frame_count += 1;
        self.update_punches(events);
        self.update_defense(frame);
        self.update_footwork(frame);
    }

    pub fn record_rejected(&mut self) {
        self.stats.rejected_frames += 1;
    }

    pub fn snapshot(&self) -> SessionStats {
        self.stats.clone()
    }

    pub fn reset(&mut self) {
        self.stats = SessionStats::default();
        self.defense.reset();
        self.footwork.reset();
    }
}
