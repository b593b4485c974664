//! Technique decision function
//!
//! The state machine decides *when* a strike happened; a `TechniqueModel`
//! decides *what* it was. `GeometricModel` is the default. A trained model
//! plugs in behind the same trait.

use serde::Serialize;
use std::fmt;

use super::features::StrikeFeatures;
use crate::config::TechniqueThresholds;
use crate::pose::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Technique {
    Jab,
    Cross,
    Hook,
    Uppercut,
}

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::Jab,
        Technique::Cross,
        Technique::Hook,
        Technique::Uppercut,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Technique::Jab => "Jab",
            Technique::Cross => "Cross",
            Technique::Hook => "Hook",
            Technique::Uppercut => "Uppercut",
        }
    }

    /// Jab for the lead hand, Cross for the rear
    pub fn straight(side: Side, lead: Side) -> Self {
        if side == lead {
            Technique::Jab
        } else {
            Technique::Cross
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed strike
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StrikeEvent {
    pub side: Side,
    pub technique: Technique,
    /// Frame on which the cycle completed
    pub frame: u64,
}

impl fmt::Display for StrikeEvent {
    /// "Left Jab"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.technique)
    }
}

/// Feature → technique decision
pub trait TechniqueModel: Send {
    fn classify(&self, side: Side, features: &StrikeFeatures, lead: Side) -> Technique;
}

/// Hand-tuned geometric boundaries
#[derive(Clone, Debug, Default)]
pub struct GeometricModel {
    thresholds: TechniqueThresholds,
}

impl GeometricModel {
    pub fn new(thresholds: TechniqueThresholds) -> Self {
        Self { thresholds }
    }

    /// The wrist climbs more than it reaches out
    fn is_uppercut(&self, f: &StrikeFeatures) -> bool {
        f.wrist_above_elbow
            && f.vertical_offset >= self.thresholds.uppercut_min_rise
            && f.vertical_offset > f.horizontal_offset
            && f.trajectory_angle <= self.thresholds.uppercut_max_trajectory_deg
    }

    fn is_hook(&self, f: &StrikeFeatures) -> bool {
        f.sweep_angle >= self.thresholds.hook_min_sweep_deg
            && f.elbow_angle <= self.thresholds.hook_max_elbow_deg
    }
}

impl TechniqueModel for GeometricModel {
    fn classify(&self, side: Side, features: &StrikeFeatures, lead: Side) -> Technique {
        if self.is_uppercut(features) {
            Technique::Uppercut
        } else if self.is_hook(features) {
            Technique::Hook
        } else {
            Technique::straight(side, lead)
        }
    }
}

/// Labels by hand only: lead → Jab, rear → Cross
#[derive(Clone, Copy, Debug, Default)]
pub struct SideOnlyModel;

impl TechniqueModel for SideOnlyModel {
    fn classify(&self, side: Side, _features: &StrikeFeatures, lead: Side) -> Technique {
        Technique::straight(side, lead)
    }
}
