//! Engine configuration
//!
//! Defaults assume pixel coordinates from a 640x480 frame, the units the
//! pose bridge produces. Every threshold is a calibration default and is
//! expected to be tuned per camera setup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pose::Side;

/// Which hand leads. The lead hand's straight punch is a jab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stance {
    /// Left hand leads
    #[default]
    Orthodox,
    /// Right hand leads
    Southpaw,
}

impl Stance {
    pub fn lead(&self) -> Side {
        match self {
            Stance::Orthodox => Side::Left,
            Stance::Southpaw => Side::Right,
        }
    }
}

/// Hysteresis and extension-distance thresholds for the hand state machine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrikeThresholds {
    /// Extension onset (units per frame)
    pub v_high: f32,
    /// Retraction settle (units per frame)
    pub v_low: f32,
    /// Minimum wrist path length for a cycle to count as a strike
    pub min_extension_distance: f32,
}

impl Default for StrikeThresholds {
    fn default() -> Self {
        Self {
            v_high: 20.0,
            v_low: 5.0,
            min_extension_distance: 40.0,
        }
    }
}

/// Decision boundaries for the geometric technique model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechniqueThresholds {
    /// Wrist height above shoulder, in torso lengths
    pub uppercut_min_rise: f32,
    /// Shoulder→wrist angle from the upward midline, degrees
    pub uppercut_max_trajectory_deg: f32,
    /// How tangential the wrist path is, degrees
    pub hook_min_sweep_deg: f32,
    /// Hooks keep the elbow bent
    pub hook_max_elbow_deg: f32,
}

impl Default for TechniqueThresholds {
    fn default() -> Self {
        Self {
            uppercut_min_rise: 0.15,
            uppercut_max_trajectory_deg: 60.0,
            hook_min_sweep_deg: 50.0,
            hook_max_elbow_deg: 140.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefenseConfig {
    /// Maximum wrist to head-center distance that still counts as guard up
    pub coverage_radius: f32,
}

impl Default for DefenseConfig {
    fn default() -> Self {
        Self {
            coverage_radius: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FootworkConfig {
    /// Number of recent samples summed per joint
    pub window: usize,
    /// Combined ankle + hip path length above which the frame is active
    pub activity_distance: f32,
}

impl Default for FootworkConfig {
    fn default() -> Self {
        Self {
            window: 5,
            activity_distance: 30.0,
        }
    }
}

/// Complete engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Samples kept per joint
    pub history_capacity: usize,
    /// Landmarks below this confidence are treated as missing
    pub detection_threshold: f32,
    pub stance: Stance,
    pub strike: StrikeThresholds,
    pub technique: TechniqueThresholds,
    pub defense: DefenseConfig,
    pub footwork: FootworkConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: 5,
            detection_threshold: 0.5,
            stance: Stance::default(),
            strike: StrikeThresholds::default(),
            technique: TechniqueThresholds::default(),
            defense: DefenseConfig::default(),
            footwork: FootworkConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let strike = &self.strike;
        positive("v_high", strike.v_high)?;
        positive("v_low", strike.v_low)?;
        if strike.v_low >= strike.v_high {
            return Err(ConfigError::InvertedHysteresis {
                v_low: strike.v_low,
                v_high: strike.v_high,
            });
        }
        positive("min_extension_distance", strike.min_extension_distance)?;
        positive("coverage_radius", self.defense.coverage_radius)?;
        positive("activity_distance", self.footwork.activity_distance)?;

        if !(0.0..=1.0).contains(&self.detection_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.detection_threshold));
        }
        if self.history_capacity < 2 {
            return Err(ConfigError::HistoryTooShort(self.history_capacity));
        }
        if self.footwork.window < 2 || self.footwork.window > self.history_capacity {
            return Err(ConfigError::WindowTooLong {
                window: self.footwork.window,
                capacity: self.history_capacity,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
