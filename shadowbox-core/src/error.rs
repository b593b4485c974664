//! Error types for frame ingestion and engine configuration
//!
//! Nothing here is fatal to a session. A `FrameError` means one frame was
//! skipped; a `ConfigError` means the engine was never built.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::pose::Joint;

/// A frame rejected at the engine boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("non-finite coordinate for {joint:?}")]
    NonFiniteCoordinate { joint: Joint },

    #[error("confidence {confidence} for {joint:?} is outside [0, 1]")]
    ConfidenceOutOfRange { joint: Joint, confidence: f32 },

    #[error("frame {index} is not newer than last processed frame {last}")]
    StaleFrame { index: u64, last: u64 },

    #[error("invalid landmark data length: {len} (expected {expected})")]
    MalformedLength { len: usize, expected: usize },
}

/// Invalid engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("v_low ({v_low}) must be below v_high ({v_high})")]
    InvertedHysteresis { v_low: f32, v_high: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("detection threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f32),

    #[error("history capacity {0} is too short (need at least 2 samples)")]
    HistoryTooShort(usize),

    #[error("footwork window {window} exceeds history capacity {capacity}")]
    WindowTooLong { window: usize, capacity: usize },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
