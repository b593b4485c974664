//! Shadowbox Core - strike classification and session metrics
//!
//! Turns per-frame pose landmarks into strike events (side + technique) and
//! running session statistics: strike counts, guard coverage and footwork
//! activity.
//!
//! Layout:
//! - `pose` - joints, samples, frames
//! - `physics` - joint history, angles, confidence gating
//! - `classifier` - per-hand strike state machine and technique models
//! - `metrics` - guard/footwork evaluators and the stats aggregator
//! - `engine` - `process_frame` / `snapshot` / `reset`
//! - `bridge` - wasm_bindgen entry points for the browser host
//!
//! ```
//! use shadowbox_core::{LandmarkFrame, StrikeEngine};
//!
//! let mut engine = StrikeEngine::default();
//! let events = engine.process_frame(&LandmarkFrame::empty(0)).unwrap();
//! assert!(events.is_empty());
//! assert_eq!(engine.snapshot().frame_count, 1);
//! ```

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod mailbox;
pub mod metrics;
pub mod physics;
pub mod pose;

mod bridge;

use wasm_bindgen::prelude::*;

pub use classifier::{
    GeometricModel, SideOnlyModel, StrikeEvent, StrikeFeatures, Technique, TechniqueModel,
};
pub use config::{EngineConfig, Stance};
pub use engine::StrikeEngine;
pub use error::{ConfigError, FrameError};
pub use mailbox::FrameMailbox;
pub use metrics::SessionStats;
pub use physics::HandState;
pub use pose::{Joint, LandmarkFrame, LandmarkSample, Side};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure_engine, get_hand_debug, get_session_stats, no_detection, reset_session,
    update_landmarks,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
