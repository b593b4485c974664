//! Physics module - joint kinematics and confidence gating
//!
//! Re-exports only. All logic in submodules.

mod state;
mod angles;
mod history;
mod confidence_gate;

pub use state::HandState;
pub use angles::{angle_between, calculate_elbow_angle};
pub use history::{JointHistory, TimedPosition, HISTORY_FRAMES};
pub use confidence_gate::ConfidenceGate;
