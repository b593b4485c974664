//! Pose module - per-frame landmark snapshots from the pose estimator
//!
//! Re-exports only. All logic in submodules.

mod joint;
mod frame;

pub use joint::{Joint, Side, POSE_LANDMARK_COUNT};
pub use frame::{midpoint, LandmarkFrame, LandmarkSample, Position, VALUES_PER_LANDMARK};
