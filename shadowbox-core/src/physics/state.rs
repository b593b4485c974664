//! Hand state - phase of the extension cycle for one hand

use serde::Serialize;

/// Where a hand is in its Retracted → Extending → Retracting cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum HandState {
    /// Guard position, or hand not tracked
    #[default]
    Retracted,
    /// Wrist moving fast, strike in progress
    Extending,
    /// Strike confirmed, waiting for the hand to settle
    Retracting,
}

impl HandState {
    pub fn name(&self) -> &'static str {
        match self {
            HandState::Retracted => "RETRACTED",
            HandState::Extending => "EXTENDING",
            HandState::Retracting => "RETRACTING",
        }
    }
}
