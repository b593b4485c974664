//! Per-hand strike detection
//!
//! A hysteresis state machine over wrist velocity. One instance per hand;
//! the two hands never share state.
//!
//! ```text
//! Retracted --v >= v_high--> Extending --v < v_high, path >= floor--> Retracting
//!     ^                          |                                      |
//!     +---- path < floor --------+                                      |
//!     +---------------- v <= v_low (emit) ------------------------------+
//! ```
//!
//! The technique is decided when extension ends; the event is emitted once
//! the hand settles. Speed picking up again while Retracting does not start
//! a new cycle.

use tracing::{debug, info};

use super::features::{extract_features, ArmPose, StrikeFeatures, Torso};
use super::model::{StrikeEvent, Technique, TechniqueModel};
use crate::config::{EngineConfig, StrikeThresholds};
use crate::physics::{ConfidenceGate, HandState, JointHistory};
use crate::pose::{LandmarkFrame, Position, Side};

/// Evidence for the extension cycle in progress
#[derive(Clone, Debug)]
struct Cycle {
    /// Wrist position just before onset
    onset: Position,
    /// Wrist path length since onset
    path: f32,
    /// Features at the largest reach seen so far
    peak: StrikeFeatures,
    /// Set once extension is confirmed
    technique: Option<Technique>,
}

impl Cycle {
    fn observe(&mut self, arm: &ArmPose, torso: Option<&Torso>) {
        if arm.reach() > self.peak.reach {
            self.peak = extract_features(arm, &self.onset, torso);
        }
    }
}

/// Strike detector for one hand
#[derive(Clone, Debug)]
pub struct StrikeClassifier {
    side: Side,
    lead: Side,
    state: HandState,
    wrist: JointHistory,
    cycle: Option<Cycle>,
    thresholds: StrikeThresholds,
    gate: ConfidenceGate,
}

impl StrikeClassifier {
    pub fn new(side: Side, config: &EngineConfig) -> Self {
        Self {
            side,
            lead: config.stance.lead(),
            state: HandState::Retracted,
            wrist: JointHistory::new(config.history_capacity),
            cycle: None,
            thresholds: config.strike.clone(),
            gate: ConfidenceGate::new(config.detection_threshold),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    /// Latest wrist velocity, if known
    pub fn velocity(&self) -> Option<f32> {
        self.wrist.velocity()
    }

    /// Run one frame. Returns the strike completed on this frame, if any.
    pub fn process(
        &mut self,
        frame: &LandmarkFrame,
        model: &dyn TechniqueModel,
    ) -> Option<StrikeEvent> {
        let Some(arm) = ArmPose::from_frame(frame, self.side, &self.gate) else {
            self.lose_track(frame.index());
            return None;
        };
        let torso = Torso::from_frame(frame, &self.gate);

        self.wrist.push(arm.wrist, frame.index());
        let velocity = self.wrist.velocity()?;
        let step = self.wrist.displacement(2);

        match self.state {
            HandState::Retracted => {
                if velocity >= self.thresholds.v_high {
                    self.begin_cycle(&arm, torso.as_ref(), step, frame.index(), velocity);
                }
                None
            }
            HandState::Extending => {
                self.extend(&arm, torso.as_ref(), step, velocity, frame.index(), model);
                None
            }
            HandState::Retracting => {
                if velocity <= self.thresholds.v_low {
                    let event = self.emit(frame.index());
                    self.transition(HandState::Retracted, frame.index());
                    event
                } else {
                    None
                }
            }
        }
    }

    /// Back to guard with no history, as for a new session
    pub fn reset(&mut self) {
        self.state = HandState::Retracted;
        self.wrist.clear();
        self.cycle = None;
    }

    fn begin_cycle(
        &mut self,
        arm: &ArmPose,
        torso: Option<&Torso>,
        step: f32,
        frame: u64,
        velocity: f32,
    ) {
        let onset = self
            .wrist
            .previous()
            .map(|s| s.position)
            .unwrap_or(arm.wrist);
        self.cycle = Some(Cycle {
            onset,
            path: step,
            peak: extract_features(arm, &onset, torso),
            technique: None,
        });
        debug!(side = %self.side, frame, velocity, "extension onset");
        self.transition(HandState::Extending, frame);
    }

    fn extend(
        &mut self,
        arm: &ArmPose,
        torso: Option<&Torso>,
        step: f32,
        velocity: f32,
        frame: u64,
        model: &dyn TechniqueModel,
    ) {
        let Some(cycle) = self.cycle.as_mut() else {
            self.transition(HandState::Retracted, frame);
            return;
        };

        if velocity >= self.thresholds.v_high {
            cycle.path += step;
            cycle.observe(arm, torso);
            return;
        }

        if cycle.path >= self.thresholds.min_extension_distance {
            let technique = model.classify(self.side, &cycle.peak, self.lead);
            cycle.technique = Some(technique);
            debug!(side = %self.side, frame, path = cycle.path, %technique, "extension confirmed");
            self.transition(HandState::Retracting, frame);
        } else {
            debug!(side = %self.side, frame, path = cycle.path, "extension too short, discarded");
            self.cycle = None;
            self.transition(HandState::Retracted, frame);
        }
    }

    fn emit(&mut self, frame: u64) -> Option<StrikeEvent> {
        let technique = self.cycle.take()?.technique?;
        let event = StrikeEvent {
            side: self.side,
            technique,
            frame,
        };
        info!(side = %self.side, frame, %technique, "strike");
        Some(event)
    }

    /// Tracked joints dropped out: abort any cycle without emitting
    fn lose_track(&mut self, frame: u64) {
        if self.state != HandState::Retracted {
            debug!(side = %self.side, frame, state = self.state.name(), "hand lost, cycle aborted");
        }
        self.cycle = None;
        self.wrist.clear();
        self.transition(HandState::Retracted, frame);
    }

    fn transition(&mut self, next: HandState, frame: u64) {
        if self.state != next {
            debug!(side = %self.side, frame, from = self.state.name(), to = next.name(), "hand state");
            self.state = next;
        }
    }
}
