//! Strike engine - one classification + metrics cycle per frame
//!
//! Data flow for each accepted frame:
//! 1. **Validate**: malformed frames are rejected whole
//! 2. **Classify**: left hand, then right hand, each on its own history
//! 3. **Aggregate**: strikes, guard and footwork folded into `SessionStats`
//!
//! Everything runs to completion inside `process_frame`; there is no I/O
//! and nothing blocks.

use tracing::{info, warn};

use crate::classifier::{GeometricModel, StrikeClassifier, StrikeEvent, TechniqueModel};
use crate::config::EngineConfig;
use crate::error::{ConfigError, FrameError};
use crate::metrics::{MetricsAggregator, SessionStats};
use crate::physics::HandState;
use crate::pose::{LandmarkFrame, Side};

pub struct StrikeEngine {
    config: EngineConfig,
    model: Box<dyn TechniqueModel>,
    left: StrikeClassifier,
    right: StrikeClassifier,
    metrics: MetricsAggregator,
    last_frame: Option<u64>,
}

impl StrikeEngine {
    /// Engine with the geometric technique model
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let model = GeometricModel::new(config.technique.clone());
        Self::with_model(config, Box::new(model))
    }

    /// Engine with a caller-supplied technique model
    pub fn with_model(
        config: EngineConfig,
        model: Box<dyn TechniqueModel>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, model))
    }

    fn build(config: EngineConfig, model: Box<dyn TechniqueModel>) -> Self {
        Self {
            left: StrikeClassifier::new(Side::Left, &config),
            right: StrikeClassifier::new(Side::Right, &config),
            metrics: MetricsAggregator::new(&config),
            model,
            config,
            last_frame: None,
        }
    }

    /// Run one frame. Returns the strikes completed on it (left first).
    ///
    /// A rejected frame leaves all state untouched apart from the
    /// rejected-frame counter.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> Result<Vec<StrikeEvent>, FrameError> {
        if let Err(err) = self.check(frame) {
            warn!(frame = frame.index(), error = %err, "frame rejected");
            self.metrics.record_rejected();
            return Err(err);
        }
        self.last_frame = Some(frame.index());

        let events: Vec<StrikeEvent> = [&mut self.left, &mut self.right]
            .into_iter()
            .filter_map(|hand| hand.process(frame, self.model.as_ref()))
            .collect();

        self.metrics.update_frame(frame, &events);
        Ok(events)
    }

    fn check(&self, frame: &LandmarkFrame) -> Result<(), FrameError> {
        if let Some(last) = self.last_frame {
            if frame.index() <= last {
                return Err(FrameError::StaleFrame {
                    index: frame.index(),
                    last,
                });
            }
        }
        frame.validate()
    }

    /// Copy of the current totals
    pub fn snapshot(&self) -> SessionStats {
        self.metrics.snapshot()
    }

    /// Back to the state of a freshly built engine
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
        self.metrics.reset();
        self.last_frame = None;
        info!("session reset");
    }

    pub fn hand_state(&self, side: Side) -> HandState {
        match side {
            Side::Left => self.left.state(),
            Side::Right => self.right.state(),
        }
    }

    /// Latest wrist velocity for one hand
    pub fn hand_velocity(&self, side: Side) -> Option<f32> {
        match side {
            Side::Left => self.left.velocity(),
            Side::Right => self.right.velocity(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for StrikeEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        let model = GeometricModel::new(config.technique.clone());
        Self::build(config, Box::new(model))
    }
}
