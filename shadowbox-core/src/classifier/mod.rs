//! Classifier module - strike detection and technique labelling
//!
//! `detection` decides when a strike happened, `model` decides what it was.

mod detection;
mod features;
mod model;

pub use detection::StrikeClassifier;
pub use features::{extract_features, ArmPose, StrikeFeatures, Torso};
pub use model::{GeometricModel, SideOnlyModel, StrikeEvent, Technique, TechniqueModel};
