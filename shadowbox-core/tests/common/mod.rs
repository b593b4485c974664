//! Synthetic bodies for driving the engine frame by frame
#![allow(dead_code)]

use shadowbox_core::{Joint, LandmarkFrame, LandmarkSample};

pub const CONFIDENT: f32 = 0.9;

/// A fighter standing square to the camera, hands low at chest height.
/// Pixel coordinates, y grows downward.
#[derive(Clone)]
pub struct Body {
    points: Vec<(Joint, f32, f32, f32)>,
}

impl Body {
    pub fn standing() -> Self {
        Self {
            points: vec![
                (Joint::Nose, 280.0, 100.0, CONFIDENT),
                (Joint::LeftEar, 295.0, 90.0, CONFIDENT),
                (Joint::RightEar, 265.0, 90.0, CONFIDENT),
                (Joint::LeftShoulder, 300.0, 200.0, CONFIDENT),
                (Joint::RightShoulder, 260.0, 200.0, CONFIDENT),
                (Joint::LeftElbow, 330.0, 205.0, CONFIDENT),
                (Joint::RightElbow, 230.0, 205.0, CONFIDENT),
                (Joint::LeftWrist, 340.0, 205.0, CONFIDENT),
                (Joint::RightWrist, 220.0, 205.0, CONFIDENT),
                (Joint::LeftHip, 295.0, 400.0, CONFIDENT),
                (Joint::RightHip, 265.0, 400.0, CONFIDENT),
                (Joint::LeftAnkle, 300.0, 600.0, CONFIDENT),
                (Joint::RightAnkle, 260.0, 600.0, CONFIDENT),
            ],
        }
    }

    /// Both wrists tucked beside the face, above the nose
    pub fn guard() -> Self {
        Self::standing()
            .at(Joint::LeftWrist, 292.0, 95.0)
            .at(Joint::RightWrist, 268.0, 95.0)
    }

    pub fn at(mut self, joint: Joint, x: f32, y: f32) -> Self {
        for point in &mut self.points {
            if point.0 == joint {
                point.1 = x;
                point.2 = y;
            }
        }
        self
    }

    pub fn confidence(mut self, joint: Joint, confidence: f32) -> Self {
        for point in &mut self.points {
            if point.0 == joint {
                point.3 = confidence;
            }
        }
        self
    }

    /// Shift the lower body sideways
    pub fn stepped(self, dx: f32) -> Self {
        let mut body = self;
        for point in &mut body.points {
            if matches!(
                point.0,
                Joint::LeftHip | Joint::RightHip | Joint::LeftAnkle | Joint::RightAnkle
            ) {
                point.1 += dx;
            }
        }
        body
    }

    pub fn frame(&self, index: u64) -> LandmarkFrame {
        LandmarkFrame::from_samples(
            index,
            self.points
                .iter()
                .map(|&(joint, x, y, c)| LandmarkSample::new(joint, x, y, 0.0, c)),
        )
    }
}

/// Frames with the given wrist x positions for one hand; everything else still
pub fn wrist_track(joint: Joint, xs: &[f32], y: f32) -> Vec<LandmarkFrame> {
    xs.iter()
        .enumerate()
        .map(|(i, &x)| Body::standing().at(joint, x, y).frame(i as u64))
        .collect()
}
