//! Landmark intake from JavaScript
//!
//! Receives MediaPipe Pose landmarks each video frame, runs one engine
//! cycle and hands back the strikes completed on that frame.

use wasm_bindgen::prelude::*;

use super::session::with_engine;
use crate::classifier::StrikeEvent;
use crate::error::FrameError;
use crate::pose::LandmarkFrame;

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 132 values
/// (33 landmarks × x, y, z, visibility), normalized as MediaPipe emits them.
///
/// `width`/`height` are the video dimensions; coordinates are scaled to
/// pixels before classification. Returns an array of strike events.
#[wasm_bindgen]
pub fn update_landmarks(
    data: &[f32],
    frame_index: u32,
    timestamp_ms: f64,
    width: f32,
    height: f32,
) -> Result<JsValue, JsValue> {
    let frame = LandmarkFrame::from_mediapipe(
        u64::from(frame_index),
        Some(timestamp_ms),
        data,
        width,
        height,
    )
    .map_err(warn_rejected)?;
    run_frame(&frame)
}

/// Called from JavaScript when the pose estimator found nobody
#[wasm_bindgen]
pub fn no_detection(frame_index: u32) -> Result<JsValue, JsValue> {
    run_frame(&LandmarkFrame::empty(u64::from(frame_index)))
}

fn run_frame(frame: &LandmarkFrame) -> Result<JsValue, JsValue> {
    let events: Vec<StrikeEvent> =
        with_engine(|engine| engine.process_frame(frame)).map_err(warn_rejected)?;
    for event in &events {
        web_sys::console::log_1(&format!("🥊 {}", event).into());
    }
    Ok(serde_wasm_bindgen::to_value(&events)?)
}

fn warn_rejected(err: FrameError) -> JsValue {
    web_sys::console::warn_1(&format!("Frame rejected: {}", err).into());
    err.into()
}
