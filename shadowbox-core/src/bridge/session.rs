//! Session state - the engine instance driven from JavaScript
//!
//! Exposes configuration, stats and reset. Values cross the boundary as
//! plain JS objects via serde-wasm-bindgen.

use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::engine::StrikeEngine;
use crate::physics::HandState;
use crate::pose::Side;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static ENGINE: RefCell<StrikeEngine> = RefCell::new(StrikeEngine::default());
}

/// Per-hand values for the debug overlay
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HandDebug {
    state: HandState,
    velocity: Option<f32>,
}

#[derive(Serialize)]
struct HandsDebug {
    left: HandDebug,
    right: HandDebug,
}

pub(crate) fn with_engine<R>(f: impl FnOnce(&mut StrikeEngine) -> R) -> R {
    ENGINE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Replace the engine with one built from a (partial) config object.
/// Starts a new session.
#[wasm_bindgen]
pub fn configure_engine(config: JsValue) -> Result<(), JsValue> {
    let config: EngineConfig = if config.is_undefined() || config.is_null() {
        EngineConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let engine = StrikeEngine::new(config)?;
    with_engine(|current| *current = engine);
    web_sys::console::log_1(&"✅ Strike engine configured".into());
    Ok(())
}

/// Current session totals
#[wasm_bindgen]
pub fn get_session_stats() -> Result<JsValue, JsValue> {
    let stats = with_engine(|engine| engine.snapshot());
    Ok(serde_wasm_bindgen::to_value(&stats)?)
}

/// Hand states and wrist velocities
#[wasm_bindgen]
pub fn get_hand_debug() -> Result<JsValue, JsValue> {
    let hands = with_engine(|engine| {
        let hand = |side| HandDebug {
            state: engine.hand_state(side),
            velocity: engine.hand_velocity(side),
        };
        HandsDebug {
            left: hand(Side::Left),
            right: hand(Side::Right),
        }
    });
    Ok(serde_wasm_bindgen::to_value(&hands)?)
}

/// Zero all counters and hand state
#[wasm_bindgen]
pub fn reset_session() {
    with_engine(|engine| engine.reset());
}
