//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{no_detection, update_landmarks};

pub use session::{configure_engine, get_hand_debug, get_session_stats, reset_session};
