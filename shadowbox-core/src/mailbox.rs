//! Single-slot frame hand-off between a capture stage and the engine
//!
//! Latest frame wins: posting over an unconsumed frame discards the stale
//! one, so the engine always works on the newest pose and the queue can
//! never grow. Frames move in and out whole.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};
use tracing::trace;

use crate::pose::LandmarkFrame;

#[derive(Default)]
struct Slot {
    frame: Option<LandmarkFrame>,
    dropped: u64,
    closed: bool,
}

#[derive(Default)]
pub struct FrameMailbox {
    slot: Mutex<Slot>,
    ready: Condvar,
}

impl FrameMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `frame`, replacing any frame not yet taken.
    ///
    /// Returns true if a stale frame was dropped. Ignored once closed.
    pub fn post(&self, frame: LandmarkFrame) -> bool {
        let mut slot = self.slot.lock();
        if slot.closed {
            return false;
        }
        let index = frame.index();
        let stale = slot.frame.replace(frame);
        if let Some(old) = &stale {
            slot.dropped += 1;
            trace!(dropped = old.index(), newest = index, "stale frame replaced");
        }
        drop(slot);
        self.ready.notify_one();
        stale.is_some()
    }

    /// Take the pending frame without waiting
    pub fn try_take(&self) -> Option<LandmarkFrame> {
        self.slot.lock().frame.take()
    }

    /// Wait up to `timeout` for a frame. None on timeout or close.
    pub fn take_timeout(&self, timeout: Duration) -> Option<LandmarkFrame> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.slot.lock();
        loop {
            if let Some(frame) = slot.frame.take() {
                return Some(frame);
            }
            if slot.closed {
                return None;
            }
            if self.ready.wait_until(&mut slot, deadline).timed_out() {
                return slot.frame.take();
            }
        }
    }

    /// Stop accepting frames and wake any waiting consumer
    pub fn close(&self) {
        self.slot.lock().closed = true;
        self.ready.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.slot.lock().closed
    }

    /// Frames discarded because a newer one arrived first
    pub fn dropped(&self) -> u64 {
        self.slot.lock().dropped
    }
}
