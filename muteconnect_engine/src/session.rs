//! Per-session state for the video pipeline.

use crate::classifier;
use crate::debounce::Debouncer;
use muteconnect_core::{GestureCategory, LandmarkSet};

/// Detection state for one capture session, owned by the caller of the
/// frame loop and torn down with it. Create a fresh session (or call
/// [`GestureSession::reset`]) when a new capture stream starts.
#[derive(Debug, Default)]
pub struct GestureSession {
    debouncer: Debouncer,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame's hands through classification and debouncing.
    ///
    /// Returns a category only on a genuine transition; unchanged poses and
    /// frames without a recognized hand produce no event.
    pub fn process_frame(&mut self, hands: &[LandmarkSet]) -> Option<GestureCategory> {
        self.debouncer.observe(classifier::classify_hands(hands))
    }

    pub fn reset(&mut self) {
        self.debouncer.reset();
    }
}
