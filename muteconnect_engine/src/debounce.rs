//! Temporal debouncing of the classifier's per-frame output.

use muteconnect_core::GestureCategory;

/// Suppresses re-emission of an unchanged category across consecutive
/// frames. Holds the most recently emitted category; only a genuine change
/// to a different non-none category produces a new event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Debouncer {
    held: Option<GestureCategory>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's classification and get back the category to emit,
    /// if any.
    ///
    /// A none observation leaves the held category untouched, so a single
    /// missed frame does not cause the same sign to be re-emitted on the
    /// next good frame.
    pub fn observe(&mut self, category: Option<GestureCategory>) -> Option<GestureCategory> {
        match category {
            Some(c) if self.held != Some(c) => {
                self.held = Some(c);
                Some(c)
            }
            _ => None,
        }
    }

    /// Forget the held category. Called when a new detection session starts.
    pub fn reset(&mut self) {
        self.held = None;
    }

    pub fn held(&self) -> Option<GestureCategory> {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muteconnect_core::GestureCategory::{Fist, OpenPalm};

    #[test]
    fn test_first_observation_emits() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.observe(Some(Fist)), Some(Fist));
    }

    #[test]
    fn test_repeated_category_emits_once() {
        let mut debouncer = Debouncer::new();
        let emitted: Vec<_> = (0..5).filter_map(|_| debouncer.observe(Some(Fist))).collect();
        assert_eq!(emitted, vec![Fist]);
    }

    #[test]
    fn test_transition_emits_both_in_order() {
        let mut debouncer = Debouncer::new();
        let frames = [Some(Fist), Some(Fist), Some(OpenPalm)];
        let emitted: Vec<_> = frames.iter().filter_map(|c| debouncer.observe(*c)).collect();
        assert_eq!(emitted, vec![Fist, OpenPalm]);
    }

    #[test]
    fn test_none_frame_does_not_rearm() {
        // A, none, A must emit exactly once: the held category survives
        // missed frames.
        let mut debouncer = Debouncer::new();
        let frames = [Some(Fist), None, Some(Fist)];
        let emitted: Vec<_> = frames.iter().filter_map(|c| debouncer.observe(*c)).collect();
        assert_eq!(emitted, vec![Fist]);
    }

    #[test]
    fn test_none_frames_emit_nothing() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.observe(None), None);
        assert_eq!(debouncer.held(), None);
    }

    #[test]
    fn test_reset_rearms_emission() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.observe(Some(Fist)), Some(Fist));
        debouncer.reset();
        assert_eq!(debouncer.observe(Some(Fist)), Some(Fist));
    }
}
