use std::{error::Error, time::Duration};

mod landmarks;
mod sign;

pub use landmarks::Landmark;
pub use landmarks::LandmarkSet;
pub use landmarks::HandJoint;
pub use landmarks::LANDMARK_COUNT;
pub use sign::GestureCategory;
pub use sign::Sign;

/// Supplies hand landmarks extracted from a video stream
pub trait FrameSource {
    /// Waits until the next video frame has been processed and returns the
    /// landmark sets of all hands detected in it (possibly none).
    ///
    /// Returns `Ok(None)` when the stream has ended.
    fn next_frame(&mut self) -> Result<Option<Vec<LandmarkSet>>, Box<dyn Error>>;
}

/// Outcome of capturing one speech utterance
#[derive(Debug, Clone, PartialEq)]
pub enum ListenOutcome {
    Transcript(String),
    /// Audio was captured but could not be understood (or nothing was said
    /// before the timeout)
    Unintelligible,
    /// The recognition service or its transport failed
    ServiceFailure(String),
}

/// Captures speech and turns it into text
pub trait SpeechInput {
    /// Captures one utterance and returns its transcript.
    ///
    /// Waiting for speech to start is bounded by `timeout` and a single
    /// utterance by `phrase_limit`; exceeding either is an `Unintelligible`
    /// outcome, not an error.
    fn listen(&mut self, timeout: Duration, phrase_limit: Duration) -> ListenOutcome;
}

/// Renders a resolved sign on the presentation surface
pub trait OutputSink {
    /// Shows the sign's label and, if available, its illustration.
    ///
    /// A missing illustration must degrade to text-only rendering of the
    /// label, not an error.
    fn display(&mut self, sign: Sign) -> Result<(), Box<dyn Error>>;
}

/// Speaks a line of text, blocking until the utterance completes
pub trait Speaker {
    fn speak(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
}
