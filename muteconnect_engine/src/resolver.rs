//! Sign resolution: the single convergence point of the gesture and the
//! speech path.

use muteconnect_core::{OutputSink, Sign, Speaker};
use std::error::Error;

/// Resolves signs to their output actions.
///
/// Every resolved sign produces exactly one display dispatch followed by
/// exactly one speech dispatch. Both calls block until the sink and the
/// speaker are done, so output ordering matches detection ordering.
pub struct SignResolver {
    sink: Box<dyn OutputSink + Send>,
    speaker: Box<dyn Speaker + Send>,
}

impl SignResolver {
    pub fn new(sink: Box<dyn OutputSink + Send>, speaker: Box<dyn Speaker + Send>) -> Self {
        Self { sink, speaker }
    }

    /// Dispatch a gesture-detected sign: show it and speak its label
    pub fn resolve(&mut self, sign: Sign) -> Result<(), Box<dyn Error>> {
        self.sink.display(sign)?;
        self.speaker.speak(sign.label())?;
        Ok(())
    }

    /// Dispatch a keyword-matched sign: show it and speak which keyword was
    /// recognized
    pub fn resolve_keyword(&mut self, keyword: &str, sign: Sign) -> Result<(), Box<dyn Error>> {
        self.sink.display(sign)?;
        self.speaker.speak(&format!("Detected sign for {}", keyword))?;
        Ok(())
    }

    /// Speak a status line (listening prompts, no-match notices) without
    /// changing the display
    pub fn announce(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.speaker.speak(text)
    }
}
