//! Text-to-speech by dispatching an external synthesizer command.

use muteconnect_core::Speaker;
use std::error::Error;
use std::process::Command;

// Speaking rate in words per minute, slowed down for the assistive setting
const SPEAKING_RATE: &str = "150";

/// Speaker that runs an external TTS program once per utterance and waits
/// for it to finish, so speech output blocks the calling pipeline the same
/// way a synthesis engine would.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    /// Speaker backed by an arbitrary command; the text is appended as the
    /// final argument
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_owned(),
            args,
        }
    }

    /// `espeak` with the standard rate for this application
    pub fn espeak() -> Self {
        Self::new("espeak", vec!["-s".to_owned(), SPEAKING_RATE.to_owned()])
    }

    /// macOS `say` with the standard rate for this application
    pub fn say() -> Self {
        Self::new("say", vec!["-r".to_owned(), SPEAKING_RATE.to_owned()])
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .status()?;
        if !status.success() {
            return Err(format!("{} exited with {}", self.program, status).into());
        }
        Ok(())
    }
}

/// Speaker that swallows all utterances, for environments without audio
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _text: &str) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
