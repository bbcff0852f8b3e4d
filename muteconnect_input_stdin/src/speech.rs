use muteconnect_core::{ListenOutcome, SpeechInput};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// One line read from stdin; `None` means stdin has closed
type ReadLine = io::Result<Option<String>>;

/// Speech input that reads a typed transcript from stdin.
///
/// Stands in for a microphone: one line is one utterance. The listen
/// timeout and phrase limit together bound how long one prompt waits for a
/// line; for typed input there is no meaningful split between the two, so
/// their sum is the overall ceiling.
///
/// Only one instance should read from stdin at a time.
pub struct StdinSpeechInput {
    lines: Receiver<ReadLine>,
}

impl StdinSpeechInput {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        // stdin has no non-blocking read, so a dedicated thread feeds the
        // channel and listen() applies the timeout on the receiving end
        thread::spawn(move || {
            let stdin = io::stdin();
            loop {
                let mut line = String::new();
                let result = match stdin.lock().read_line(&mut line) {
                    Ok(0) => Ok(None),
                    Ok(_) => Ok(Some(line.trim().to_owned())),
                    Err(e) => Err(e),
                };
                let done = match &result {
                    Ok(Some(_)) => false,
                    _ => true,
                };
                if tx.send(result).is_err() || done {
                    break;
                }
            }
        });
        Self { lines: rx }
    }
}

impl Default for StdinSpeechInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechInput for StdinSpeechInput {
    fn listen(&mut self, timeout: Duration, phrase_limit: Duration) -> ListenOutcome {
        print!("Say> ");
        if let Err(e) = io::stdout().flush() {
            return ListenOutcome::ServiceFailure(e.to_string());
        }

        match self.lines.recv_timeout(timeout + phrase_limit) {
            Ok(Ok(Some(transcript))) => {
                if transcript.is_empty() {
                    ListenOutcome::Unintelligible
                } else {
                    ListenOutcome::Transcript(transcript)
                }
            }
            Ok(Ok(None)) => ListenOutcome::ServiceFailure("speech input closed".to_owned()),
            Ok(Err(e)) => ListenOutcome::ServiceFailure(e.to_string()),
            // nothing was said before the ceiling; not an error
            Err(RecvTimeoutError::Timeout) => ListenOutcome::Unintelligible,
            Err(RecvTimeoutError::Disconnected) => {
                ListenOutcome::ServiceFailure("speech input thread stopped".to_owned())
            }
        }
    }
}
