//! Background worker owning the video half of the pipeline.
//!
//! One thread reads landmark frames and runs classify → debounce → resolve
//! synchronously, frame by frame, so output ordering follows detection
//! ordering and a slow sink simply backpressures the loop. The debounce
//! state lives only on this thread; the speech path shares nothing with it
//! except the resolver.

use chrono::prelude::Local;
use muteconnect_core::{FrameSource, Sign};
use muteconnect_engine::{GestureSession, SignResolver};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// How a gesture session ended, reported over the worker channel
#[derive(Debug, PartialEq)]
pub enum SessionEnd {
    /// The frame source reached end of stream
    EndOfStream,
    /// The stop flag was set
    Cancelled,
    /// The frame source or the shared resolver broke
    Failed(String),
}

/// Spawn the frame loop on its own thread. The returned receiver yields
/// exactly one [`SessionEnd`] when the session is over; dropping the
/// session releases the frame source with it.
pub fn spawn_gesture_session(
    source: Box<dyn FrameSource + Send>,
    resolver: Arc<Mutex<SignResolver>>,
    stop: Arc<AtomicBool>,
) -> (Receiver<SessionEnd>, JoinHandle<()>) {
    let (tx, rx) = channel();
    let handle = thread::spawn(move || run_frames(source, resolver, stop, tx));
    (rx, handle)
}

fn run_frames(
    mut source: Box<dyn FrameSource + Send>,
    resolver: Arc<Mutex<SignResolver>>,
    stop: Arc<AtomicBool>,
    done: Sender<SessionEnd>,
) {
    let mut session = GestureSession::new();
    let end = loop {
        if stop.load(Ordering::SeqCst) {
            break SessionEnd::Cancelled;
        }

        let hands = match source.next_frame() {
            Ok(Some(hands)) => hands,
            Ok(None) => break SessionEnd::EndOfStream,
            Err(e) => break SessionEnd::Failed(e.to_string()),
        };

        let category = match session.process_frame(&hands) {
            Some(category) => category,
            None => continue,
        };

        let sign = Sign::from(category);
        println!("{} {:?} => {:?}", Local::now().format("%+"), category, sign);
        match resolver.lock() {
            Ok(mut resolver) => {
                // output failures must not kill the frame loop
                if let Err(e) = resolver.resolve(sign) {
                    eprintln!("[ERR] Failed to dispatch {:?}: {}", sign, e);
                }
            }
            Err(_) => break SessionEnd::Failed("output resolver mutex poisoned".to_owned()),
        }
    };

    // the main thread may already be gone
    let _ = done.send(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ConsoleSink;
    use muteconnect_core::LandmarkSet;
    use muteconnect_output_speech::SilentSpeaker;
    use std::error::Error;
    use std::path::PathBuf;

    struct EmptySource;

    impl FrameSource for EmptySource {
        fn next_frame(&mut self) -> Result<Option<Vec<LandmarkSet>>, Box<dyn Error>> {
            Ok(None)
        }
    }

    fn test_resolver() -> Arc<Mutex<SignResolver>> {
        Arc::new(Mutex::new(SignResolver::new(
            Box::new(ConsoleSink::new(PathBuf::from("images"))),
            Box::new(SilentSpeaker),
        )))
    }

    #[test]
    fn test_end_of_stream_is_reported() {
        let stop = Arc::new(AtomicBool::new(false));
        let (done, handle) =
            spawn_gesture_session(Box::new(EmptySource), test_resolver(), stop);
        assert_eq!(done.recv().unwrap(), SessionEnd::EndOfStream);
        handle.join().unwrap();
    }

    #[test]
    fn test_stop_flag_cancels_before_the_next_frame() {
        let stop = Arc::new(AtomicBool::new(true));
        let (done, handle) =
            spawn_gesture_session(Box::new(EmptySource), test_resolver(), stop);
        assert_eq!(done.recv().unwrap(), SessionEnd::Cancelled);
        handle.join().unwrap();
    }
}
