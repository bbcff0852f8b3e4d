//! Console-backed input adapters.
//!
//! Stands in for the camera and the microphone: landmark frames are read as
//! JSON lines (from stdin or a replay file), and transcripts are typed on
//! stdin instead of spoken.

mod frames;
mod speech;

pub use frames::JsonFrameSource;
pub use speech::StdinSpeechInput;
