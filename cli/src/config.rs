use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::sink::ConsoleSink;
use muteconnect_core::{FrameSource, OutputSink, Speaker, SpeechInput};
use muteconnect_input_stdin::{JsonFrameSource, StdinSpeechInput};
use muteconnect_output_speech::{CommandSpeaker, SilentSpeaker};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    frame_source: FrameSourceType,
    #[serde(default)]
    speaker: SpeakerType,
    #[serde(default = "default_images_dir")]
    images_dir: PathBuf,
    #[serde(default = "default_listen_timeout")]
    listen_timeout_secs: u64,
    #[serde(default = "default_phrase_limit")]
    phrase_limit_secs: u64,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

// matches the listen bounds of the original assistive setup
fn default_listen_timeout() -> u64 {
    8
}

fn default_phrase_limit() -> u64 {
    8
}

impl Config {
    /// Creates the landmark frame source from the config. Can panic if a
    /// replay file cannot be opened.
    pub fn get_frame_source(&self) -> Box<dyn FrameSource + Send> {
        println!("[INFO] Landmark frames from: {:?}", self.frame_source);
        match &self.frame_source {
            FrameSourceType::Stdin => Box::new(JsonFrameSource::from_stdin()),
            FrameSourceType::Replay { ref path } => {
                match JsonFrameSource::from_file(Path::new(path)) {
                    Ok(source) => Box::new(source),
                    Err(e) => panic!("unable to open replay file {:?}: {:?}", path, e),
                }
            }
        }
    }

    /// Whether the frame source would compete with the speech prompt for
    /// stdin
    pub fn reads_frames_from_stdin(&self) -> bool {
        match self.frame_source {
            FrameSourceType::Stdin => true,
            FrameSourceType::Replay { .. } => false,
        }
    }

    pub fn get_speech_input(&self) -> Box<dyn SpeechInput + Send> {
        Box::new(StdinSpeechInput::new())
    }

    /// Create a speaker from the config.
    /// Accepts an override to ignore the config and stay silent.
    pub fn get_speaker(&self, force_silent: bool) -> Box<dyn Speaker + Send> {
        let speaker = if force_silent {
            println!("[INFO] Overriding config to disable spoken output");
            &SpeakerType::Silent
        } else {
            &self.speaker
        };
        println!("[INFO] Speech output: {:?}", speaker);
        match speaker {
            SpeakerType::Espeak => Box::new(CommandSpeaker::espeak()) as Box<dyn Speaker + Send>,
            SpeakerType::Say => Box::new(CommandSpeaker::say()) as Box<dyn Speaker + Send>,
            SpeakerType::Command { ref program, ref args } => {
                Box::new(CommandSpeaker::new(program, args.clone())) as Box<dyn Speaker + Send>
            }
            SpeakerType::Silent => Box::new(SilentSpeaker) as Box<dyn Speaker + Send>,
        }
    }

    pub fn get_output_sink(&self) -> Box<dyn OutputSink + Send> {
        println!("[INFO] Sign images from: {:?}", self.images_dir);
        Box::new(ConsoleSink::new(self.images_dir.clone()))
    }

    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }

    pub fn phrase_limit(&self) -> Duration {
        Duration::from_secs(self.phrase_limit_secs)
    }
}

pub fn load(raw_str: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(raw_str)
}

#[derive(Debug, Deserialize)]
enum FrameSourceType {
    Stdin,
    Replay { path: String },
}

impl Default for FrameSourceType {
    fn default() -> Self {
        Self::Stdin
    }
}

#[derive(Debug, Deserialize)]
enum SpeakerType {
    Espeak,
    Say,
    Command { program: String, args: Vec<String> },
    Silent,
}

impl Default for SpeakerType {
    fn default() -> Self {
        Self::Silent
    }
}
