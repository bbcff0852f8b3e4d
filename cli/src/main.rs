use chrono::prelude::Local;
use clap::{App, Arg};
use muteconnect_core::{ListenOutcome, SpeechInput};
use muteconnect_engine::{match_keyword, SignResolver};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

mod config;
mod sink;
mod worker;

use config::Config;
use worker::SessionEnd;

pub fn main() {
    let matches = App::new("muteconnect")
        .about("Bridges hand gestures and spoken keywords to a shared sign vocabulary")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Path to the TOML config file"),
        )
        .arg(
            Arg::with_name("gesture-only")
                .short("g")
                .long("gesture-only")
                .help("Run only the gesture path"),
        )
        .arg(
            Arg::with_name("speech-only")
                .short("s")
                .long("speech-only")
                .help("Run only the speech path"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Override config to disable spoken output"),
        )
        .get_matches();

    println!("Starting muteconnect...");
    let config = load_config(matches.value_of("config"));

    let resolver = Arc::new(Mutex::new(SignResolver::new(
        config.get_output_sink(),
        config.get_speaker(matches.is_present("quiet")),
    )));

    let run_gestures = !matches.is_present("speech-only");
    let mut run_speech = !matches.is_present("gesture-only");
    if run_gestures && run_speech && config.reads_frames_from_stdin() {
        // both paths cannot read stdin at once
        println!(
            "[INFO] Frame source is stdin; disabling the speech prompt \
             (use a Replay frame source to run both paths)"
        );
        run_speech = false;
    }

    let stop = Arc::new(AtomicBool::new(false));
    let gesture_session = if run_gestures {
        Some(worker::spawn_gesture_session(
            config.get_frame_source(),
            Arc::clone(&resolver),
            Arc::clone(&stop),
        ))
    } else {
        None
    };

    if run_speech {
        let mut input = config.get_speech_input();
        while speech_round(input.as_mut(), &resolver, &config) {}
        // speech is done; wind down the video path as well
        stop.store(true, Ordering::SeqCst);
    }

    if let Some((done, handle)) = gesture_session {
        match done.recv() {
            Ok(SessionEnd::EndOfStream) => println!("[INFO] Frame stream ended"),
            Ok(SessionEnd::Cancelled) => println!("[INFO] Gesture session cancelled"),
            Ok(SessionEnd::Failed(e)) => eprintln!("[ERR] Gesture session failed: {}", e),
            Err(_) => eprintln!("[ERR] Gesture worker exited without reporting"),
        }
        if handle.join().is_err() {
            eprintln!("[ERR] Gesture worker panicked");
        }
    }
}

/// Locate and parse the config file. An explicitly passed path must exist;
/// otherwise a missing file just means defaults.
fn load_config(override_path: Option<&str>) -> Config {
    let path = match override_path {
        Some(p) => Some(PathBuf::from(p)),
        None => dirs::config_dir().map(|d| d.join("muteconnect").join("config.toml")),
    };

    match path {
        Some(ref p) if p.is_file() => {
            println!("[INFO] Loading config from {:?}", p);
            let raw = match std::fs::read_to_string(p) {
                Ok(s) => s,
                Err(e) => panic!("unable to read config file {:?}: {:?}", p, e),
            };
            match config::load(&raw) {
                Ok(config) => config,
                Err(e) => panic!("invalid config file {:?}: {}", p, e),
            }
        }
        Some(p) if override_path.is_some() => panic!("config file {:?} does not exist", p),
        _ => {
            println!("[INFO] No config file found, using defaults");
            config::load("").expect("default config must parse")
        }
    }
}

/// Run one prompt → listen → match → dispatch round.
///
/// Returns false when the speech input is gone and the loop should stop.
/// An unintelligible utterance and a service failure read the same to the
/// user but are logged apart.
fn speech_round(
    input: &mut dyn SpeechInput,
    resolver: &Arc<Mutex<SignResolver>>,
    config: &Config,
) -> bool {
    announce(resolver, "Please speak now.");
    println!("[INFO] Listening...");

    match input.listen(config.listen_timeout(), config.phrase_limit()) {
        ListenOutcome::Transcript(transcript) => {
            println!("{} heard {:?}", Local::now().format("%+"), transcript);
            match match_keyword(&transcript) {
                Some((keyword, sign)) => match resolver.lock() {
                    Ok(mut resolver) => {
                        if let Err(e) = resolver.resolve_keyword(keyword, sign) {
                            eprintln!("[ERR] Failed to dispatch {:?}: {}", sign, e);
                        }
                    }
                    Err(_) => return false,
                },
                None => {
                    println!("[INFO] No matching sign found in {:?}", transcript);
                    announce(resolver, "No matching sign found.");
                }
            }
            true
        }
        ListenOutcome::Unintelligible => {
            eprintln!("[ERR] Could not understand audio");
            announce(resolver, "Could not understand. Please try again.");
            true
        }
        ListenOutcome::ServiceFailure(e) => {
            eprintln!("[ERR] Speech service failure: {}", e);
            announce(resolver, "Could not understand. Please try again.");
            false
        }
    }
}

fn announce(resolver: &Arc<Mutex<SignResolver>>, text: &str) {
    if let Ok(mut resolver) = resolver.lock() {
        if let Err(e) = resolver.announce(text) {
            eprintln!("[ERR] Failed to speak {:?}: {}", text, e);
        }
    }
}
