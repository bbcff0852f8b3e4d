//! Gesture classification, debouncing, keyword matching, and sign
//! resolution.
//!
//! The video path feeds landmark frames into a [`GestureSession`] and
//! forwards every emitted category to a [`SignResolver`]. The speech path
//! runs transcripts through [`match_keyword`] and forwards matches to the
//! same resolver. The resolver is the single convergence point of the two
//! paths.

#[macro_use]
extern crate lazy_static;

mod classifier;
mod debounce;
mod keyword;
mod resolver;
mod session;

pub use classifier::classify;
pub use classifier::classify_hands;
pub use classifier::RULES;
pub use debounce::Debouncer;
pub use keyword::match_keyword;
pub use keyword::match_transcript;
pub use keyword::KEYWORDS;
pub use resolver::SignResolver;
pub use session::GestureSession;
