//! Text fragmentation for speech synthesis.
//!
//! Splits arbitrary input text into fragments sized for single TTS requests.

mod splitter;

pub use splitter::split;
