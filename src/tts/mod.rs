//! Speech synthesis module backed by the ElevenLabs API.

mod client;

pub use client::{RemoteVoice, Synthesizer, TtsError};
