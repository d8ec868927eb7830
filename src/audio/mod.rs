//! Audio output module.
//!
//! Synthesized clips leave the program here, as numbered MP3 files in the
//! output directory.

mod writer;

pub use writer::Writer;
