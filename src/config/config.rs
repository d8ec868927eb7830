//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::voices;

/// Clipper application configuration.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "tts-clipper")]
#[command(author, version, about = "Split text into speech-friendly fragments and synthesize each as an audio clip", long_about = None)]
pub struct AppConfig {
    /// Text to synthesize (reads --input or stdin when omitted)
    pub text: Option<String>,

    /// List available voices and exit (live catalog when an API key is set, builtin otherwise)
    #[arg(long)]
    pub list_voices: bool,

    /// Show detailed information about a builtin voice and exit
    #[arg(long)]
    pub voice_info: Option<String>,

    /// Read input text from a file instead of the command line
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Directory where audio clips are written
    #[arg(long, short = 'o', default_value_os_t = default_output_dir())]
    pub output_dir: PathBuf,

    /// ElevenLabs API key
    #[arg(long, short = 'k', env = "ELEVEN_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// ElevenLabs API base URL
    #[arg(long, env = "ELEVEN_API_URL", default_value = "https://api.elevenlabs.io")]
    pub api_url: String,

    /// Voice name, resolved through the builtin catalog (e.g. Rachel, Josh, Bella)
    #[arg(long, default_value = "Rachel")]
    pub voice: String,

    /// Explicit voice id (bypasses the catalog, works for cloned voices)
    #[arg(long)]
    pub voice_id: Option<String>,

    /// Synthesis model
    #[arg(long, default_value = "eleven_multilingual_v2")]
    pub model_id: String,

    /// Maximum fragment length in characters (soft bound, see README)
    #[arg(long, default_value = "250")]
    pub max_chars: usize,

    /// Fixed delay between synthesis requests in milliseconds
    #[arg(long, default_value = "1000")]
    pub request_delay_ms: u64,

    /// Voice stability (0.0-1.0). Lower values give more variable delivery
    #[arg(long, default_value = "0.5", value_parser = parse_unit_interval)]
    pub stability: f32,

    /// Voice similarity boost (0.0-1.0). Higher values track the original voice more closely
    #[arg(long, default_value = "0.75", value_parser = parse_unit_interval)]
    pub similarity: f32,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    pub fn from_args() -> Self {
        let config = Self::parse();

        // Voice info is answered from the builtin catalog; --list-voices may
        // need the network and is handled in main.
        if let Some(ref voice_name) = config.voice_info {
            match voices::print_voice_info(voice_name) {
                Ok(_) => std::process::exit(0),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        config
    }

    /// Resolve the voice identifier to send to the API.
    ///
    /// An explicit `--voice-id` wins; otherwise the voice name is looked up
    /// in the builtin catalog.
    pub fn resolve_voice_id(&self) -> Result<String> {
        if let Some(ref id) = self.voice_id {
            return Ok(id.clone());
        }

        voices::get_voice(&self.voice)
            .map(|v| v.voice_id.to_string())
            .ok_or_else(|| anyhow::anyhow!("Voice '{}' not found. Run with --list-voices to see available voices, or pass --voice-id directly", self.voice))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("API key is required (set ELEVEN_API_KEY or pass --api-key)");
        }

        if self.max_chars == 0 {
            anyhow::bail!("max-chars must be a positive number of characters");
        }

        if let Some(ref input) = self.input
            && !input.exists()
        {
            anyhow::bail!("Input file not found: {}", input.display());
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  API URL: {}", self.api_url);
        if let Some(ref id) = self.voice_id {
            info!("  Voice id: {}", id);
        } else {
            info!("  Voice: {}", self.voice);
        }
        info!("  Model: {}", self.model_id);
        info!("  Max fragment length: {} chars", self.max_chars);
        info!("  Request delay: {}ms", self.request_delay_ms);
        info!("  Stability: {}", self.stability);
        info!("  Similarity boost: {}", self.similarity);
        info!("  Output directory: {}", self.output_dir.display());
        if let Some(ref input) = self.input {
            info!("  Input file: {}", input.display());
        }
    }
}

/// Get the default output directory (~/Downloads/tts-clips when resolvable).
fn default_output_dir() -> PathBuf {
    if let Some(download_dir) = dirs::download_dir() {
        download_dir.join("tts-clips")
    } else {
        PathBuf::from("tts-clips")
    }
}

/// Parse and validate a value in the 0.0-1.0 range.
fn parse_unit_interval(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{}' is not a valid float", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("value must be between 0.0 and 1.0, got {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["tts-clipper"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_resolve_voice_id_from_catalog() {
        let config = parse(&["--api-key", "k", "--voice", "Rachel"]);
        assert_eq!(config.resolve_voice_id().unwrap(), "21m00Tcm4TlvDq8ikWAM");
    }

    #[test]
    fn test_explicit_voice_id_wins() {
        let config = parse(&["--api-key", "k", "--voice", "Rachel", "--voice-id", "custom123"]);
        assert_eq!(config.resolve_voice_id().unwrap(), "custom123");
    }

    #[test]
    fn test_unknown_voice_is_an_error() {
        let config = parse(&["--api-key", "k", "--voice", "Nobody"]);
        assert!(config.resolve_voice_id().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_max_chars() {
        let config = parse(&["--api-key", "k", "--max-chars", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_api_key() {
        let mut config = parse(&[]);
        config.api_key.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stability_range_enforced_at_parse() {
        let result = AppConfig::try_parse_from(["tts-clipper", "--stability", "1.5"]);
        assert!(result.is_err());
    }
}
