//! ElevenLabs HTTP client for speech synthesis and voice listing.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;

/// Errors surfaced by the synthesis backend.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Connection, timeout, or protocol failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned {status}: {message}")]
    Api { status: reqwest::StatusCode, message: String },

    /// The API answered 200 with no audio payload.
    #[error("API returned an empty audio body")]
    EmptyAudio,
}

/// Voice settings forwarded with every synthesis request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// A voice as reported by the live catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteVoice {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<RemoteVoice>,
}

/// Speech synthesizer backed by the ElevenLabs HTTP API.
pub struct Synthesizer {
    client: reqwest::Client,   // Shared connection pool
    base_url: String,          // API base, no trailing slash
    api_key: String,           // Static key, sent as xi-api-key
    model_id: String,          // Synthesis model
    voice_settings: VoiceSettings,
}

impl Synthesizer {
    /// Create a new synthesizer client.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("Using ElevenLabs API at {}", config.api_url);

        // Synthesis of a full-length fragment can take a while on busy
        // models; the timeout covers the whole response body.
        let client = reqwest::Client::builder().timeout(Duration::from_secs(120)).build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model_id: config.model_id.clone(),
            voice_settings: VoiceSettings { stability: config.stability, similarity_boost: config.similarity },
        })
    }

    /// Synthesize a single fragment, returning MP3 bytes.
    ///
    /// # Arguments
    /// * `text` - The fragment to synthesize
    /// * `voice_id` - Vendor voice identifier
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success API status, or an
    /// empty audio body. No retries are attempted.
    pub async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, TtsError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        debug!("Synthesizing fragment: \"{}\"", text);

        let url = format!("{}/v1/text-to-speech/{}", self.base_url, urlencoding::encode(voice_id));
        let body = SynthesisRequest { text, model_id: &self.model_id, voice_settings: self.voice_settings };

        let response = self.client.post(&url).header("xi-api-key", &self.api_key).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(TtsError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(TtsError::EmptyAudio);
        }

        debug!("Received {} bytes of audio", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Fetch the account's voice catalog (name to identifier mapping).
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success API status.
    pub async fn list_voices(&self) -> Result<Vec<RemoteVoice>, TtsError> {
        let url = format!("{}/v1/voices", self.base_url);

        let response = self.client.get(&url).header("xi-api-key", &self.api_key).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(TtsError::Api { status, message });
        }

        let catalog: VoicesResponse = response.json().await?;
        Ok(catalog.voices)
    }
}
