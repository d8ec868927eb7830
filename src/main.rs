//! tts-clipper - Split text into speech-friendly fragments and synthesize
//! each one as a downloadable audio clip.
//!
//! The pipeline is strictly sequential: fragments are synthesized one at a
//! time with a fixed pause between API calls to stay under the vendor's rate
//! limits.

mod audio;
mod config;
mod fragment;
mod tts;

use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use audio::Writer;
use config::AppConfig;
use tts::Synthesizer;

/// Read the input text from the positional argument, the input file, or stdin.
fn read_input_text(config: &AppConfig) -> Result<String> {
    if let Some(ref text) = config.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = config.input {
        return std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()));
    }

    info!("Reading text from stdin (end with Ctrl-D)...");
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
    Ok(text)
}

/// Print the account's live voice catalog, falling back to the builtin list
/// when no API key is configured.
async fn list_voices(config: &AppConfig) -> Result<()> {
    if config.api_key.is_empty() {
        crate::config::voices::print_voices();
        return Ok(());
    }

    let synthesizer = Synthesizer::new(config)?;
    let voices = synthesizer.list_voices().await.context("Failed to fetch voice catalog")?;

    println!("{:<24} {:<24} CATEGORY", "VOICE", "VOICE ID");
    println!("{}", "─".repeat(64));
    for voice in &voices {
        println!("{:<24} {:<24} {}", voice.name, voice.voice_id, voice.category);
    }
    println!("\n{} voice(s) available", voices.len());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let config = AppConfig::from_args();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if config.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("🎙️  tts-clipper v{}", env!("CARGO_PKG_VERSION"));

    if config.list_voices {
        return list_voices(&config).await;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }

    config.log_config();

    let voice_id = config.resolve_voice_id()?;
    let text = read_input_text(&config)?;

    let fragments = fragment::split(&text, config.max_chars);
    if fragments.is_empty() {
        warn!("No fragments to synthesize");
        return Ok(());
    }
    info!("Split input into {} fragment(s)", fragments.len());

    let synthesizer = Synthesizer::new(&config)?;
    let writer = Writer::new(&config.output_dir, fragments.len())?;

    // Ctrl+C stops the batch between fragments
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("🛑 Received Ctrl+C, stopping...");
                shutdown.store(true, Ordering::SeqCst);
            }
        });
    }

    let total = fragments.len();
    let mut written = 0usize;
    let mut failed = 0usize;

    for (i, fragment) in fragments.iter().enumerate() {
        // Fixed pause between remote calls to respect rate limits
        if i > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(config.request_delay_ms)).await;
        }

        if shutdown.load(Ordering::SeqCst) {
            warn!("Stopped with {} fragment(s) remaining", total - i);
            break;
        }

        info!("🔊 Synthesizing fragment {}/{} ({} chars)", i + 1, total, fragment.chars().count());

        let clip = match synthesizer.synthesize(fragment, &voice_id).await {
            Ok(clip) => clip,
            Err(e) => {
                error!("❌ Synthesis failed for fragment {}/{}: {}", i + 1, total, e);
                failed += 1;
                continue; // Skip failed fragment
            }
        };

        if clip.is_empty() {
            debug!("Fragment {}/{} produced no audio, skipping", i + 1, total);
            continue;
        }

        let path = writer.save(i + 1, &clip)?;
        info!("💾 Saved {}", path.display());
        written += 1;
    }

    if failed == total {
        anyhow::bail!("all {} synthesis request(s) failed", total);
    }

    if failed > 0 {
        warn!("⚠️  {} of {} fragment(s) failed to synthesize", failed, total);
    }

    info!("✅ Wrote {} clip(s) to {}", written, config.output_dir.display());
    Ok(())
}
