//! Builtin catalog of ElevenLabs premade voices.
//!
//! Maps voice names to their vendor identifiers so users can say
//! `--voice Rachel` instead of pasting a 20-character id. Only the premade
//! voices are listed; cloned or library voices resolve through the live
//! catalog (`--list-voices` with an API key) or `--voice-id`.

/// Essential metadata for a premade voice.
#[derive(Debug, Clone, Copy)]
pub struct Voice {
    pub voice_id: &'static str,
    pub accent: &'static str,
    pub style: &'static str,
}

/// All premade voices as a compile-time constant slice (sorted by name for binary search).
const VOICES: &[(&str, Voice)] = &[
    ("Adam", Voice { voice_id: "pNInz6obpgDQGcFmaJgB", accent: "american", style: "narration" }),
    ("Antoni", Voice { voice_id: "ErXwobaYiN019PkySvjV", accent: "american", style: "narration" }),
    ("Arnold", Voice { voice_id: "VR6AewLTigWG4xSOukaG", accent: "american", style: "narration" }),
    ("Bella", Voice { voice_id: "EXAVITQu4vr4xnSDxMaL", accent: "american", style: "narration" }),
    ("Callum", Voice { voice_id: "N2lVS1w4EtoT3dr4eOWO", accent: "american", style: "video games" }),
    ("Charlie", Voice { voice_id: "IKne3meq5aSn9XLyUdCD", accent: "australian", style: "conversational" }),
    ("Charlotte", Voice { voice_id: "XB0fDUnXU5powFXDhCwa", accent: "english-swedish", style: "video games" }),
    ("Clyde", Voice { voice_id: "2EiwWnXFnvU5JabPnv8n", accent: "american", style: "video games" }),
    ("Daniel", Voice { voice_id: "onwK4e9ZLuTAKqWW03F9", accent: "british", style: "news" }),
    ("Domi", Voice { voice_id: "AZnzlk1XvdvUeBnXmlld", accent: "american", style: "narration" }),
    ("Dorothy", Voice { voice_id: "ThT5KcBeYPX3keUQqHPh", accent: "british", style: "children's stories" }),
    ("Elli", Voice { voice_id: "MF3mGyEYCl7XYWbV9V6O", accent: "american", style: "narration" }),
    ("Emily", Voice { voice_id: "LcfcDJNUP1GQjkzn1xUU", accent: "american", style: "meditation" }),
    ("Fin", Voice { voice_id: "D38z5RcWu1voky8WS1ja", accent: "irish", style: "video games" }),
    ("Freya", Voice { voice_id: "jsCqWAovK2LkecY7zXl4", accent: "american", style: "video games" }),
    ("Gigi", Voice { voice_id: "jBpfuIE2acCO8z3wKNLl", accent: "american", style: "animation" }),
    ("Giovanni", Voice { voice_id: "zcAOhNBS3c14rBihAFp1", accent: "english-italian", style: "audiobook" }),
    ("Glinda", Voice { voice_id: "z9fAnlkpzviPz146aGWa", accent: "american", style: "video games" }),
    ("Grace", Voice { voice_id: "oWAxZDx7w5VEj9dCyTzz", accent: "american-southern", style: "audiobook" }),
    ("Harry", Voice { voice_id: "SOYHLrjzK2X1ezoPC6cr", accent: "american", style: "video games" }),
    ("James", Voice { voice_id: "ZQe5CZNOzWyzPSCn5a3c", accent: "australian", style: "news" }),
    ("Jeremy", Voice { voice_id: "bVMeCyTHy58xNoL34h3p", accent: "american-irish", style: "narration" }),
    ("Jessie", Voice { voice_id: "t0jbNlBVZ17f02VDIeMI", accent: "american", style: "video games" }),
    ("Joseph", Voice { voice_id: "Zlb1dXrM653N07WRdFW3", accent: "british", style: "news" }),
    ("Josh", Voice { voice_id: "TxGEqnHWrfWFTfGW9XjX", accent: "american", style: "narration" }),
    ("Liam", Voice { voice_id: "TX3LPaxmHKxFdv7VOQHJ", accent: "american", style: "narration" }),
    ("Lily", Voice { voice_id: "pFZP5JQG7iQjIQuC4Bku", accent: "british", style: "narration" }),
    ("Matilda", Voice { voice_id: "XrExE9yKIg1WjnnlVkGX", accent: "american", style: "audiobook" }),
    ("Michael", Voice { voice_id: "flq6f7yk4E4fJM5XTYuZ", accent: "american", style: "audiobook" }),
    ("Mimi", Voice { voice_id: "zrHiDhphv9ZnVXBqCLjz", accent: "english-swahili", style: "animation" }),
    ("Nicole", Voice { voice_id: "piTKgcLEGmPE4e6mEKli", accent: "american", style: "audiobook" }),
    ("Patrick", Voice { voice_id: "ODq5zmih8GrVes37Dizd", accent: "american", style: "video games" }),
    ("Paul", Voice { voice_id: "5Q0t7uMcjvnagumLfvZi", accent: "american", style: "news" }),
    ("Rachel", Voice { voice_id: "21m00Tcm4TlvDq8ikWAM", accent: "american", style: "narration" }),
    ("Sam", Voice { voice_id: "yoZ06aMxZJJ28mfd3POQ", accent: "american", style: "narration" }),
    ("Serena", Voice { voice_id: "pMsXgVXv3BLzUgSXRplE", accent: "american", style: "interactive" }),
    ("Thomas", Voice { voice_id: "GBv7mTt0atIp3Br8iCZE", accent: "american", style: "meditation" }),
];

/// Get voice metadata by name using binary search O(log n).
pub fn get_voice(name: &str) -> Option<&'static Voice> {
    VOICES.binary_search_by_key(&name, |(n, _)| n).ok().map(|idx| &VOICES[idx].1)
}

/// Print the builtin voice catalog.
pub fn print_voices() {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  ElevenLabs Premade Voices ({} builtin)", VOICES.len());
    println!("═══════════════════════════════════════════════════════════════════");
    println!();
    println!("{:<12} {:<24} {:<18} STYLE", "VOICE", "VOICE ID", "ACCENT");
    println!("{}", "─".repeat(72));

    for (name, voice) in VOICES {
        println!("{:<12} {:<24} {:<18} {}", name, voice.voice_id, voice.accent, voice.style);
    }

    println!("\n{}\n", "─".repeat(72));
    println!("Default: Rachel - calm American narration");
    println!();
    println!("Usage:");
    println!("  tts-clipper --voice Rachel \"Text to speak\"");
    println!("  tts-clipper --voice-id 21m00Tcm4TlvDq8ikWAM \"Text to speak\"");
    println!();
    println!("Set ELEVEN_API_KEY to list your account's full voice catalog instead.");
}

/// Print detailed information about a specific voice.
pub fn print_voice_info(name: &str) -> anyhow::Result<()> {
    let voice = get_voice(name).ok_or_else(|| anyhow::anyhow!("Voice '{}' not found. Run with --list-voices to see available voices", name))?;

    println!();
    println!("Voice: {}", name);
    println!("{}", "─".repeat(40));
    println!("Voice ID:  {}", voice.voice_id);
    println!("Accent:    {}", voice.accent);
    println!("Style:     {}", voice.style);
    println!();
    println!("Usage:");
    println!("  tts-clipper --voice {} \"Text to speak\"", name);
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sorted_for_binary_search() {
        for pair in VOICES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} listed after {}", pair[1].0, pair[0].0);
        }
    }

    #[test]
    fn test_get_voice() {
        assert_eq!(get_voice("Rachel").unwrap().voice_id, "21m00Tcm4TlvDq8ikWAM");
        assert!(get_voice("rachel").is_none(), "lookup is case-sensitive");
        assert!(get_voice("NoSuchVoice").is_none());
    }
}
