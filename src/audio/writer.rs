//! Writing synthesized audio clips to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Writes numbered audio clips into an output directory.
pub struct Writer {
    dir: PathBuf,
    width: usize, // Zero-padding width for clip numbers
}

impl Writer {
    /// Create a writer for a batch of `total` clips, creating the output
    /// directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: &Path, total: usize) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self { dir: dir.to_path_buf(), width: pad_width(total) })
    }

    /// Write one clip, returning the path written. `index` is 1-based.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, index: usize, audio: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(clip_filename(index, self.width));
        fs::write(&path, audio).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} ({} bytes)", path.display(), audio.len());
        Ok(path)
    }
}

/// Zero-padding width for a batch of `total` clips, at least 3 digits so
/// filenames sort lexicographically.
fn pad_width(total: usize) -> usize {
    let mut width = 0;
    let mut n = total;
    while n > 0 {
        width += 1;
        n /= 10;
    }
    width.max(3)
}

/// Filename for the `index`-th clip (1-based).
fn clip_filename(index: usize, width: usize) -> String {
    format!("clip_{:0width$}.mp3", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_width() {
        assert_eq!(pad_width(0), 3);
        assert_eq!(pad_width(9), 3);
        assert_eq!(pad_width(999), 3);
        assert_eq!(pad_width(1000), 4);
    }

    #[test]
    fn test_clip_filename() {
        assert_eq!(clip_filename(1, 3), "clip_001.mp3");
        assert_eq!(clip_filename(42, 3), "clip_042.mp3");
        assert_eq!(clip_filename(1234, 4), "clip_1234.mp3");
    }

    #[test]
    fn test_save_writes_file() {
        let dir = std::env::temp_dir().join(format!("tts-clipper-test-{}", std::process::id()));
        let writer = Writer::new(&dir, 10).unwrap();

        let path = writer.save(3, b"not really mp3").unwrap();
        assert!(path.ends_with("clip_003.mp3"));
        assert_eq!(fs::read(&path).unwrap(), b"not really mp3");

        fs::remove_dir_all(&dir).unwrap();
    }
}
