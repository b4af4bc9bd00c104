use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// Public path prefix under which generated audio is served.
pub const AUDIO_URL_PREFIX: &str = "/static/audio";

const AUDIO_EXTENSION: &str = "mp3";

/// A generated audio file owned by the store.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub url: String,
}

/// Owns the directory of generated audio files.
///
/// The store allocates collision-resistant filenames, persists synthesized
/// audio and reclaims files older than the retention threshold. Callers only
/// ever receive the artifact's public URL; the files themselves are served by
/// the static file layer.
pub struct AudioStore {
    dir: PathBuf,
    max_age: Duration,
}

impl AudioStore {
    /// Create a store over `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, max_age: Duration) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, max_age })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sweep the directory once and delete every regular file older than the
    /// retention threshold.
    ///
    /// Reclamation is best-effort housekeeping: every per-file failure is
    /// swallowed and the operation never fails the caller. Running it twice
    /// in a row removes nothing on the second pass.
    pub async fn reclaim(&self) {
        let now = SystemTime::now();

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    dir = %self.dir.display(),
                    "Audio reclamation skipped, directory unreadable"
                );
                return;
            }
        };

        let mut removed = 0usize;
        while let Ok(Some(entry)) = entries.next_entry().await {
            let metadata = match entry.metadata().await {
                Ok(m) if m.is_file() => m,
                _ => continue,
            };

            let expired = metadata
                .modified()
                .ok()
                .and_then(|mtime| now.duration_since(mtime).ok())
                .map(|age| age > self.max_age)
                .unwrap_or(false);
            if !expired {
                continue;
            }

            let path = entry.path();
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        file = %path.display(),
                        "Failed to remove expired audio file"
                    );
                }
            }
        }

        if removed > 0 {
            tracing::debug!(removed, "Expired audio files reclaimed");
        }
    }

    /// Allocate a new unique destination for an audio file.
    ///
    /// The token carries 128 bits of randomness; reuse of a name already in
    /// the directory is treated as negligible rather than checked for.
    pub fn allocate(&self) -> AudioArtifact {
        let filename = format!("{}.{}", Uuid::new_v4().simple(), AUDIO_EXTENSION);
        AudioArtifact {
            path: self.dir.join(&filename),
            url: format!("{}/{}", AUDIO_URL_PREFIX, filename),
            filename,
        }
    }

    /// Allocate a destination and write `audio` to it.
    pub async fn save(&self, audio: &[u8]) -> std::io::Result<AudioArtifact> {
        let artifact = self.allocate();
        tokio::fs::write(&artifact.path, audio).await?;
        Ok(artifact)
    }
}
