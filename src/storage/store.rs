use std::io;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

/// Upper bound on filename regeneration when a generated name already exists.
/// A collision requires two requests in the same second drawing the same
/// 8-hex-char suffix, so hitting this bound is effectively impossible.
const MAX_NAME_ATTEMPTS: usize = 8;

/// Filesystem-backed store for archived transcripts.
///
/// Wraps the single storage directory. Constructed once at startup and shared
/// with the HTTP handlers via `Extension<Arc<TranscriptStore>>`; no ambient
/// global state.
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    /// Opens the store at `dir`, creating the directory if it does not exist.
    /// Safe to call on every startup.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create storage directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists a transcript value as pretty-printed UTF-8 JSON under a fresh
    /// generated filename, and returns that filename.
    ///
    /// Non-ASCII characters are written literally, not escaped. On the rare
    /// filename collision the random suffix is regenerated; after
    /// `MAX_NAME_ATTEMPTS` the write is abandoned without touching any file.
    pub async fn write_transcript(&self, transcript: &Value) -> io::Result<String> {
        self.write_transcript_with(transcript, generate_filename)
            .await
    }

    /// Same as `write_transcript`, with the filename source injected so the
    /// collision path can be driven deterministically.
    pub(crate) async fn write_transcript_with(
        &self,
        transcript: &Value,
        mut namer: impl FnMut() -> String,
    ) -> io::Result<String> {
        let pretty = serde_json::to_string_pretty(transcript).map_err(io::Error::from)?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = namer();
            let path = self.dir.join(&filename);

            if tokio::fs::try_exists(&path).await? {
                tracing::warn!("Filename collision on {}, regenerating", filename);
                continue;
            }

            tokio::fs::write(&path, pretty.as_bytes()).await?;
            return Ok(filename);
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "could not generate a unique transcript filename",
        ))
    }

    /// Maps a client-supplied name to a path inside the storage directory.
    ///
    /// Sub-path components are allowed, but anything that could escape the
    /// directory is refused: absolute paths, backslashes, empty names, and
    /// any `..` component.
    pub fn resolve_name(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('\\') {
            return None;
        }

        let relative = Path::new(name);
        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                _ => return None,
            }
        }

        Some(self.dir.join(relative))
    }

    /// Reads the full contents of a stored file by its client-supplied name.
    /// A name refused by `resolve_name` reads as `NotFound`.
    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self
            .resolve_name(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "invalid file name"))?;
        tokio::fs::read(&path).await
    }
}

/// Builds `transcript_{YYYYMMDDTHHMMSSZ}_{8 hex chars}.json` from the current
/// UTC time and a fresh v4 UUID.
fn generate_filename() -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("transcript_{}_{}.json", stamp, &suffix[..8])
}
