//! Append-only score list persisted to a JSON file

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One recorded score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player name as submitted
    pub name: String,
    /// Score as submitted; kept as a JSON number so integers stay integers
    pub score: serde_json::Number,
    /// Submission time, ISO-8601 UTC with milliseconds
    pub date: String,
}

/// Score file errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not hold a list of score entries
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory score list mirrored to a file.
///
/// Every append rewrites the whole file, so after a successful append the
/// file always holds exactly [`ScoreStore::entries`].
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl ScoreStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that cannot be read or
    /// parsed is logged and also treated as empty; it is overwritten on the
    /// next append.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => {
                log::info!("Loaded {} scores from {}", entries.len(), path.display());
                entries
            }
            Err(e) => {
                log::error!("Failed to read scores file {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Self { path, entries }
    }

    /// Parse the entries stored at `path`. A missing file holds none.
    pub fn read_entries(path: &Path) -> Result<Vec<ScoreEntry>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read(path)?;
        Ok(serde_json::from_slice(&contents)?)
    }

    /// All entries in submission order
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Record a score stamped with the current time and rewrite the file.
    ///
    /// When the write fails the entry is dropped again, leaving memory and
    /// file in agreement.
    pub async fn append(
        &mut self,
        name: String,
        score: serde_json::Number,
    ) -> Result<ScoreEntry, StoreError> {
        let entry = ScoreEntry {
            name,
            score,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.entries.push(entry.clone());

        if let Err(e) = self.persist().await {
            self.entries.pop();
            return Err(e);
        }
        log::debug!("Recorded score {} for {}", entry.score, entry.name);
        Ok(entry)
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}
