//! Conversation persistence adapter.
//!
//! The store serializes the full conversation to a single JSON file
//! after every mutation and reads it back once at startup. It is
//! deliberately forgiving on the read side: a missing file, malformed
//! JSON, a non-array value, or an empty array are all treated as "no
//! prior state", and a corrupt file is deleted as a side effect of
//! detecting it. Callers therefore never see corruption; they see
//! [`None`] and fall back to the seed conversation.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use serde_json::{from_reader, to_writer_pretty};

use crate::error::{Error, Result};
use crate::observability;
use crate::types::Turn;

/// File-backed store for the conversation snapshot.
///
/// One store owns one path; there is exactly one writer (the chat
/// controller), so no locking is needed.
pub struct ConversationStore {
    path: PathBuf,
}

impl ConversationStore {
    /// Creates a store over the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted conversation.
    ///
    /// Returns `None` when no usable snapshot exists: the file is
    /// missing, unreadable, not a JSON array of turns, or an empty
    /// array. A file that exists but does not parse is deleted before
    /// returning.
    pub fn load(&self) -> Option<Vec<Turn>> {
        observability::STORE_LOADS.click();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!(
                    "failed to open history snapshot {}: {err}",
                    self.path.display()
                );
                return None;
            }
        };

        let reader = BufReader::new(file);
        match from_reader::<_, Vec<Turn>>(reader) {
            Ok(turns) if !turns.is_empty() => Some(turns),
            Ok(_) => {
                self.discard_corrupt("empty snapshot");
                None
            }
            Err(err) => {
                self.discard_corrupt(&err.to_string());
                None
            }
        }
    }

    /// Persists the full conversation, replacing any previous snapshot.
    pub fn save(&self, turns: &[Turn]) -> Result<()> {
        observability::STORE_SAVES.click();
        let file = File::create(&self.path).map_err(|err| {
            Error::storage(
                format!("failed to create {}", self.path.display()),
                Some(Box::new(err)),
            )
        })?;
        let writer = BufWriter::new(file);
        to_writer_pretty(writer, turns).map_err(|err| {
            Error::storage("failed to serialize history snapshot", Some(Box::new(err)))
        })
    }

    /// Deletes the snapshot. A missing file counts as success.
    pub fn clear_store(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::storage(
                format!("failed to delete {}", self.path.display()),
                Some(Box::new(err)),
            )),
        }
    }

    fn discard_corrupt(&self, reason: &str) {
        observability::STORE_LOAD_DISCARDS.click();
        log::warn!(
            "discarding unusable history snapshot {}: {reason}",
            self.path.display()
        );
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                log::warn!(
                    "failed to delete corrupt snapshot {}: {err}",
                    self.path.display()
                );
            }
        }
    }
}
