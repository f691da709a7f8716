//! LocalStorage-backed submission log
//!
//! The whole collection lives as one JSON array under one key, newest first.
//! Every append rewrites that array in a single `set`.

use super::record::SubmissionRecord;
use crate::consts::SUBMISSIONS_KEY;
use crate::storage::{KeyValueStorage, StorageError, load_json, save_json};

/// Newest-first list of records
pub type SubmissionCollection = Vec<SubmissionRecord>;

/// Append-only submission store
#[derive(Debug)]
pub struct SubmissionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SubmissionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// All records, newest first. Absent or corrupt data reads as empty.
    pub fn load(&self) -> SubmissionCollection {
        load_json(&self.storage, SUBMISSIONS_KEY).unwrap_or_default()
    }

    /// Prepend `record` and persist the collection.
    ///
    /// Ids must increase with insertion order; a record created within the
    /// same millisecond as the newest one (or under a clock that went
    /// backwards) gets `newest + 1`. Returns the record as stored.
    pub fn append(&mut self, mut record: SubmissionRecord) -> Result<SubmissionRecord, StorageError> {
        let mut submissions = self.load();
        if let Some(newest) = submissions.first() {
            if record.id <= newest.id {
                log::debug!("Submission id {} bumped to {}", record.id, newest.id + 1);
                record.id = newest.id + 1;
            }
        }

        submissions.insert(0, record.clone());
        save_json(&mut self.storage, SUBMISSIONS_KEY, &submissions)?;
        log::info!("Submission saved ({} total)", submissions.len());
        Ok(record)
    }

    /// Drop every record
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(SUBMISSIONS_KEY)?;
        log::info!("Submissions cleared");
        Ok(())
    }
}
