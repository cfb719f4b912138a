//! JSON file KYC store
//!
//! One pretty-printed `<subject>.json` per record under a directory.
//! Writes go through a temp file and a rename.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{Actor, KycRecord, LifecycleStatus};
use crate::core::ports::{KycStore, StoreError, authorize_status_change, authorize_upsert};

const RECORD_EXTENSION: &str = "json";
const MAX_SUBJECT_LEN: usize = 128;

/// File-backed KYC store
#[derive(Debug, Clone)]
pub struct JsonFileKycStore {
    dir: PathBuf,
}

impl JsonFileKycStore {
    /// Store records under `dir` (created on first write)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the records
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, subject_id: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_subject_id(subject_id) {
            return Err(StoreError::InvalidSubject(subject_id.to_string()));
        }
        Ok(self.dir.join(subject_id).with_extension(RECORD_EXTENSION))
    }

    fn read(path: &Path) -> Result<Option<KycRecord>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write(&self, path: &Path, record: &KycRecord) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl KycStore for JsonFileKycStore {
    fn get(&self, subject_id: &str) -> Result<Option<KycRecord>, StoreError> {
        Self::read(&self.record_path(subject_id)?)
    }

    fn upsert(&self, actor: &Actor, record: &KycRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.subject_id)?;
        let existing = Self::read(&path)?;
        authorize_upsert(actor, existing.as_ref(), record)?;

        log::debug!("writing KYC record {}", path.display());
        self.write(&path, record)
    }

    fn set_status(
        &self,
        actor: &Actor,
        subject_id: &str,
        status: LifecycleStatus,
    ) -> Result<KycRecord, StoreError> {
        authorize_status_change(actor)?;

        let path = self.record_path(subject_id)?;
        let mut record =
            Self::read(&path)?.ok_or_else(|| StoreError::NotFound(subject_id.to_string()))?;
        record.status = status;
        record.updated_at = chrono::Utc::now();

        self.write(&path, &record)?;
        Ok(record)
    }
}

/// Subject ids become file names: `[A-Za-z0-9_-]`, 1-128 chars
fn is_valid_subject_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SUBJECT_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
