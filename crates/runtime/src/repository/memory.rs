//! In-memory ProgressRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::SaveRecord;

use super::{ProgressRepository, RepositoryError, Result};

/// In-memory implementation of ProgressRepository.
#[derive(Debug, Default)]
pub struct InMemoryProgressRepo {
    record: RwLock<Option<SaveRecord>>,
}

impl InMemoryProgressRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a record already saved.
    pub fn with_record(record: SaveRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

impl ProgressRepository for InMemoryProgressRepo {
    fn save(&self, record: &SaveRecord) -> Result<()> {
        let mut slot = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveRecord>> {
        let slot = self
            .record
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn exists(&self) -> bool {
        self.record
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
