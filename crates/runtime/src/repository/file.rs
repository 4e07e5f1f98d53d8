//! File-based ProgressRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use game_core::SaveRecord;

use super::{ProgressRepository, RepositoryError, Result};

/// File-based implementation of ProgressRepository.
///
/// The save slot is a single pretty-printed JSON file named after the
/// browser storage key of the web build, `energyQuestSave.json`. Writes
/// go to a temp file first and are renamed into place.
pub struct FileProgressRepository {
    path: PathBuf,
}

impl FileProgressRepository {
    pub const FILE_NAME: &'static str = "energyQuestSave.json";

    /// Create a repository storing its slot under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    /// Create a repository in the platform data directory.
    pub fn in_default_dir() -> Result<Self> {
        Self::new(Self::default_dir()?)
    }

    /// Platform data directory for saves, e.g. `~/.local/share/energy-quest/saves`.
    pub fn default_dir() -> Result<PathBuf> {
        ProjectDirs::from("id", "EnergyQuest", "energy-quest")
            .map(|dirs| dirs.data_dir().join("saves"))
            .ok_or(RepositoryError::NoDataDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressRepository for FileProgressRepository {
    fn save(&self, record: &SaveRecord) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            level = record.current_level,
            "Saved progress to {}",
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<SaveRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let record: SaveRecord = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;

        tracing::debug!(
            level = record.current_level,
            "Loaded progress from {}",
            self.path.display()
        );

        Ok(Some(record))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SaveRecord {
        SaveRecord {
            energy_keys: [true, true, false],
            current_level: 3,
            power_meter: 70,
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProgressRepository::new(dir.path()).unwrap();

        assert_eq!(repo.load().unwrap(), None);
        repo.save(&record()).unwrap();
        assert!(repo.exists());
        assert_eq!(repo.load().unwrap(), Some(record()));

        // a second repository over the same directory sees the same slot
        let reopened = FileProgressRepository::new(dir.path()).unwrap();
        assert_eq!(reopened.load().unwrap(), Some(record()));
    }

    #[test]
    fn writes_browser_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProgressRepository::new(dir.path()).unwrap();
        repo.save(&record()).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        assert!(text.contains("\"energyKeys\""));
        assert!(text.contains("\"currentLevel\": 3"));
        assert!(text.contains("\"powerMeter\": 70"));
        assert!(!dir.path().join("energyQuestSave.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProgressRepository::new(dir.path()).unwrap();
        fs::write(repo.path(), b"{ \"energyKeys\": [true, ").unwrap();

        assert!(matches!(
            repo.load(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
