//! Repository contract for saving and loading player progress.

use game_core::SaveRecord;

use super::Result;

/// Persistence collaborator for [`SaveRecord`]s.
///
/// There is a single save slot. `load` returns `Ok(None)` when nothing was
/// ever saved and an error when something was saved but cannot be read; the
/// orchestrator treats both as "no save".
pub trait ProgressRepository: Send + Sync {
    /// Overwrite the save slot.
    fn save(&self, record: &SaveRecord) -> Result<()>;

    /// Read the save slot.
    fn load(&self) -> Result<Option<SaveRecord>>;

    /// Check if a save exists
    fn exists(&self) -> bool;
}
