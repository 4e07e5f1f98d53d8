//! Asset loading progress.
//!
//! A failed asset keeps the loading gate shut. The player sees which entries
//! failed and can retry just those; progression never silently skips a model
//! a level depends on.
use std::collections::BTreeMap;

use crate::api::{AssetError, AssetLoader};

/// The ten models the game needs before the opening cutscene.
pub const ASSET_MANIFEST: [&str; 10] = [
    "3D/ruangan/scene.gltf",
    "3D/dapur/scene.gltf",
    "3D/laboratory/scene.gltf",
    "3D/ruang bawah tanah/scene.gltf",
    "3D/baterai/scene.gltf",
    "3D/lampu/scene.gltf",
    "3D/saklar/scene.gltf",
    "3D/tv/scene.gltf",
    "3D/ilmuwan/scene.gltf",
    "3D/siswa smp/scene.gltf",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// Per-entry load status for a manifest.
#[derive(Clone, Debug)]
pub struct AssetTracker {
    manifest: Vec<String>,
    status: BTreeMap<String, AssetStatus>,
}

impl AssetTracker {
    pub fn new<I, S>(manifest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let manifest: Vec<String> = manifest.into_iter().map(Into::into).collect();
        let status = manifest
            .iter()
            .map(|path| (path.clone(), AssetStatus::Pending))
            .collect();
        Self { manifest, status }
    }

    pub fn manifest(&self) -> &[String] {
        &self.manifest
    }

    pub fn total(&self) -> usize {
        self.manifest.len()
    }

    pub fn loaded(&self) -> usize {
        self.status
            .values()
            .filter(|status| **status == AssetStatus::Loaded)
            .count()
    }

    /// Failed entries with their error text, in manifest order.
    pub fn failed(&self) -> Vec<(&str, &str)> {
        self.manifest
            .iter()
            .filter_map(|path| match self.status.get(path) {
                Some(AssetStatus::Failed(reason)) => Some((path.as_str(), reason.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn status(&self, path: &str) -> Option<&AssetStatus> {
        self.status.get(path)
    }

    /// Loaded share of the manifest, rounded to the nearest percent.
    /// An empty manifest counts as complete.
    pub fn progress_percent(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 100;
        }
        ((self.loaded() * 100 + total / 2) / total) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.loaded() == self.total()
    }

    pub fn record_loaded(&mut self, path: &str) {
        self.status.insert(path.to_string(), AssetStatus::Loaded);
    }

    pub fn record_failed(&mut self, path: &str, error: &AssetError) {
        self.status
            .insert(path.to_string(), AssetStatus::Failed(error.to_string()));
    }

    /// Entries that still need a load attempt: pending and failed ones.
    pub fn outstanding(&self) -> Vec<String> {
        self.manifest
            .iter()
            .filter(|path| self.status.get(*path) != Some(&AssetStatus::Loaded))
            .cloned()
            .collect()
    }

    /// Attempts every outstanding entry with `loader`, calling `on_result`
    /// after each one.
    pub fn load_outstanding(
        &mut self,
        loader: &mut dyn AssetLoader,
        mut on_result: impl FnMut(&Self, &str, Option<&AssetError>),
    ) {
        for path in self.outstanding() {
            match loader.load(&path) {
                Ok(()) => {
                    self.record_loaded(&path);
                    on_result(self, &path, None);
                }
                Err(error) => {
                    tracing::warn!(%path, %error, "failed to load asset");
                    self.record_failed(&path, &error);
                    on_result(self, &path, Some(&error));
                }
            }
        }
    }
}

impl Default for AssetTracker {
    fn default() -> Self {
        Self::new(ASSET_MANIFEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    struct FlakyLoader {
        broken: HashSet<String>,
        attempts: Vec<String>,
    }

    impl AssetLoader for FlakyLoader {
        fn load(&mut self, path: &str) -> Result<(), AssetError> {
            self.attempts.push(path.to_string());
            if self.broken.contains(path) {
                Err(AssetError::NotFound(PathBuf::from(path)))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn all_loaded_completes() {
        let mut tracker = AssetTracker::default();
        let mut loader = FlakyLoader {
            broken: HashSet::new(),
            attempts: Vec::new(),
        };
        let mut percents = Vec::new();
        tracker.load_outstanding(&mut loader, |tracker, _, _| {
            percents.push(tracker.progress_percent())
        });

        assert!(tracker.is_complete());
        assert_eq!(percents.first(), Some(&10));
        assert_eq!(percents.last(), Some(&100));
        assert_eq!(loader.attempts.len(), 10);
    }

    #[test]
    fn a_failure_blocks_until_retried() {
        let mut tracker = AssetTracker::default();
        let mut loader = FlakyLoader {
            broken: HashSet::from(["3D/dapur/scene.gltf".to_string()]),
            attempts: Vec::new(),
        };
        tracker.load_outstanding(&mut loader, |_, _, _| {});

        assert!(!tracker.is_complete());
        assert_eq!(tracker.progress_percent(), 90);
        let failed = tracker.failed();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].0, "3D/dapur/scene.gltf");

        loader.broken.clear();
        loader.attempts.clear();
        tracker.load_outstanding(&mut loader, |_, _, _| {});

        assert_eq!(loader.attempts, vec!["3D/dapur/scene.gltf".to_string()]);
        assert!(tracker.is_complete());
        assert!(tracker.failed().is_empty());
    }

    #[test]
    fn empty_manifest_is_complete() {
        let tracker = AssetTracker::new(Vec::<String>::new());
        assert!(tracker.is_complete());
        assert_eq!(tracker.progress_percent(), 100);
    }
}
