//! Asset collaborator.
//!
//! Decoding models is not the runtime's business; it only needs to know
//! whether each entry of the manifest made it.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read asset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset {path} rejected: {reason}")]
    Rejected { path: String, reason: String },
}

pub trait AssetLoader: Send {
    /// Loads one manifest entry (e.g. `3D/dapur/scene.gltf`).
    fn load(&mut self, path: &str) -> Result<(), AssetError>;
}

/// Loader for builds where every asset is already in memory.
#[derive(Debug, Default)]
pub struct PreloadedAssets;

impl AssetLoader for PreloadedAssets {
    fn load(&mut self, _path: &str) -> Result<(), AssetError> {
        Ok(())
    }
}
