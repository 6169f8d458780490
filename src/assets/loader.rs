use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::{FrameImage, decode_frame};
use crate::assets::path::normalize_rel_path;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::ScrollreelResult;

/// Source of frame pixels.
///
/// Implementations run on preload worker threads, one call per slot, in no particular order.
pub trait FrameLoader: Send + Sync {
    /// Load the frame for `slot`, addressed by its expanded template `path`.
    fn load(&self, slot: FrameIndex, path: &str) -> ScrollreelResult<FrameImage>;
}

impl<F> FrameLoader for F
where
    F: Fn(FrameIndex, &str) -> ScrollreelResult<FrameImage> + Send + Sync,
{
    fn load(&self, slot: FrameIndex, path: &str) -> ScrollreelResult<FrameImage> {
        self(slot, path)
    }
}

/// Loads frames from files under an assets root directory.
#[derive(Clone, Debug)]
pub struct FsFrameLoader {
    root: PathBuf,
}

impl FsFrameLoader {
    /// Resolve template paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The assets root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FrameLoader for FsFrameLoader {
    fn load(&self, _slot: FrameIndex, path: &str) -> ScrollreelResult<FrameImage> {
        let rel = normalize_rel_path(path)?;
        let full = self.root.join(&rel);
        let bytes =
            std::fs::read(&full).with_context(|| format!("read frame '{}'", full.display()))?;
        decode_frame(&bytes)
    }
}
