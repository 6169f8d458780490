use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::assets::path::PathTemplate;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::glue::filter::Catalog;
use crate::glue::tilt::TiltConfig;
use crate::glue::typewriter::TypewriterConfig;
use crate::scrub::driver::ScrubConfig;

/// Frame sequence settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SequenceConfig {
    /// Number of frames; must be > 0.
    pub frame_count: usize,
    /// Asset path with an `{index}` placeholder, relative to the assets root.
    pub path_template: String,
    /// Color the surface is cleared to before each paint.
    pub clear_rgba: Rgba8,
    /// Worker threads used for loading. `None` uses the pool default.
    pub load_threads: Option<usize>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frame_count: 96,
            path_template: "assets/frames/ezgif-frame-{index}.jpg".to_string(),
            clear_rgba: Rgba8::TRANSPARENT,
            load_threads: None,
        }
    }
}

impl SequenceConfig {
    /// Parsed path template.
    pub fn template(&self) -> ScrollreelResult<PathTemplate> {
        PathTemplate::parse(self.path_template.as_str())
    }

    /// Validate counts and the template.
    pub fn validate(&self) -> ScrollreelResult<()> {
        if self.frame_count == 0 {
            return Err(ScrollreelError::validation("frame_count must be > 0"));
        }
        if self.load_threads == Some(0) {
            return Err(ScrollreelError::validation(
                "load_threads must be >= 1 when set",
            ));
        }
        self.template().map(|_| ())
    }
}

/// Whole-page configuration document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Hero frame sequence.
    pub sequence: SequenceConfig,
    /// Scroll scrubbing.
    #[serde(default)]
    pub scrub: ScrubConfig,
    /// Pointer tilt.
    #[serde(default)]
    pub tilt: TiltConfig,
    /// Rotating quotes.
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    /// Category details shown in the modal.
    #[serde(default)]
    pub catalog: Catalog,
}

impl SiteConfig {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollreelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollreelError::serde(format!("parse site config JSON: {e}")))
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollreelError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every section.
    pub fn validate(&self) -> ScrollreelResult<()> {
        self.sequence.validate()?;
        self.scrub.validate()?;
        self.tilt.validate()?;
        self.typewriter.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
