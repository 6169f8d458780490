use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Placeholder substituted with the zero-padded 1-based frame number.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Validated frame path template such as `assets/frames/ezgif-frame-{index}.jpg`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
}

impl PathTemplate {
    /// Parse a template.
    ///
    /// It must contain [`INDEX_PLACEHOLDER`] exactly once and be a relative path inside the assets
    /// root; it is stored normalized, so every expanded path is too.
    pub fn parse(raw: impl Into<String>) -> ScrollreelResult<Self> {
        let raw = raw.into();
        match raw.matches(INDEX_PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(ScrollreelError::validation(format!(
                    "path template '{raw}' has no {INDEX_PLACEHOLDER} placeholder"
                )));
            }
            _ => {
                return Err(ScrollreelError::validation(format!(
                    "path template '{raw}' has more than one {INDEX_PLACEHOLDER} placeholder"
                )));
            }
        }
        let raw = normalize_rel_path(&raw)?;
        Ok(Self { raw })
    }

    /// Path of the asset backing `slot`: slot 6 becomes `...-007...`.
    pub fn path_for(&self, slot: FrameIndex) -> String {
        self.raw
            .replace(INDEX_PLACEHOLDER, &format!("{:03}", slot.ordinal()))
    }

    /// The normalized, unexpanded template.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Normalize a frame path relative to the assets root.
///
/// Separators become `/` and empty or `.` segments are dropped. Absolute paths (including
/// drive-letter paths) and `..` segments are rejected so a frame can never resolve outside the root.
pub fn normalize_rel_path(source: &str) -> ScrollreelResult<String> {
    let unified = source.replace('\\', "/");
    let has_drive = unified.as_bytes().get(1) == Some(&b':')
        && unified.starts_with(|c: char| c.is_ascii_alphabetic());
    if unified.starts_with('/') || has_drive {
        return Err(ScrollreelError::validation(format!(
            "frame path '{source}' must be relative to the assets root"
        )));
    }

    let segments = unified
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .map(|seg| match seg {
            ".." => Err(ScrollreelError::validation(format!(
                "frame path '{source}' escapes the assets root"
            ))),
            _ => Ok(seg),
        })
        .collect::<ScrollreelResult<Vec<_>>>()?;

    if segments.is_empty() {
        return Err(ScrollreelError::validation(format!(
            "frame path '{source}' names no file"
        )));
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/path.rs"]
mod tests;
