use crate::foundation::error::{ScrollreelError, ScrollreelResult};

pub use kurbo::{Point, Rect, Size};

/// 0-based slot index into a frame sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Resolve a continuous playback position to a frame slot.
    ///
    /// Rounds to the nearest integer (halves away from zero) and clamps into
    /// `[0, frame_count - 1]`. Non-finite input clamps as well: NaN and `-inf` map to the first
    /// frame, `+inf` to the last. `frame_count == 0` always yields slot 0.
    pub fn from_position(position: f64, frame_count: usize) -> Self {
        let last = frame_count.saturating_sub(1);
        if position.is_nan() {
            return Self(0);
        }
        let rounded = position.round();
        if rounded <= 0.0 {
            return Self(0);
        }
        if rounded >= last as f64 {
            return Self(last);
        }
        Self(rounded as usize)
    }

    /// The 1-based number used when addressing the frame's asset on disk.
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport. Zero extents are allowed; painting into them is a no-op.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Viewport extent as a floating-point size.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serializes as `[r, g, b, a]`; deserializes from that or from a `"#rrggbb[aa]"` string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Rgba8(pub [u8; 4]);

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Channels([u8; 4]),
            Hex(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Channels(c) => Ok(Self(c)),
            Repr::Hex(hex) => Self::from_hex(&hex).map_err(serde::de::Error::custom),
        }
    }
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Parse a `#rrggbb` or `#rrggbbaa` hex color.
    pub fn from_hex(hex: &str) -> ScrollreelResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ScrollreelError::validation(format!(
                "color '{hex}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ScrollreelError::validation(format!("color '{hex}' is not hex")))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?, a]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
