use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::ScrollreelResult;

/// A decoded frame in straight-alpha RGBA8.
///
/// Cloning is cheap; pixel data is shared.
#[derive(Clone, Debug)]
pub struct FrameImage {
    rgba: Arc<image::RgbaImage>,
}

impl FrameImage {
    /// Wrap already-decoded pixels.
    pub fn from_rgba(rgba: image::RgbaImage) -> Self {
        Self {
            rgba: Arc::new(rgba),
        }
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Intrinsic size as floating point, for fit math.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    /// Borrow the pixel buffer.
    pub fn as_rgba(&self) -> &image::RgbaImage {
        &self.rgba
    }
}

/// Decode an encoded raster (JPEG, PNG, ...) into a [`FrameImage`].
pub fn decode_frame(bytes: &[u8]) -> ScrollreelResult<FrameImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    Ok(FrameImage::from_rgba(dyn_img.to_rgba8()))
}
