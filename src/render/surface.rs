use crate::assets::decode::FrameImage;
use crate::foundation::core::{Rect, Rgba8, Viewport};

/// A rendered surface as RGBA8 pixels (straight alpha, tightly packed, row-major).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
}

/// 2D raster target the frame renderer paints into.
///
/// The renderer is the only writer between resizes.
pub trait Surface {
    /// Current extent.
    fn viewport(&self) -> Viewport;

    /// Reallocate to `viewport`. Previous contents are discarded.
    fn resize(&mut self, viewport: Viewport);

    /// Reset every pixel to the clear color.
    fn clear(&mut self);

    /// Draw `image` scaled into `dest` (surface pixel coordinates).
    fn draw_image(&mut self, image: &FrameImage, dest: Rect);
}

/// CPU surface backed by an [`image::RgbaImage`].
#[derive(Clone, Debug)]
pub struct CpuSurface {
    target: image::RgbaImage,
    clear: Rgba8,
}

impl CpuSurface {
    /// Allocate a surface of `viewport` size, cleared to `clear`.
    pub fn new(viewport: Viewport, clear: Rgba8) -> Self {
        let mut s = Self {
            target: image::RgbaImage::new(viewport.width, viewport.height),
            clear,
        };
        s.clear();
        s
    }

    /// Borrow the backing pixels.
    pub fn pixels(&self) -> &image::RgbaImage {
        &self.target
    }

    /// Copy the current contents out.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.target.width(),
            height: self.target.height(),
            data: self.target.as_raw().clone(),
        }
    }
}

impl Surface for CpuSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.target.width(), self.target.height())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.target = image::RgbaImage::new(viewport.width, viewport.height);
        self.clear();
    }

    fn clear(&mut self) {
        let px = image::Rgba(self.clear.0);
        for p in self.target.pixels_mut() {
            *p = px;
        }
    }

    fn draw_image(&mut self, image: &FrameImage, dest: Rect) {
        let w = dest.width().round();
        let h = dest.height().round();
        if !(w >= 1.0 && h >= 1.0) || self.target.width() == 0 || self.target.height() == 0 {
            return;
        }
        let (w, h) = (w as u32, h as u32);
        let x = dest.x0.round() as i64;
        let y = dest.y0.round() as i64;

        let src = image.as_rgba();
        if src.dimensions() == (w, h) {
            image::imageops::overlay(&mut self.target, src, x, y);
        } else {
            let scaled = image::imageops::resize(src, w, h, image::imageops::FilterType::Triangle);
            image::imageops::overlay(&mut self.target, &scaled, x, y);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
