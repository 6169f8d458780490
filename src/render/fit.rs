use crate::foundation::core::{Rect, Size};

/// Letterbox `image` inside `canvas` without cropping.
///
/// When the canvas is relatively wider than the image, the image fills the canvas height and is
/// centered horizontally; otherwise it fills the width and is centered vertically. Degenerate or
/// non-finite extents yield [`Rect::ZERO`].
pub fn contain_rect(canvas: Size, image: Size) -> Rect {
    if !is_drawable(canvas) || !is_drawable(image) {
        return Rect::ZERO;
    }

    let canvas_ratio = canvas.width / canvas.height;
    let image_ratio = image.width / image.height;

    if canvas_ratio > image_ratio {
        let draw_h = canvas.height;
        let draw_w = canvas.height * image_ratio;
        let x = (canvas.width - draw_w) / 2.0;
        Rect::new(x, 0.0, x + draw_w, draw_h)
    } else {
        let draw_w = canvas.width;
        let draw_h = canvas.width / image_ratio;
        let y = (canvas.height - draw_h) / 2.0;
        Rect::new(0.0, y, draw_w, y + draw_h)
    }
}

fn is_drawable(s: Size) -> bool {
    s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
