use kurbo::{Point, Vec2};

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::core::Viewport;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Pointer-driven 3D tilt of the hero title plus parallax drift of the decorative corner frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TiltConfig {
    /// Title rotation at the viewport edge, in degrees.
    pub max_rotation_deg: f64,
    /// Corner frame offset at the viewport edge, in pixels.
    pub max_offset_px: f64,
    /// Perspective distance applied to the title transform.
    pub perspective_px: f64,
    /// Title follow time while the pointer moves.
    pub title_follow_secs: f64,
    /// Corner frame follow time while the pointer moves.
    pub frames_follow_secs: f64,
    /// Time to settle back to rest after the pointer leaves.
    pub reset_secs: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: 20.0,
            max_offset_px: 30.0,
            perspective_px: 900.0,
            title_follow_secs: 0.5,
            frames_follow_secs: 1.0,
            reset_secs: 1.0,
        }
    }
}

impl TiltConfig {
    /// Every field must be finite and non-negative.
    pub fn validate(&self) -> ScrollreelResult<()> {
        let fields = [
            ("max_rotation_deg", self.max_rotation_deg),
            ("max_offset_px", self.max_offset_px),
            ("perspective_px", self.perspective_px),
            ("title_follow_secs", self.title_follow_secs),
            ("frames_follow_secs", self.frames_follow_secs),
            ("reset_secs", self.reset_secs),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollreelError::validation(format!(
                    "tilt {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Transform values to apply at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    /// Title rotation around the horizontal axis, degrees.
    pub rotate_x_deg: f64,
    /// Title rotation around the vertical axis, degrees.
    pub rotate_y_deg: f64,
    /// Title perspective distance.
    pub perspective_px: f64,
    /// Translation of the decorative corner frames.
    pub frames_offset: Vec2,
}

/// Tilt state machine. Time is supplied by the caller.
#[derive(Clone, Debug)]
pub struct TiltEffect {
    config: TiltConfig,
    rotate_x: Tween,
    rotate_y: Tween,
    offset_x: Tween,
    offset_y: Tween,
}

const EASE: Ease = Ease::OutCubic;

impl TiltEffect {
    /// Effect at rest.
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            rotate_x: Tween::default(),
            rotate_y: Tween::default(),
            offset_x: Tween::default(),
            offset_y: Tween::default(),
        }
    }

    /// Pointer moved to `pointer` (viewport coordinates). Ignored for empty viewports.
    pub fn pointer_move(&mut self, now_secs: f64, pointer: Point, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        let size = viewport.size();
        let nx = (pointer.x / size.width - 0.5) * 2.0;
        let ny = (pointer.y / size.height - 0.5) * 2.0;
        if !nx.is_finite() || !ny.is_finite() {
            return;
        }

        let c = &self.config;
        self.rotate_y
            .retarget(now_secs, nx * c.max_rotation_deg, c.title_follow_secs, EASE);
        self.rotate_x
            .retarget(now_secs, -ny * c.max_rotation_deg, c.title_follow_secs, EASE);
        self.offset_x
            .retarget(now_secs, -nx * c.max_offset_px, c.frames_follow_secs, EASE);
        self.offset_y
            .retarget(now_secs, -ny * c.max_offset_px, c.frames_follow_secs, EASE);
    }

    /// Pointer left the hero; everything eases back to rest.
    pub fn pointer_leave(&mut self, now_secs: f64) {
        let d = self.config.reset_secs;
        for t in [
            &mut self.rotate_x,
            &mut self.rotate_y,
            &mut self.offset_x,
            &mut self.offset_y,
        ] {
            t.retarget(now_secs, 0.0, d, EASE);
        }
    }

    /// Pose at `now_secs`.
    pub fn sample(&self, now_secs: f64) -> TiltPose {
        TiltPose {
            rotate_x_deg: self.rotate_x.value_at(now_secs),
            rotate_y_deg: self.rotate_y.value_at(now_secs),
            perspective_px: self.config.perspective_px,
            frames_offset: Vec2::new(
                self.offset_x.value_at(now_secs),
                self.offset_y.value_at(now_secs),
            ),
        }
    }
}
