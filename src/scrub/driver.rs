use crate::animation::ease::Ease;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::render::renderer::{FrameSequenceRenderer, PaintOutcome};
use crate::render::surface::Surface;

/// Time constants per smoothing window: after `smoothing_secs` the playhead has closed ~95% of
/// the gap to the scroll target.
const SMOOTHING_TIME_CONSTANTS: f64 = 3.0;

/// How scroll distance maps onto the frame sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScrubConfig {
    /// Scroll distance (px) over which the hero stays pinned and the whole sequence plays.
    pub scroll_distance_px: f64,
    /// Seconds the playhead takes to catch up with the scroll bar. `0` follows it exactly.
    pub smoothing_secs: f64,
    /// Report whole frame positions only.
    pub snap_to_frame: bool,
    /// Curve from scroll progress to sequence progress.
    pub ease: Ease,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            scroll_distance_px: 3000.0,
            smoothing_secs: 0.5,
            snap_to_frame: true,
            ease: Ease::Linear,
        }
    }
}

impl ScrubConfig {
    /// Reject non-finite or non-positive distances and negative smoothing.
    pub fn validate(&self) -> ScrollreelResult<()> {
        if !self.scroll_distance_px.is_finite() || self.scroll_distance_px <= 0.0 {
            return Err(ScrollreelError::validation(
                "scrub scroll_distance_px must be finite and > 0",
            ));
        }
        if !self.smoothing_secs.is_finite() || self.smoothing_secs < 0.0 {
            return Err(ScrollreelError::validation(
                "scrub smoothing_secs must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Scroll-linked playhead for a frame sequence.
///
/// Owns the playback position. It stays idle until [`ScrubDriver::start`] (or the first
/// [`ScrubDriver::drive`] after the renderer is ready), so playback never begins before the frames
/// are loaded.
#[derive(Clone, Debug)]
pub struct ScrubDriver {
    config: ScrubConfig,
    last_frame: f64,
    start_px: f64,
    playhead: f64,
    started: bool,
}

impl ScrubDriver {
    /// Driver for a sequence of `frame_count` frames, pinned from scroll offset 0.
    pub fn new(frame_count: usize, config: ScrubConfig) -> ScrollreelResult<Self> {
        if frame_count == 0 {
            return Err(ScrollreelError::validation("frame_count must be > 0"));
        }
        config.validate()?;
        Ok(Self {
            config,
            last_frame: (frame_count - 1) as f64,
            start_px: 0.0,
            playhead: 0.0,
            started: false,
        })
    }

    /// Move the pin start to `start_px` (the hero's document offset).
    pub fn with_start_offset(mut self, start_px: f64) -> Self {
        self.start_px = start_px;
        self
    }

    /// Scroll offset where pinning begins.
    pub fn start_px(&self) -> f64 {
        self.start_px
    }

    /// Scroll offset where pinning ends.
    pub fn end_px(&self) -> f64 {
        self.start_px + self.config.scroll_distance_px
    }

    /// Allow playback. Called once the frames are ready.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Return `true` once playback is allowed.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Unsnapped playhead.
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    /// Return `true` while the hero section is pinned.
    pub fn is_pinned(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start_px && scroll_y <= self.end_px()
    }

    /// Sequence position the playhead is heading for at `scroll_y`.
    pub fn target_for_scroll(&self, scroll_y: f64) -> f64 {
        let progress = (scroll_y - self.start_px) / self.config.scroll_distance_px;
        self.config.ease.apply(progress) * self.last_frame
    }

    /// Advance the playhead by `dt_secs` toward the target for `scroll_y`.
    ///
    /// Returns `None` before [`ScrubDriver::start`].
    pub fn tick(&mut self, scroll_y: f64, dt_secs: f64) -> Option<f64> {
        if !self.started {
            return None;
        }
        let target = self.target_for_scroll(scroll_y);
        let s = self.config.smoothing_secs;
        let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
        if s <= 0.0 {
            self.playhead = target;
        } else {
            let k = 1.0 - (-dt * SMOOTHING_TIME_CONSTANTS / s).exp();
            self.playhead += (target - self.playhead) * k;
        }
        Some(self.reported())
    }

    /// Jump straight to the target for `scroll_y`, e.g. after the layout changed.
    pub fn refresh(&mut self, scroll_y: f64) -> Option<f64> {
        if !self.started {
            return None;
        }
        self.playhead = self.target_for_scroll(scroll_y);
        Some(self.reported())
    }

    /// Tick and forward the position to `renderer`.
    ///
    /// The first call after the renderer became ready starts playback and refreshes the playhead.
    pub fn drive<S: Surface>(
        &mut self,
        renderer: &mut FrameSequenceRenderer<S>,
        scroll_y: f64,
        dt_secs: f64,
    ) -> Option<PaintOutcome> {
        if !self.started {
            if !renderer.is_ready() {
                return None;
            }
            self.start();
            let position = self.refresh(scroll_y)?;
            tracing::debug!(scroll_y, position, "scrub driver started");
            return Some(renderer.update(position));
        }
        let position = self.tick(scroll_y, dt_secs)?;
        Some(renderer.update(position))
    }

    fn reported(&self) -> f64 {
        if self.config.snap_to_frame {
            self.playhead.round()
        } else {
            self.playhead
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scrub/driver.rs"]
mod tests;
