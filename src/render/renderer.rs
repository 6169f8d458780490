use std::sync::Arc;

use crate::assets::frameset::{FrameSet, Preload, PreloadProgress};
use crate::assets::loader::FrameLoader;
use crate::config::SequenceConfig;
use crate::foundation::core::{FrameIndex, Rect, Viewport};
use crate::foundation::error::ScrollreelResult;
use crate::render::fit::contain_rect;
use crate::render::surface::Surface;

/// Readiness of a frame sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Some loads are still in flight; nothing is painted.
    NotReady,
    /// Every load has completed.
    Ready,
}

/// What a paint request did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOutcome {
    /// The frame was drawn into `rect`.
    Painted {
        /// Frame drawn.
        frame: FrameIndex,
        /// Destination rectangle in surface pixels.
        rect: Rect,
    },
    /// Loads are still in flight; the request was recorded only.
    NotReady,
    /// The resolved slot is empty (load failed); the previous frame stays on screen.
    MissingFrame(FrameIndex),
    /// The surface has no area.
    EmptyViewport,
}

/// Result of applying preload completions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Readiness {
    /// Loads are still in flight.
    Pending(PreloadProgress),
    /// This call completed the sequence; the initial paint is attached.
    BecameReady(PaintOutcome),
    /// Already ready before this call.
    Ready,
}

/// All mutable state of one renderer instance.
#[derive(Debug)]
pub struct RendererState {
    frames: FrameSet,
    viewport: Viewport,
    position: f64,
    phase: Phase,
    last_painted: Option<FrameIndex>,
}

impl RendererState {
    fn new(frame_count: usize, viewport: Viewport) -> Self {
        Self {
            frames: FrameSet::reserve(frame_count),
            viewport,
            position: 0.0,
            phase: Phase::NotReady,
            last_painted: None,
        }
    }

    /// Loaded frames.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Last recorded viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last position received from the driver.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frame currently on the surface, if any.
    pub fn last_painted(&self) -> Option<FrameIndex> {
        self.last_painted
    }
}

/// Scroll-driven frame-sequence renderer.
///
/// Maps a continuous playback position to a frame slot and paints it with contain-fit
/// letterboxing. The playback position belongs to the driver; the renderer only remembers the
/// last value so it can repaint after a resize.
pub struct FrameSequenceRenderer<S: Surface> {
    state: RendererState,
    surface: S,
    preload: Option<Preload>,
}

impl<S: Surface> FrameSequenceRenderer<S> {
    /// Start loading `config.frame_count` frames through `loader` and take ownership of `surface`.
    #[tracing::instrument(skip_all, fields(frames = config.frame_count))]
    pub fn configure(
        config: &SequenceConfig,
        loader: Arc<dyn FrameLoader>,
        surface: S,
    ) -> ScrollreelResult<Self> {
        let template = config.template()?;
        let preload = Preload::start(config.frame_count, &template, loader, config.load_threads)?;
        Ok(Self::with_preload(config.frame_count, preload, surface))
    }

    /// Build a renderer around frames that are already in memory. It starts out ready.
    pub fn from_frames(frames: FrameSet, surface: S) -> Self {
        let mut state = RendererState::new(frames.len(), surface.viewport());
        state.frames = frames;
        state.phase = Phase::Ready;
        Self {
            state,
            surface,
            preload: None,
        }
    }

    fn with_preload(frame_count: usize, preload: Preload, surface: S) -> Self {
        Self {
            state: RendererState::new(frame_count, surface.viewport()),
            surface,
            preload: Some(preload),
        }
    }

    /// Renderer state.
    pub fn state(&self) -> &RendererState {
        &self.state
    }

    /// The surface being painted.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Return `true` once every frame load has completed.
    pub fn is_ready(&self) -> bool {
        self.state.phase == Phase::Ready
    }

    /// Apply finished loads without blocking.
    pub fn pump(&mut self) -> Readiness {
        let Some(preload) = self.preload.as_mut() else {
            return Readiness::Ready;
        };
        let progress = preload.pump(&mut self.state.frames);
        if progress.is_complete() {
            Readiness::BecameReady(self.become_ready())
        } else {
            Readiness::Pending(progress)
        }
    }

    /// Block until every load has completed.
    pub fn wait_ready(&mut self) -> ScrollreelResult<Readiness> {
        let Some(preload) = self.preload.as_mut() else {
            return Ok(Readiness::Ready);
        };
        preload.wait(&mut self.state.frames)?;
        Ok(Readiness::BecameReady(self.become_ready()))
    }

    fn become_ready(&mut self) -> PaintOutcome {
        if let Some(preload) = self.preload.take() {
            let p = preload.progress();
            tracing::info!(
                loaded = p.completed - p.failed,
                failed = p.failed,
                total = p.total,
                "frame sequence ready"
            );
        }
        self.state.phase = Phase::Ready;
        self.paint()
    }

    /// Record a new viewport; repaint at the last position when ready.
    pub fn resize(&mut self, width: u32, height: u32) -> PaintOutcome {
        let viewport = Viewport::new(width, height);
        self.state.viewport = viewport;
        self.surface.resize(viewport);
        self.state.last_painted = None;
        if !self.is_ready() {
            return PaintOutcome::NotReady;
        }
        self.paint()
    }

    /// Paint the frame for `position`.
    ///
    /// Never fails: out-of-range and non-finite positions clamp, empty slots skip the paint.
    pub fn update(&mut self, position: f64) -> PaintOutcome {
        self.state.position = position;
        if !self.is_ready() {
            return PaintOutcome::NotReady;
        }
        self.paint()
    }

    fn paint(&mut self) -> PaintOutcome {
        let frame = FrameIndex::from_position(self.state.position, self.state.frames.len());
        let Some(image) = self.state.frames.get(frame) else {
            tracing::trace!(frame = frame.0, "frame slot empty; keeping previous paint");
            return PaintOutcome::MissingFrame(frame);
        };
        if self.state.viewport.is_empty() {
            return PaintOutcome::EmptyViewport;
        }

        let rect = contain_rect(self.state.viewport.size(), image.size());
        self.surface.clear();
        self.surface.draw_image(image, rect);
        self.state.last_painted = Some(frame);
        tracing::trace!(frame = frame.0, ?rect, "painted frame");
        PaintOutcome::Painted { frame, rect }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
