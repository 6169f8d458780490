//! Scrollreel renders a scroll-scrubbed frame sequence for a landing-page hero.
//!
//! The core is [`FrameSequenceRenderer`]: it preloads a numbered image sequence into fixed slots,
//! maps a continuous playback position to a frame, and paints it letterboxed ("contain" fit) into a
//! [`Surface`]. Around it:
//!
//! - [`ScrubDriver`] turns scroll offset and elapsed time into a damped, snapped playback position
//! - [`TiltEffect`], [`CategoryFilter`], [`Typewriter`] and [`ContactForm`] model the page's
//!   interactive pieces as clock-driven state machines
//! - [`SiteConfig`] loads everything from one JSON document
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod config;
mod foundation;
mod glue;
mod render;
mod scrub;

pub use crate::animation::ease::Ease;
pub use crate::animation::tween::Tween;
pub use crate::assets::decode::{FrameImage, decode_frame};
pub use crate::assets::frameset::{FrameSet, Preload, PreloadProgress};
pub use crate::assets::loader::{FrameLoader, FsFrameLoader};
pub use crate::assets::path::{INDEX_PLACEHOLDER, PathTemplate, normalize_rel_path};
pub use crate::config::{SequenceConfig, SiteConfig};
pub use crate::foundation::core::{FrameIndex, Point, Rect, Rgba8, Size, Viewport};
pub use crate::foundation::error::{ScrollreelError, ScrollreelResult};
pub use crate::glue::contact::{
    ContactForm, FormStatus, MailRelay, RelayConfig, RelayRequest, StatusTone, SubmitButton,
};
pub use crate::glue::filter::{
    ALL_CATEGORIES, Card, Catalog, CategoryDetails, CategoryFilter, DetailItem, FilterOutcome,
    ModalView,
};
pub use crate::glue::tilt::{TiltConfig, TiltEffect, TiltPose};
pub use crate::glue::typewriter::{Typewriter, TypewriterConfig, TypewriterFrame, TypewriterPhase};
pub use crate::render::fit::contain_rect;
pub use crate::render::renderer::{
    FrameSequenceRenderer, PaintOutcome, Phase, Readiness, RendererState,
};
pub use crate::render::surface::{CpuSurface, FrameRGBA, Surface};
pub use crate::scrub::driver::{ScrubConfig, ScrubDriver};
