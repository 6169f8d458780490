use std::panic::AssertUnwindSafe;
use std::sync::{Arc, mpsc};

use crate::assets::decode::FrameImage;
use crate::assets::loader::FrameLoader;
use crate::assets::path::PathTemplate;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Fixed-length, index-addressed frame storage.
///
/// Every slot is reserved up front; a load result is written into the slot it was requested for,
/// so completion order can never permute the sequence.
#[derive(Clone, Debug, Default)]
pub struct FrameSet {
    slots: Vec<Option<FrameImage>>,
}

impl FrameSet {
    /// Reserve `frame_count` empty slots.
    pub fn reserve(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Number of slots (loaded or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Frame in `slot`, if it has been loaded.
    pub fn get(&self, slot: FrameIndex) -> Option<&FrameImage> {
        self.slots.get(slot.0).and_then(Option::as_ref)
    }

    /// Fill `slot`. Out-of-range slots are rejected rather than appended.
    pub fn put(&mut self, slot: FrameIndex, image: FrameImage) -> ScrollreelResult<()> {
        let len = self.slots.len();
        let cell = self.slots.get_mut(slot.0).ok_or_else(|| {
            ScrollreelError::load(format!("frame slot {} out of range (len {len})", slot.0))
        })?;
        *cell = Some(image);
        Ok(())
    }

    /// Number of filled slots.
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Progress of a [`Preload`] after applying completions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadProgress {
    /// Requests that have completed (loaded or failed).
    pub completed: usize,
    /// Requests that failed; their slots stay empty.
    pub failed: usize,
    /// Total requests issued.
    pub total: usize,
}

impl PreloadProgress {
    /// Return `true` once every request has completed.
    pub fn is_complete(self) -> bool {
        self.completed == self.total
    }
}

struct Completion {
    slot: FrameIndex,
    path: String,
    result: ScrollreelResult<FrameImage>,
}

/// In-flight frame loads for a sequence.
///
/// Loads run on a dedicated worker pool. Their completions queue up until the owner applies them
/// with [`Preload::pump`] or [`Preload::wait`], one at a time, into a [`FrameSet`].
pub struct Preload {
    rx: mpsc::Receiver<Completion>,
    total: usize,
    completed: usize,
    failed: Vec<FrameIndex>,
    // Kept alive until every spawned load has reported back.
    _pool: rayon::ThreadPool,
}

impl Preload {
    /// Issue one load request per slot, in slot order.
    #[tracing::instrument(skip(template, loader), fields(template = template.as_str()))]
    pub fn start(
        frame_count: usize,
        template: &PathTemplate,
        loader: Arc<dyn FrameLoader>,
        threads: Option<usize>,
    ) -> ScrollreelResult<Self> {
        if frame_count == 0 {
            return Err(ScrollreelError::validation("frame_count must be > 0"));
        }
        let pool = build_thread_pool(threads)?;
        let (tx, rx) = mpsc::channel();

        for i in 0..frame_count {
            let slot = FrameIndex(i);
            let path = template.path_for(slot);
            let tx = tx.clone();
            let loader = Arc::clone(&loader);
            pool.spawn(move || {
                let result = load_guarded(loader.as_ref(), slot, &path);
                // The receiver is gone if the owner was dropped; nothing left to do.
                let _ = tx.send(Completion { slot, path, result });
            });
        }
        tracing::debug!(frame_count, "issued frame loads");

        Ok(Self {
            rx,
            total: frame_count,
            completed: 0,
            failed: Vec::new(),
            _pool: pool,
        })
    }

    /// Current progress without applying anything.
    pub fn progress(&self) -> PreloadProgress {
        PreloadProgress {
            completed: self.completed,
            failed: self.failed.len(),
            total: self.total,
        }
    }

    /// Slots whose load failed.
    pub fn failed(&self) -> &[FrameIndex] {
        &self.failed
    }

    /// Apply every completion that is already available, without blocking.
    pub fn pump(&mut self, frames: &mut FrameSet) -> PreloadProgress {
        while self.completed < self.total {
            match self.rx.try_recv() {
                Ok(c) => self.apply(frames, c),
                Err(_) => break,
            }
        }
        self.progress()
    }

    /// Block until every request has completed, applying completions as they arrive.
    pub fn wait(&mut self, frames: &mut FrameSet) -> ScrollreelResult<PreloadProgress> {
        while self.completed < self.total {
            let c = self.rx.recv().map_err(|_| {
                ScrollreelError::load(format!(
                    "frame loader stopped after {} of {} completions",
                    self.completed, self.total
                ))
            })?;
            self.apply(frames, c);
        }
        Ok(self.progress())
    }

    /// Block until complete and return the filled set.
    pub fn finish(mut self) -> ScrollreelResult<FrameSet> {
        let mut frames = FrameSet::reserve(self.total);
        self.wait(&mut frames)?;
        Ok(frames)
    }

    fn apply(&mut self, frames: &mut FrameSet, c: Completion) {
        self.completed += 1;
        let stored = c.result.and_then(|image| frames.put(c.slot, image));
        if let Err(err) = stored {
            tracing::warn!(slot = c.slot.0, path = %c.path, error = %err, "frame load failed; slot stays empty");
            self.failed.push(c.slot);
        }
    }
}

/// Run one load, turning a loader panic into a failed completion for its slot.
fn load_guarded(
    loader: &dyn FrameLoader,
    slot: FrameIndex,
    path: &str,
) -> ScrollreelResult<FrameImage> {
    std::panic::catch_unwind(AssertUnwindSafe(|| loader.load(slot, path))).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(ScrollreelError::load(format!(
            "frame loader panicked on '{path}': {reason}"
        )))
    })
}

fn build_thread_pool(threads: Option<usize>) -> ScrollreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ScrollreelError::validation(
            "load_threads must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new()
        .thread_name(|i| format!("frame-load-{i}"))
        .panic_handler(|_| tracing::error!("frame loader panicked"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ScrollreelError::load(format!("failed to build frame loader pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frameset.rs"]
mod tests;
