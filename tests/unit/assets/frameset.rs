use std::time::Duration;

use super::*;

fn tagged_frame(slot: FrameIndex) -> FrameImage {
    // Width encodes the slot so tests can tell frames apart.
    FrameImage::from_rgba(image::RgbaImage::new(slot.ordinal() as u32, 1))
}

fn template() -> PathTemplate {
    PathTemplate::parse("frames/f-{index}.png").unwrap()
}

#[test]
fn reserve_creates_empty_slots() {
    let set = FrameSet::reserve(3);
    assert_eq!(set.len(), 3);
    assert_eq!(set.loaded_count(), 0);
    assert!(set.get(FrameIndex(0)).is_none());
    assert!(set.get(FrameIndex(3)).is_none());
}

#[test]
fn put_is_positional_and_bounded() {
    let mut set = FrameSet::reserve(2);
    set.put(FrameIndex(1), tagged_frame(FrameIndex(1))).unwrap();
    assert!(set.get(FrameIndex(0)).is_none());
    assert_eq!(set.get(FrameIndex(1)).unwrap().width(), 2);
    assert!(set.put(FrameIndex(2), tagged_frame(FrameIndex(2))).is_err());
    assert_eq!(set.len(), 2);
}

#[test]
fn out_of_order_completion_keeps_slot_order() {
    let n = 8;
    // Later slots finish first.
    let loader = move |slot: FrameIndex, _path: &str| -> ScrollreelResult<FrameImage> {
        std::thread::sleep(Duration::from_millis(((n - slot.0) * 5) as u64));
        Ok(tagged_frame(slot))
    };
    let preload = Preload::start(n, &template(), Arc::new(loader), Some(n)).unwrap();
    let frames = preload.finish().unwrap();

    assert_eq!(frames.loaded_count(), n);
    for i in 0..n {
        assert_eq!(frames.get(FrameIndex(i)).unwrap().width(), (i + 1) as u32);
    }
}

#[test]
fn loader_sees_one_based_padded_paths() {
    let loader = |slot: FrameIndex, path: &str| -> ScrollreelResult<FrameImage> {
        assert_eq!(path, format!("frames/f-{:03}.png", slot.0 + 1));
        Ok(tagged_frame(slot))
    };
    let frames = Preload::start(3, &template(), Arc::new(loader), Some(1))
        .unwrap()
        .finish()
        .unwrap();
    assert_eq!(frames.loaded_count(), 3);
}

#[test]
fn failed_loads_leave_slot_empty_and_still_complete() {
    let loader = |slot: FrameIndex, path: &str| -> ScrollreelResult<FrameImage> {
        if slot.0 == 1 {
            return Err(ScrollreelError::load(format!("missing {path}")));
        }
        Ok(tagged_frame(slot))
    };
    let mut preload = Preload::start(3, &template(), Arc::new(loader), Some(2)).unwrap();
    let mut frames = FrameSet::reserve(3);
    let progress = preload.wait(&mut frames).unwrap();

    assert!(progress.is_complete());
    assert_eq!(progress.failed, 1);
    assert_eq!(preload.failed(), &[FrameIndex(1)]);
    assert!(frames.get(FrameIndex(1)).is_none());
    assert!(frames.get(FrameIndex(0)).is_some());
    assert!(frames.get(FrameIndex(2)).is_some());
}

#[test]
fn pump_never_blocks_and_eventually_completes() {
    let (gate_tx, gate_rx) = std::sync::mpsc::channel::<()>();
    let gate = std::sync::Mutex::new(gate_rx);
    let loader = move |slot: FrameIndex, _path: &str| -> ScrollreelResult<FrameImage> {
        gate.lock().unwrap().recv().unwrap();
        Ok(tagged_frame(slot))
    };
    let mut preload = Preload::start(2, &template(), Arc::new(loader), Some(1)).unwrap();
    let mut frames = FrameSet::reserve(2);

    let p = preload.pump(&mut frames);
    assert_eq!(p.completed, 0);
    assert!(!p.is_complete());

    gate_tx.send(()).unwrap();
    gate_tx.send(()).unwrap();
    let p = preload.wait(&mut frames).unwrap();
    assert!(p.is_complete());
    assert_eq!(frames.loaded_count(), 2);
}

#[test]
fn zero_frames_and_zero_threads_are_rejected() {
    let loader = |slot: FrameIndex, _path: &str| -> ScrollreelResult<FrameImage> {
        Ok(tagged_frame(slot))
    };
    let loader: Arc<dyn FrameLoader> = Arc::new(loader);
    assert!(Preload::start(0, &template(), Arc::clone(&loader), None).is_err());
    assert!(Preload::start(2, &template(), loader, Some(0)).is_err());
}

#[test]
fn panicking_loader_counts_as_failed_slot() {
    let loader = |slot: FrameIndex, _path: &str| -> ScrollreelResult<FrameImage> {
        if slot.0 == 0 {
            panic!("decoder blew up");
        }
        Ok(tagged_frame(slot))
    };
    let mut preload = Preload::start(3, &template(), Arc::new(loader), Some(2)).unwrap();
    let mut frames = FrameSet::reserve(3);
    let progress = preload.wait(&mut frames).unwrap();

    assert!(progress.is_complete());
    assert_eq!(progress.failed, 1);
    assert_eq!(preload.failed(), &[FrameIndex(0)]);
    assert!(frames.get(FrameIndex(0)).is_none());
    assert_eq!(frames.loaded_count(), 2);
}
