use crate::animation::ease::Ease;

/// A single scalar tween on an explicit clock.
///
/// Time is supplied by the caller in seconds; the tween never reads a wall clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_secs: f64,
    duration_secs: f64,
    ease: Ease,
}

impl Tween {
    /// A tween that holds `value` forever.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start_secs: 0.0,
            duration_secs: 0.0,
            ease: Ease::Linear,
        }
    }

    /// Value at time `now_secs`.
    pub fn value_at(&self, now_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 || now_secs >= self.start_secs + self.duration_secs {
            return self.to;
        }
        let t = (now_secs - self.start_secs) / self.duration_secs;
        let k = self.ease.apply(t);
        self.from + (self.to - self.from) * k
    }

    /// Return `true` once the tween has reached its target at `now_secs`.
    pub fn is_done(&self, now_secs: f64) -> bool {
        self.duration_secs <= 0.0 || now_secs >= self.start_secs + self.duration_secs
    }

    /// Final value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Replace the running tween, starting from wherever it currently is.
    pub fn retarget(&mut self, now_secs: f64, to: f64, duration_secs: f64, ease: Ease) {
        let from = self.value_at(now_secs);
        *self = Self {
            from,
            to,
            start_secs: now_secs,
            duration_secs: duration_secs.max(0.0),
            ease,
        };
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::settled(0.0)
    }
}
