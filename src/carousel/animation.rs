//! Eased scroll animation for programmatic carousel navigation.
//!
//! Nav buttons and arrow keys scroll with an ease-out curve rather than a
//! jump. Sampling is a pure function of elapsed time (`sample_at`), so the
//! math is unit-testable without waiting on a clock; the frame tick calls
//! `sample` which plugs in real elapsed time.

use std::time::{Duration, Instant};

/// Ease-out cubic: fast start, gentle settle.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// An in-flight eased scroll from one offset to another.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
            duration,
        }
    }

    /// The offset this animation is heading toward.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at the given elapsed time. Pure; clamps past the end.
    pub fn sample_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Offset at the current wall-clock time.
    pub fn sample(&self) -> f32 {
        self.sample_at(self.started.elapsed())
    }

    /// Whether the animation has run its full duration.
    pub fn is_finished(&self) -> bool {
        self.started.elapsed() >= self.duration
    }
}
