use std::time::{Duration, Instant};

/// Time sample handed to the animation driver once per frame.
///
/// Both values are in seconds. `elapsed` is measured from clock creation and
/// is what absolute-time motion (bobbing, orbits) is computed from; `delta`
/// only feeds accumulating motion such as spin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the previous tick
    pub delta: f32,
    /// Total elapsed time since the clock started
    pub elapsed: f32,
}

impl FrameTime {
    #[must_use]
    pub const fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }

    /// Delta clamped to a finite, non-negative value.
    #[inline]
    #[must_use]
    pub fn sanitized_delta(&self) -> f32 {
        if self.delta.is_finite() { self.delta.max(0.0) } else { 0.0 }
    }
}

/// Source of monotonically increasing frame time.
pub trait Clock {
    /// Advances the clock by one frame and returns the new sample.
    fn tick(&mut self) -> FrameTime;
}

/// Wall-clock timer for tracking frame timing and elapsed time.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn frame_time(&self) -> FrameTime {
        FrameTime::new(self.delta.as_secs_f32(), self.elapsed.as_secs_f32())
    }
}

impl Clock for Timer {
    fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
        self.frame_time()
    }
}

/// Deterministic clock advancing by a fixed step per tick.
///
/// Used for replaying a scene frame-for-frame and in tests.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    elapsed: f32,
    /// Total number of ticks
    pub frame_count: u64,
}

impl FixedStepClock {
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// A clock ticking at `fps` frames per second.
    #[must_use]
    pub fn from_fps(fps: f32) -> Self {
        Self::new(if fps > 0.0 { fps.recip() } else { 0.0 })
    }

    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Clock for FixedStepClock {
    fn tick(&mut self) -> FrameTime {
        self.frame_count += 1;
        // Recompute from the frame count so long runs do not accumulate rounding.
        self.elapsed = self.step * self.frame_count as f32;
        FrameTime::new(self.step, self.elapsed)
    }
}
