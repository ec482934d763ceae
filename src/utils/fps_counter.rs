/// Rolling frame-rate estimate fed with per-frame deltas.
///
/// Deltas come from whatever [`Clock`](super::Clock) drives the app, so the
/// estimate is deterministic under a [`FixedStepClock`](super::FixedStepClock).
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frame_count: u32,
    accumulated_time: f32,
    pub current_fps: f32,
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame. Returns the new estimate once per second of accumulated time.
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_time += delta.max(0.0);

        if self.accumulated_time >= 1.0 {
            self.current_fps = self.frame_count as f32 / self.accumulated_time;

            self.accumulated_time = 0.0;
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }
}
