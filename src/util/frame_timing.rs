use web_time::{Duration, Instant};

/// Frame clock for the render loop: per-frame delta, smoothed FPS, and
/// optional frame limiting.
///
/// This is the only place wall-clock time is read.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Largest delta handed to animation in one frame, in seconds.
    max_delta: f32,
}

impl FrameTiming {
    /// Longest step a single frame may advance animations by. Keeps a
    /// stalled host (debugger, backgrounded tab) from teleporting tweens.
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            max_delta: Self::DEFAULT_MAX_DELTA,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Minimum time between frames (zero when unlimited).
    #[must_use]
    pub fn min_frame_duration(&self) -> Duration {
        self.min_frame_duration
    }

    /// Mark the start of a frame at `now` and return the clamped delta in
    /// seconds since the previous frame.
    pub fn begin_frame_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(self.max_delta)
    }

    /// [`begin_frame_at`](Self::begin_frame_at) with the current time.
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
