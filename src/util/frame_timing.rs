//! Frame pacing and FPS tracking for the animation loop.

use web_time::{Duration, Instant};

/// Pass pacing for the animation loop.
///
/// With a target of 0 every scheduled pass renders; otherwise passes arriving
/// before the frame budget has elapsed are skipped (the loop still
/// reschedules). Also tracks a smoothed FPS for diagnostics.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Minimum duration between rendered passes (zero = unlimited)
    min_frame_duration: Duration,
    /// Timestamp of the last rendered pass
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Rendered passes so far
    frames: u64,
}

impl FrameTiming {
    /// Create a pacer for the given FPS target (0 = every display frame).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether a pass arriving at `now` should simulate and draw.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        match self.last_frame {
            None => true,
            Some(_) if self.min_frame_duration.is_zero() => true,
            Some(last) => {
                now.saturating_duration_since(last) >= self.min_frame_duration
            }
        }
    }

    /// Record a rendered pass at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let frame_time = now.saturating_duration_since(last).as_secs_f32();
            if frame_time > 0.0 {
                let instant_fps = 1.0 / frame_time;
                self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                    + instant_fps * self.smoothing;
            }
        }
        self.last_frame = Some(now);
        self.frames += 1;
    }

    /// Smoothed rendered passes per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of rendered passes.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
