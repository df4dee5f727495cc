/// Frame pacing toward a fixed target rate
use std::time::{Duration, Instant};

/// Measures each frame and sleeps off whatever is left of its budget
#[derive(Debug, Clone)]
pub struct FrameTimer {
    target: Duration,
    frame_start: Instant,
}

impl FrameTimer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            target: Duration::from_nanos(1_000_000_000 / target_fps.max(1) as u64),
            frame_start: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Delta used for the very first frame, before anything was measured
    pub fn initial_delta(&self) -> f32 {
        self.target.as_secs_f32()
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the frame budget after `elapsed` of work
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.target.saturating_sub(elapsed)
    }

    /// Sleep out the frame and return its full duration in seconds,
    /// measured at microsecond resolution.
    pub fn finish(&mut self) -> f32 {
        let work = self.frame_start.elapsed();
        let pause = self.remaining(work);
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        self.frame_start.elapsed().as_micros() as f32 / 1e6
    }
}

/// Frames-per-second counter refreshed once a second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count a frame; returns the new rate when the window rolls over.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let span = now.saturating_duration_since(self.window_start);
        if span.as_secs() >= 1 {
            self.fps = self.frames as f32 / span.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_fps() {
        let timer = FrameTimer::new(50);
        assert_eq!(timer.target(), Duration::from_millis(20));
        assert!((timer.initial_delta() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let timer = FrameTimer::new(0);
        assert_eq!(timer.target(), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_saturates() {
        let timer = FrameTimer::new(100);
        assert_eq!(timer.remaining(Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(timer.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_finish_paces_to_target() {
        let mut timer = FrameTimer::new(200);
        timer.begin();
        let delta = timer.finish();
        assert!(delta >= 0.005);
    }

    #[test]
    fn test_fps_counter_rolls_over_each_second() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        for i in 1..30 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 10)), None);
        }
        let fps = counter.tick(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 30.0).abs() < 1e-3);
        assert_eq!(counter.fps(), fps);
    }
}
