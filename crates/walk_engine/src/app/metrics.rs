use std::time::{Duration, Instant};

/// Loop rates over one reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopStats {
    pub fps: f32,
    pub tps: f32,
    pub mean_frame_ms: f32,
    pub worst_frame_ms: f32,
    /// Frames whose tick backlog was cut short by the per-frame tick cap.
    pub clamped_frames: u32,
}

/// Counts frames and ticks until the reporting window has elapsed.
#[derive(Debug)]
pub(crate) struct StatsWindow {
    opened_at: Instant,
    length: Duration,
    frames: u32,
    ticks: u32,
    clamped_frames: u32,
    total_frame_time: Duration,
    worst_frame_time: Duration,
}

impl StatsWindow {
    pub(crate) fn open(opened_at: Instant, length: Duration) -> Self {
        Self {
            opened_at,
            length,
            frames: 0,
            ticks: 0,
            clamped_frames: 0,
            total_frame_time: Duration::ZERO,
            worst_frame_time: Duration::ZERO,
        }
    }

    pub(crate) fn frame(&mut self, frame_time: Duration, clamped: bool) {
        self.frames = self.frames.saturating_add(1);
        self.total_frame_time = self.total_frame_time.saturating_add(frame_time);
        self.worst_frame_time = self.worst_frame_time.max(frame_time);
        if clamped {
            self.clamped_frames = self.clamped_frames.saturating_add(1);
        }
    }

    pub(crate) fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    /// Closes the window and starts the next one once `length` has passed.
    pub(crate) fn close_if_due(&mut self, now: Instant) -> Option<LoopStats> {
        let elapsed = now.saturating_duration_since(self.opened_at);
        if elapsed < self.length {
            return None;
        }

        let seconds = elapsed.as_secs_f32().max(f32::EPSILON);
        let mean_frame_ms = match self.frames {
            0 => 0.0,
            frames => self.total_frame_time.as_secs_f32() * 1000.0 / frames as f32,
        };
        let stats = LoopStats {
            fps: self.frames as f32 / seconds,
            tps: self.ticks as f32 / seconds,
            mean_frame_ms,
            worst_frame_ms: self.worst_frame_time.as_secs_f32() * 1000.0,
            clamped_frames: self.clamped_frames,
        };
        *self = Self::open(now, self.length);
        Some(stats)
    }
}
