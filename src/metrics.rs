use std::collections::VecDeque;
use std::time::{Duration, Instant};

const ROLLING_WINDOW_DURATION: Duration = Duration::from_secs(1);
const MAX_ROLLING_WINDOW_SAMPLE_COUNT: usize = 4_096;

#[derive(Debug, Clone, Copy)]
struct FrameSample {
    presented_at: Instant,
    frame_duration: Duration,
}

/// Frame timing for a render loop that fills and presents a [`FrameBuffer`](crate::FrameBuffer).
///
/// A frame is measured from the start of the loop iteration (advance + fill)
/// to the moment it was presented.
#[derive(Debug)]
pub struct RenderLoopMetrics {
    total_frame_count: u64,
    total_frame_duration: Duration,
    first_frame_started_at: Option<Instant>,
    last_frame_presented_at: Option<Instant>,
    rolling_samples: VecDeque<FrameSample>,
    rolling_total_duration: Duration,
}

impl Default for RenderLoopMetrics {
    fn default() -> Self {
        Self {
            total_frame_count: 0,
            total_frame_duration: Duration::ZERO,
            first_frame_started_at: None,
            last_frame_presented_at: None,
            rolling_samples: VecDeque::with_capacity(256),
            rolling_total_duration: Duration::ZERO,
        }
    }
}

impl RenderLoopMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn remove_oldest_sample(&mut self) {
        if let Some(oldest) = self.rolling_samples.pop_front() {
            self.rolling_total_duration = self
                .rolling_total_duration
                .saturating_sub(oldest.frame_duration);
        }
    }

    fn prune_rolling_window(&mut self, now: Instant) {
        while let Some(oldest) = self.rolling_samples.front() {
            if now.saturating_duration_since(oldest.presented_at) <= ROLLING_WINDOW_DURATION {
                break;
            }
            self.remove_oldest_sample();
        }
    }

    pub fn record_frame(&mut self, started_at: Instant, presented_at: Instant) {
        let frame_duration = presented_at.saturating_duration_since(started_at);

        if self.first_frame_started_at.is_none() {
            self.first_frame_started_at = Some(started_at);
        }
        self.last_frame_presented_at = Some(presented_at);
        self.total_frame_count += 1;
        self.total_frame_duration += frame_duration;

        if self.rolling_samples.len() == MAX_ROLLING_WINDOW_SAMPLE_COUNT {
            self.remove_oldest_sample();
        }
        self.rolling_samples.push_back(FrameSample {
            presented_at,
            frame_duration,
        });
        self.rolling_total_duration += frame_duration;
        self.prune_rolling_window(presented_at);
    }

    /// Frames per second since the first recorded frame started.
    pub fn average_frames_per_second(&self) -> f64 {
        let (Some(first), Some(last)) = (self.first_frame_started_at, self.last_frame_presented_at)
        else {
            return 0.0;
        };

        let elapsed = last.saturating_duration_since(first).as_secs_f64();
        if elapsed == 0.0 {
            return 0.0;
        }
        self.total_frame_count as f64 / elapsed
    }

    pub fn average_frame_duration(&self) -> Duration {
        if self.total_frame_count == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(
            self.total_frame_duration.as_secs_f64() / self.total_frame_count as f64,
        )
    }

    /// Frames presented during the last second.
    pub fn rolling_frames_per_second(&self) -> f64 {
        self.rolling_samples.len() as f64
    }

    pub fn rolling_average_frame_duration(&self) -> Duration {
        if self.rolling_samples.is_empty() {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(
            self.rolling_total_duration.as_secs_f64() / self.rolling_samples.len() as f64,
        )
    }

    pub fn total_frame_count(&self) -> u64 {
        self.total_frame_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
