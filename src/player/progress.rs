use std::time::{Duration, Instant};

/// How often the progress display is refreshed while playing
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// One reading of the engine offset, pushed to the progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSample {
    pub position_ms: u64,
    pub duration_ms: Option<u64>,
}

impl ProgressSample {
    /// Get playback progress as a ratio (0.0 - 1.0), zero when length is unknown
    pub fn fraction(&self) -> f32 {
        match self.duration_ms {
            Some(duration) if duration > 0 => {
                (self.position_ms as f64 / duration as f64).clamp(0.0, 1.0) as f32
            }
            _ => 0.0,
        }
    }

    /// Get formatted position and length, e.g. `01:05 / 03:20`
    pub fn label(&self) -> String {
        let total = self
            .duration_ms
            .map(format_clock)
            .unwrap_or_else(|| "--:--".to_owned());
        format!("{} / {}", format_clock(self.position_ms), total)
    }
}

/// Format milliseconds as MM:SS
pub fn format_clock(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Cancellable periodic task driven by the UI frame loop.
///
/// Nothing runs in the background: the owner polls it with the current
/// time and does the sampling work whenever `poll` says a tick is due.
#[derive(Debug, Clone)]
pub struct ProgressTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for ProgressTimer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_INTERVAL)
    }
}

impl ProgressTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the first tick one interval from `now`. Restarting is harmless.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true once per elapsed interval and reschedules itself
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when cancelled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new(Duration::from_millis(500));
        assert!(!timer.poll(start));

        timer.start(start);
        assert!(timer.is_running());
        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + Duration::from_millis(500)));
        assert!(!timer.poll(start + Duration::from_millis(600)));
        assert!(timer.poll(start + Duration::from_millis(1000)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = ProgressTimer::default();
        timer.start(start);
        timer.cancel();
        assert!(!timer.is_running());
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert_eq!(timer.time_until_due(start), None);
    }

    #[test]
    fn time_until_due_counts_down() {
        let start = Instant::now();
        let mut timer = ProgressTimer::new(Duration::from_millis(500));
        timer.start(start);
        assert_eq!(
            timer.time_until_due(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(
            timer.time_until_due(start + Duration::from_secs(2)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn sample_formatting() {
        let sample = ProgressSample {
            position_ms: 65_400,
            duration_ms: Some(200_000),
        };
        assert_eq!(sample.label(), "01:05 / 03:20");
        assert!((sample.fraction() - 0.327).abs() < 1e-6);

        let unknown = ProgressSample {
            position_ms: 3_000,
            duration_ms: None,
        };
        assert_eq!(unknown.label(), "00:03 / --:--");
        assert_eq!(unknown.fraction(), 0.0);
    }
}
