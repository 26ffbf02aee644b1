use std::time::{Duration, Instant};

/// Smoothed frames-per-second estimate for an on-screen readout.
///
/// Each call to [`tick`](Self::tick) measures the interval since the previous
/// one and folds it into an exponential moving average of the frame period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate {
    last: Option<Instant>,
    period: Option<f64>,
    smoothing: f64,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl FrameRate {
    /// Creates a meter that weights each new interval by `smoothing`.
    ///
    /// The weight is clamped to `(0, 1]`; 1 disables smoothing.
    #[must_use]
    pub fn new(smoothing: f64) -> Self {
        Self {
            last: None,
            period: None,
            smoothing: if smoothing > 0.0 { smoothing.min(1.0) } else { 1.0 },
        }
    }

    /// Records a frame at `now` and returns the current estimate.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        if let Some(last) = self.last.replace(now) {
            let interval = now.saturating_duration_since(last).as_secs_f64();
            self.period = Some(match self.period {
                Some(period) => period + self.smoothing * (interval - period),
                None => interval,
            });
        }
        self.fps()
    }

    /// Frames per second, once two frames have been seen.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.period.filter(|p| *p > 0.0).map(|p| 1.0 / p)
    }

    /// Average frame period.
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.period.map(Duration::from_secs_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn needs_two_frames() {
        let mut meter = FrameRate::default();
        assert_eq!(meter.tick(Instant::now()), None);
    }

    #[test]
    fn steady_frames_report_their_rate() {
        let mut meter = FrameRate::new(0.5);
        let start = Instant::now();

        for i in 0..=10 {
            meter.tick(start + Duration::from_millis(20 * i));
        }

        assert_relative_eq!(meter.fps().unwrap(), 50.0, max_relative = 1e-9);
    }

    #[test]
    fn smoothing_damps_a_single_slow_frame() {
        let mut meter = FrameRate::new(0.1);
        let start = Instant::now();

        meter.tick(start);
        meter.tick(start + Duration::from_millis(10));
        meter.tick(start + Duration::from_millis(110));

        // Period moves a tenth of the way from 10 ms toward 100 ms.
        assert_relative_eq!(meter.fps().unwrap(), 1.0 / 0.019, max_relative = 1e-9);
    }

    #[test]
    fn repeated_instant_has_no_rate() {
        let mut meter = FrameRate::new(1.0);
        let now = Instant::now();

        meter.tick(now);
        assert_eq!(meter.tick(now), None);
    }
}
