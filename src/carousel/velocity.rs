use std::collections::VecDeque;

/// Rolling window of pointer samples used to estimate release velocity.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<(f32, f64)>,
    window_ms: f64,
}

impl VelocityTracker {
    /// Tracker keeping samples no older than `window_ms` behind the newest.
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self {
            samples: VecDeque::new(),
            window_ms,
        }
    }

    /// Change the window length. Existing samples are kept until the next
    /// push or query prunes them.
    pub fn set_window(&mut self, window_ms: f64) {
        self.window_ms = window_ms;
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Record pointer `x` at `time_ms`.
    pub fn push(&mut self, x: f32, time_ms: f64) {
        self.samples.push_back((x, time_ms));
        self.prune(time_ms);
    }

    /// Horizontal velocity in pixels per millisecond as of `now_ms`,
    /// measured oldest-to-newest over the samples still in the window.
    ///
    /// Zero with fewer than two samples or a zero time span.
    pub fn velocity(&mut self, now_ms: f64) -> f32 {
        self.prune(now_ms);
        let (Some(&(first_x, first_t)), Some(&(last_x, last_t))) =
            (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let span = last_t - first_t;
        if self.samples.len() < 2 || span <= 0.0 {
            return 0.0;
        }
        ((f64::from(last_x) - f64::from(first_x)) / span) as f32
    }

    fn prune(&mut self, now_ms: f64) {
        while let Some(&(_, t)) = self.samples.front() {
            if now_ms - t > self.window_ms {
                let _ = self.samples.pop_front();
            } else {
                break;
            }
        }
    }
}
