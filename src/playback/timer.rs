//! Pausable stopwatch
//!
//! Accumulates only the time between `resume` and `pause`, so frame-pacing
//! waits are excluded from the reported algorithm time. Timestamps are
//! milliseconds from the driver's [`Clock`](super::Clock).

#[derive(Debug, Clone, Default)]
pub struct Timer {
    running: bool,
    elapsed_ms: f64,
    started_at: f64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the total and start running from `now`
    pub fn start(&mut self, now: f64) {
        self.running = true;
        self.elapsed_ms = 0.0;
        self.started_at = now;
    }

    /// Zero the total and leave the timer paused
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0.0;
    }

    pub fn resume(&mut self, now: f64) {
        if !self.running {
            self.running = true;
            self.started_at = now;
        }
    }

    pub fn pause(&mut self, now: f64) {
        if self.running {
            self.running = false;
            self.elapsed_ms += now - self.started_at;
        }
    }

    /// Stop and return the total.
    ///
    /// Only a running timer reports; stopping a paused timer yields `None`.
    pub fn stop(&mut self, now: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.elapsed_ms += now - self.started_at;
        Some(self.elapsed_ms)
    }

    /// Total so far, without changing state
    pub fn elapsed(&self, now: f64) -> f64 {
        if self.running {
            self.elapsed_ms + (now - self.started_at)
        } else {
            self.elapsed_ms
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
