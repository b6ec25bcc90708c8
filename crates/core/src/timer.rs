//! Descent scheduling
//!
//! Gravity is modelled as an accumulating millisecond counter rather than a
//! wall-clock callback. The terminal loop feeds real elapsed time; tests can
//! feed exact amounts or bypass the timer and tick directly.

/// Fixed-interval descent timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescentTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl DescentTimer {
    /// Create a disarmed timer
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Milliseconds accumulated toward the next tick
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Start a fresh schedule, discarding any pending progress.
    pub fn arm(&mut self) {
        self.elapsed_ms = 0;
        self.armed = true;
    }

    /// Stop the schedule. Pending progress is dropped.
    pub fn cancel(&mut self) {
        self.elapsed_ms = 0;
        self.armed = false;
    }

    /// Accumulate `elapsed_ms` and return how many intervals completed.
    ///
    /// A disarmed timer never fires.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        let total = self.elapsed_ms.saturating_add(elapsed_ms);
        self.elapsed_ms = total % self.interval_ms;
        total / self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = DescentTimer::new(1000);
        assert_eq!(timer.advance(5000), 0);
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut timer = DescentTimer::new(1000);
        timer.arm();
        assert_eq!(timer.advance(999), 0);
        assert_eq!(timer.advance(1), 1);
        assert_eq!(timer.advance(2500), 2);
        assert_eq!(timer.elapsed_ms(), 500);
    }

    #[test]
    fn rearm_discards_pending_progress() {
        let mut timer = DescentTimer::new(1000);
        timer.arm();
        timer.advance(900);
        timer.arm();
        assert_eq!(timer.advance(200), 0);
    }

    #[test]
    fn cancel_stops_schedule() {
        let mut timer = DescentTimer::new(1000);
        timer.arm();
        timer.advance(900);
        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(timer.advance(1000), 0);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let timer = DescentTimer::new(0);
        assert_eq!(timer.interval_ms(), 1);
    }
}
