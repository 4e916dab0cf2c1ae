use std::time::Instant;

/// Wall-clock time between consecutive ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl FrameClock {
    pub fn starting_at(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous call.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn reports_elapsed_seconds_between_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-9);
        let dt = clock.tick_at(start + Duration::from_millis(266));
        assert!((dt - 0.016).abs() < 1e-9);
    }

    #[test]
    fn never_goes_backwards() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.tick_at(start - Duration::from_millis(10)), 0.0);
    }
}
