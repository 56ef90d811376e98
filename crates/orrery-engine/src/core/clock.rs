/// Simulated-time accumulator.
///
/// Advances by a fixed increment scaled by the current speed multiplier,
/// once per display-refresh callback. The increment is deliberately coupled
/// to callback count rather than wall-clock delta: perceived speed tracks
/// the display refresh rate, matching the reference behavior.
pub struct SimClock {
    /// Accumulated simulated time. Monotone non-decreasing between resets.
    time: f64,
}

/// Simulated-time increment per frame at speed 1.0.
pub const TIME_STEP: f64 = 0.01;

impl SimClock {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Advance the accumulator by one frame at the given speed multiplier.
    pub fn step(&mut self, speed: f64) {
        self.time += TIME_STEP * speed;
    }

    /// Current simulated time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Reset the accumulator to zero. Called on every scene rebuild.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SimClock::new().time(), 0.0);
    }

    #[test]
    fn k_steps_at_speed_s() {
        let mut clock = SimClock::new();
        for _ in 0..100 {
            clock.step(2.5);
        }
        assert!((clock.time() - TIME_STEP * 2.5 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn doubling_speed_doubles_growth() {
        let mut slow = SimClock::new();
        let mut fast = SimClock::new();
        for _ in 0..50 {
            slow.step(1.0);
            fast.step(2.0);
        }
        assert!((fast.time() - 2.0 * slow.time()).abs() < 1e-9);
    }

    #[test]
    fn speed_change_takes_effect_immediately() {
        let mut clock = SimClock::new();
        clock.step(1.0);
        clock.step(10.0);
        assert!((clock.time() - TIME_STEP * 11.0).abs() < 1e-9);
    }

    #[test]
    fn reset_zeroes_accumulator() {
        let mut clock = SimClock::new();
        clock.step(5.0);
        clock.reset();
        assert_eq!(clock.time(), 0.0);
    }
}
