/// Simulated-time accumulator driven once per rendered frame.
///
/// Each tick advances `elapsed` by `base_tick * speed`. The clock never looks at
/// wall-clock deltas: one call to [`SimulationClock::advance`] is one frame.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    base_tick: f64,
    elapsed: f64,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(base_tick: f64) -> Self {
        Self {
            base_tick,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Advance by one tick at the given speed. Returns the new elapsed time.
    pub fn advance(&mut self, speed: Speed) -> f64 {
        self.elapsed += self.base_tick * speed.value();
        self.ticks += 1;
        self.elapsed
    }

    /// Accumulated simulated time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn base_tick(&self) -> f64 {
        self.base_tick
    }
}

/// Speed multiplier for the simulation clock.
///
/// Adjusted in fixed steps. A decrease that would land at or below the floor is
/// ignored, so the value always stays strictly above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    value: f64,
    step: f64,
    floor: f64,
}

impl Speed {
    pub fn new(value: f64, step: f64, floor: f64) -> Self {
        let value = if value > floor { value } else { floor + step };
        Self { value, step, floor }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn increased(self) -> Self {
        Self {
            value: self.value + self.step,
            ..self
        }
    }

    pub fn decreased(self) -> Self {
        let value = self.value - self.step;
        if value > self.floor {
            Self { value, ..self }
        } else {
            self
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new(1.0, 0.2, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_scales_by_speed() {
        let mut clock = SimulationClock::new(0.09);
        clock.advance(Speed::default());
        assert!((clock.elapsed() - 0.09).abs() < 1e-12);

        let fast = Speed::default().increased().increased();
        clock.advance(fast);
        assert!((clock.elapsed() - (0.09 + 0.09 * 1.4)).abs() < 1e-12);
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = SimulationClock::new(0.09);
        let mut speed = Speed::default();
        let mut last = clock.elapsed();
        for i in 0..50 {
            speed = if i % 3 == 0 { speed.decreased() } else { speed.increased() };
            let now = clock.advance(speed);
            assert!(now > last);
            last = now;
        }
    }

    #[test]
    fn decrease_never_reaches_floor() {
        let mut speed = Speed::default();
        for _ in 0..100 {
            speed = speed.decreased();
            assert!(speed.value() > speed.floor(), "speed {} hit floor", speed.value());
        }
        assert!((speed.value() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn increase_is_unbounded() {
        let mut speed = Speed::default();
        for _ in 0..1000 {
            speed = speed.increased();
        }
        assert!((speed.value() - 201.0).abs() < 1e-6);
    }

    #[test]
    fn new_lifts_value_above_floor() {
        let speed = Speed::new(0.0, 0.2, 0.1);
        assert!(speed.value() > speed.floor());
    }
}
