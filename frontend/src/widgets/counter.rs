//! Sampled 0 -> target count-up used by the statistics block.

use crate::config::COUNTER_FPS;

/// Milliseconds between samples at the configured frame rate.
pub fn tick_interval_ms() -> f64 {
    1000.0 / COUNTER_FPS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { tick: u32, total: u32 },
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    displayed: u32,
    phase: Phase,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            displayed: 0,
            phase: Phase::Idle,
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Idle -> Running. Returns false if the counter was already started.
    pub fn start(&mut self, duration_ms: u32) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        let total = (duration_ms as f64 / tick_interval_ms()).round().max(1.0) as u32;
        self.phase = Phase::Running { tick: 0, total };
        true
    }

    /// Advances one sample. Returns true while more ticks are expected.
    pub fn tick(&mut self) -> bool {
        let Phase::Running { tick, total } = self.phase else {
            return false;
        };
        let tick = tick + 1;
        if tick >= total {
            self.displayed = self.target;
            self.phase = Phase::Completed;
            return false;
        }
        let value = (self.target as u64 * tick as u64 / total as u64) as u32;
        self.displayed = self.displayed.max(value);
        self.phase = Phase::Running { tick, total };
        true
    }

    /// Stops sampling; the displayed value is left where it is.
    pub fn cancel(&mut self) {
        self.phase = Phase::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_to_one_hundred() {
        let mut counter = Counter::new(100);
        assert!(counter.start(1000));
        assert_eq!(counter.phase(), Phase::Running { tick: 0, total: 60 });

        let mut samples = Vec::new();
        while counter.tick() {
            samples.push(counter.displayed());
        }
        samples.push(counter.displayed());

        assert_eq!(samples.len(), 60);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        assert!(samples.iter().all(|v| *v <= 100));
        assert_eq!(samples[59], 100);
        assert_eq!(samples[0], 1);
        assert_eq!(counter.phase(), Phase::Completed);
    }

    #[test]
    fn site_duration_reaches_target_exactly() {
        let mut counter = Counter::new(3500);
        counter.start(2000);
        let mut ticks = 1;
        while counter.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 120);
        assert_eq!(counter.displayed(), 3500);
    }

    #[test]
    fn starts_only_once() {
        let mut counter = Counter::new(10);
        assert!(counter.start(100));
        counter.tick();
        assert!(!counter.start(100));
        assert_eq!(counter.phase(), Phase::Running { tick: 1, total: 6 });
    }

    #[test]
    fn tick_before_start_is_noop() {
        let mut counter = Counter::new(98);
        assert!(!counter.tick());
        assert_eq!(counter.displayed(), 0);
        assert_eq!(counter.phase(), Phase::Idle);
    }

    #[test]
    fn cancel_freezes_value() {
        let mut counter = Counter::new(250);
        counter.start(1000);
        for _ in 0..10 {
            counter.tick();
        }
        let frozen = counter.displayed();
        counter.cancel();
        assert!(!counter.tick());
        assert_eq!(counter.displayed(), frozen);
        assert!(!counter.start(1000));
    }

    #[test]
    fn tiny_duration_completes_on_first_tick() {
        let mut counter = Counter::new(7);
        counter.start(0);
        assert!(!counter.tick());
        assert_eq!(counter.displayed(), 7);
    }
}
