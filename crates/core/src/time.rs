use chrono::{DateTime, Utc};

/// Wall-clock source used for interview start and completion timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Whole-second counter driven by an external once-per-second tick.
///
/// The timer never reads the clock itself: the host decides when a second has
/// passed and calls [`ElapsedTimer::tick`]. Once stopped it ignores ticks for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTimer {
    seconds: u32,
    running: bool,
}

impl ElapsedTimer {
    /// A running timer at zero seconds.
    #[must_use]
    pub fn started() -> Self {
        Self {
            seconds: 0,
            running: true,
        }
    }

    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_counts_ticks_until_stopped() {
        let mut timer = ElapsedTimer::started();
        timer.tick();
        timer.tick();
        assert_eq!(timer.seconds(), 2);

        timer.stop();
        timer.tick();
        assert_eq!(timer.seconds(), 2);
        assert!(!timer.is_running());
    }

    #[test]
    fn fixed_clock_does_not_move() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), FIXED_TEST_TIMESTAMP);
    }
}
