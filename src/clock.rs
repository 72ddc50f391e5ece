use std::time::{Duration, Instant};

/// Monotonic millisecond clock measured from the start of the session.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`SessionClock::start`].
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        duration_to_ms(self.started.elapsed())
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{SessionClock, duration_to_ms};

    #[test]
    fn clock_never_goes_backwards() {
        let clock = SessionClock::start();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
    }

    #[test]
    fn durations_truncate_to_whole_milliseconds() {
        assert_eq!(duration_to_ms(Duration::from_micros(1_999)), 1);
        assert_eq!(duration_to_ms(Duration::from_secs(5)), 5_000);
    }
}
