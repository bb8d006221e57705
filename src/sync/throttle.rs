//! Per-viewport rate limiting of change-driven sync.

use web_time::{Duration, Instant};

/// Smallest accepted window, in milliseconds.
pub const MIN_FREQUENCY_MS: i64 = 100;
/// Largest accepted window, in milliseconds.
pub const MAX_FREQUENCY_MS: i64 = 1000;

/// Admits at most `floor(1000 / frequency_ms)` executions per window of
/// `frequency_ms` milliseconds and drops the rest.
///
/// Dropped calls are never queued or replayed. A frequency of 0 disables
/// sync for the viewport entirely.
#[derive(Debug, Clone)]
pub struct ChangeThrottle {
    frequency: Option<Duration>,
    execution_limit: u32,
    window_start: Option<Instant>,
    execution_count: u32,
}

impl ChangeThrottle {
    /// Throttle for a window of `frequency_ms` milliseconds.
    ///
    /// Non-zero values outside `[100, 1000]` are clamped into range.
    #[must_use]
    pub fn new(frequency_ms: i64) -> Self {
        if frequency_ms == 0 {
            return Self {
                frequency: None,
                execution_limit: 0,
                window_start: None,
                execution_count: 0,
            };
        }

        let clamped = frequency_ms.clamp(MIN_FREQUENCY_MS, MAX_FREQUENCY_MS);
        if clamped != frequency_ms {
            log::warn!(
                "sync frequency {frequency_ms} ms out of range, using {clamped} ms"
            );
        }
        let millis = clamped.unsigned_abs();
        let execution_limit = u32::try_from(1000 / millis).unwrap_or(1);

        Self {
            frequency: Some(Duration::from_millis(millis)),
            execution_limit,
            window_start: None,
            execution_count: 0,
        }
    }

    /// Whether this throttle lets anything through at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.frequency.is_some()
    }

    /// Window length, `None` when disabled.
    #[must_use]
    pub fn frequency(&self) -> Option<Duration> {
        self.frequency
    }

    /// Executions admitted per window.
    #[must_use]
    pub fn execution_limit(&self) -> u32 {
        self.execution_limit
    }

    /// Decide whether a change notification at `now` may run.
    ///
    /// The first call ever is admitted. A call at least one window after
    /// the last window start opens a new window.
    pub fn admit(&mut self, now: Instant) -> bool {
        let Some(frequency) = self.frequency else {
            return false;
        };

        let window_elapsed = self.window_start.is_none_or(|start| {
            now.saturating_duration_since(start) >= frequency
        });
        if window_elapsed {
            self.window_start = Some(now);
            self.execution_count = 0;
        }

        if self.execution_count < self.execution_limit {
            self.execution_count += 1;
            true
        } else {
            log::trace!(
                "sync dropped: {} executions this window",
                self.execution_count
            );
            false
        }
    }

    /// Forget the current window.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.execution_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_are_capped_per_window() {
        let start = Instant::now();
        let mut throttle = ChangeThrottle::new(100);
        assert_eq!(throttle.execution_limit(), 10);

        let admitted: Vec<bool> = (0..20)
            .map(|i| throttle.admit(start + Duration::from_millis(i * 5)))
            .collect();
        assert_eq!(admitted.iter().filter(|a| **a).count(), 10);
        assert!(admitted[..10].iter().all(|a| *a));
        assert!(admitted[10..].iter().all(|a| !*a));

        assert!(throttle.admit(start + Duration::from_millis(100)));
    }

    #[test]
    fn zero_frequency_disables_sync() {
        let mut throttle = ChangeThrottle::new(0);
        assert!(!throttle.is_enabled());
        assert!(!throttle.admit(Instant::now()));
    }

    #[test]
    fn out_of_range_frequencies_are_clamped() {
        let slow = ChangeThrottle::new(5000);
        assert_eq!(slow.frequency(), Some(Duration::from_millis(1000)));
        assert_eq!(slow.execution_limit(), 1);

        let fast = ChangeThrottle::new(10);
        assert_eq!(fast.frequency(), Some(Duration::from_millis(100)));

        let negative = ChangeThrottle::new(-50);
        assert_eq!(negative.frequency(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn reset_opens_a_fresh_window() {
        let start = Instant::now();
        let mut throttle = ChangeThrottle::new(1000);
        assert!(throttle.admit(start));
        assert!(!throttle.admit(start + Duration::from_millis(10)));
        throttle.reset();
        assert!(throttle.admit(start + Duration::from_millis(20)));
    }
}
