//! Simulated "thinking" delay before the advisor replies.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Delay applied before each advisor reply: `base` plus a random amount
/// below `jitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(800),
            jitter: Duration::from_millis(400),
        }
    }
}

impl ReplyDelay {
    /// A delay without randomness.
    pub fn fixed(base: Duration) -> Self {
        Self {
            base,
            jitter: Duration::ZERO,
        }
    }

    /// Picks the delay for one reply.
    pub fn sample(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
    }

    /// Upper bound (exclusive when jitter is non-zero) of [`sample`](Self::sample).
    pub fn max(&self) -> Duration {
        self.base + self.jitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delay_has_no_jitter() {
        let delay = ReplyDelay::fixed(Duration::from_millis(5));
        assert_eq!(delay.sample(), Duration::from_millis(5));
    }

    #[test]
    fn test_sample_stays_in_range() {
        let delay = ReplyDelay::default();
        for _ in 0..100 {
            let sampled = delay.sample();
            assert!(sampled >= delay.base);
            assert!(sampled < delay.max());
        }
    }
}
