use std::time::Duration;

/// Fixed-interval polling policy for a bulk job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_attempts: 60,
        }
    }
}

impl PollOptions {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Number of status checks allowed; never below one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Time spent sleeping once every attempt has been used. The first
    /// check is immediate, so there is one sleep fewer than checks.
    pub fn ceiling(&self) -> Duration {
        self.interval * (self.attempts() - 1)
    }
}
