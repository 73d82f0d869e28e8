use std::time::{Duration, Instant};

/// A cooperative wall-clock bound shared by every iteration of one call.
///
/// Solvers poll [`Deadline::is_expired`] at well-defined points (the top of
/// each refinement pass or iteration) and return their best estimate once
/// it fires. Nothing is interrupted preemptively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// The budget given to one top-level call when none is configured.
    pub const DEFAULT_BUDGET: Duration = Duration::from_secs(5);

    /// Creates a deadline that expires `budget` from now.
    ///
    /// A budget too large to represent as an [`Instant`] never expires.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// Creates a deadline that has already expired.
    #[must_use]
    pub fn expired() -> Self {
        Self {
            expires_at: Some(Instant::now()),
        }
    }

    /// Creates a deadline that never expires.
    #[must_use]
    pub fn never() -> Self {
        Self { expires_at: None }
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    /// Returns the time left, or `None` for a deadline that never expires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires_at| expires_at.saturating_duration_since(Instant::now()))
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::after(Self::DEFAULT_BUDGET)
    }
}
