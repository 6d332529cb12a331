//! Injectable time source.

use chrono::{DateTime, Utc};

/// Time source used to stamp purchase records.
///
/// The machine never reads the wall clock directly; it asks the clock it was
/// constructed with. Tests substitute a fixed instant so purchase timing is
/// deterministic.
pub trait Clock: Send + Sync {
    /// Current business time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
