//! Wall-clock time source port
//!
//! Time-limit checks are a pure function of `created_at` and the time
//! reported here, so tests can substitute a fixed clock.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
