//! Wall-clock [`Clock`] adapter.

use chrono::{DateTime, Utc};
use ladder_application::ports::clock::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
