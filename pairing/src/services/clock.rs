use chrono::{DateTime, Utc};

use crate::traits::Clock;

/// Wall-clock time in UTC
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
