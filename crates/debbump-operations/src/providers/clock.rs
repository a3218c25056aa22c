use chrono::Local;

use debbump_changelog::Timestamp;

use crate::traits::Clock;

/// Local wall-clock time, as `date -R` would print it.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(&Local::now())
    }
}
