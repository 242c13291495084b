// Clock service module
// Samples "now" once per pass so activity checks agree

use chrono::{Datelike, Local, Timelike};

use crate::models::deal::DayOfWeek;

/// A sampled instant: current day of week plus `HH:MM` clock time.
///
/// Deal-activity checks take a `Moment` instead of reading the system
/// clock themselves, so a whole render pass evaluates against a single
/// consistent instant even across a minute boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    pub day: DayOfWeek,
    pub time: String,
}

impl Moment {
    pub fn new(day: DayOfWeek, time: impl Into<String>) -> Self {
        Self {
            day,
            time: time.into(),
        }
    }
}

/// Source of the current moment
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> Moment;
}

/// Wall-clock implementation backed by `chrono::Local`
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Moment {
        let now = Local::now();
        Moment {
            day: DayOfWeek::from(now.weekday()),
            time: format!("{:02}:{:02}", now.hour(), now.minute()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::time_to_num;

    #[test]
    fn test_system_clock_time_format() {
        let moment = SystemClock.now();

        assert_eq!(moment.time.len(), 5);
        assert_eq!(moment.time.as_bytes()[2], b':');
        assert!(time_to_num(&moment.time) <= 2359);
    }

    #[test]
    fn test_mock_clock_pins_the_moment() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Moment::new(DayOfWeek::Monday, "17:30"));

        assert_eq!(clock.now(), Moment::new(DayOfWeek::Monday, "17:30"));
        assert_eq!(clock.now(), Moment::new(DayOfWeek::Monday, "17:30"));
    }
}
