//! Time source for migration timestamps.

use chrono::{Local, NaiveDateTime};

/// Supplies the moment a migration is created
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same moment
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_through_reference() {
        let moment = NaiveDate::from_ymd_opt(2013, 1, 9)
            .unwrap()
            .and_hms_opt(8, 5, 3)
            .unwrap();
        let clock = FixedClock(moment);
        let by_ref: &dyn Clock = &clock;

        assert_eq!(clock.now(), moment);
        assert_eq!((&by_ref).now(), moment);
    }

    #[test]
    fn test_system_clock_does_not_go_backwards() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
