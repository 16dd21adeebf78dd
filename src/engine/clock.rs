use std::cell::RefCell;

use chrono::{Local, NaiveDate};

/// Date provider injected into the account so "today" is substitutable in
/// tests. No time component, only calendar dates.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock yielding a fixed sequence of dates, then repeating the last one.
pub struct FixedClock {
    dates: RefCell<Vec<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock {
            dates: RefCell::new(vec![date]),
        }
    }

    /// Panics on an empty slice; a clock must have at least one date.
    pub fn sequence(dates: &[NaiveDate]) -> Self {
        assert!(!dates.is_empty(), "FixedClock needs at least one date");
        FixedClock {
            dates: RefCell::new(dates.to_vec()),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        let mut dates = self.dates.borrow_mut();
        if dates.len() > 1 {
            dates.remove(0)
        } else {
            dates[0]
        }
    }
}
