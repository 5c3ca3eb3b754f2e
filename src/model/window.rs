use crate::model::{Error, Result};
use chrono::{Days, NaiveDate};

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Inclusive range of calendar dates in the display timezone.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DueWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// Create
impl DueWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Everything due today or already overdue.
    pub fn until_today(today: NaiveDate) -> Self {
        Self::new(NaiveDate::MIN, today)
    }

    pub fn tomorrow(today: NaiveDate) -> Self {
        Self::single(today + Days::new(1))
    }

    /// Overdue cards plus the next seven days.
    pub fn week(today: NaiveDate) -> Self {
        Self::new(NaiveDate::MIN, today + Days::new(7))
    }

    pub fn parse_date(input: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
            Error::DateParse {
                input: input.to_string(),
            }
        })?;
        Ok(Self::single(date))
    }
}

impl DueWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
