//! The calendar date stamped into `<lastmod>` elements.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A `YYYY-MM-DD` stamp shared by every entry touched in one run.
///
/// Transforms take the stamp as a parameter so a run can be pinned to a
/// specific day (tests, reproducible CI jobs) instead of reading the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StampDate(NaiveDate);

impl StampDate {
    /// Wrap an existing calendar date.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The underlying calendar date.
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for StampDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for StampDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; a stamp must be exactly ten characters
        if trimmed.len() != 10 {
            return Err(Error::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }
}
