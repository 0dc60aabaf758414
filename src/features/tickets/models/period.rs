use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};

use crate::core::error::{AppError, Result};

/// A ticket numbering period: one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub const MIN_YEAR: i32 = 2000;
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(AppError::Validation(format!(
                "Year must be between {} and {}, got {}",
                Self::MIN_YEAR,
                Self::MAX_YEAR,
                year
            )));
        }
        Ok(Self { year, month })
    }

    /// The period a local date-time falls into
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    /// The current period as seen from the business timezone
    pub fn current(offset: FixedOffset) -> Self {
        Self::from_datetime(&Utc::now().with_timezone(&offset))
    }

    /// The period immediately after this one
    #[cfg(test)]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
