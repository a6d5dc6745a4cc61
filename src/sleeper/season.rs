//! NFL fantasy season resolution.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SleeperError};

/// Earliest and latest seasons accepted from callers.
pub const MIN_SEASON: u16 = 1999;
pub const MAX_SEASON: u16 = 2050;

/// Last month (July) that still belongs to the previous year's season.
const OFFSEASON_LAST_MONTH: u32 = 7;

/// Type-safe wrapper for season years.
///
/// Displays as the 4-digit year Sleeper expects in league lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Season in progress on `date`.
    ///
    /// A season runs from September into the following February, so January
    /// through July still count toward the previous year.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        let year = if date.month() <= OFFSEASON_LAST_MONTH {
            year - 1
        } else {
            year
        };
        Self(year as u16)
    }

    /// Season in progress today (local time).
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    /// Accepts exactly four digits within [`MIN_SEASON`]..=[`MAX_SEASON`].
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SleeperError::InvalidSeason {
            season: s.to_string(),
        };

        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: u16 = s.parse().map_err(|_| invalid())?;
        if (MIN_SEASON..=MAX_SEASON).contains(&year) {
            Ok(Self(year))
        } else {
            Err(invalid())
        }
    }
}
