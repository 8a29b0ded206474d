//! Value records of the site's JSON feeds (hotness, trends, geek lists).

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ParseTagError;

/// A hotness entry: thing id and its movement on the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdDelta {
    pub id: i64,
    pub delta: i64,
}

/// A trend entry (best sellers, most played, trending plays).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendOutput {
    pub id: i64,
    pub delta: i64,
    pub appearances: i64,
}

/// An entry of a geek list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Reporting window of the trend feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendInterval {
    Week,
    Month,
}

impl TrendInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Snap `date` to the start of the window containing it: the Monday on
    /// or before it for weeks, the first of the month for months.
    pub fn window_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Week => previous_weekday(date, Weekday::Mon),
            Self::Month => date.with_day(1).unwrap_or(date),
        }
    }
}

impl std::fmt::Display for TrendInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrendInterval {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseTagError::new("trend interval", s)),
        }
    }
}

/// The latest `day` on or before `date`.
pub fn previous_weekday(date: NaiveDate, day: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_monday() - day.num_days_from_monday()) % 7;
    date - chrono::Duration::days(back as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_snaps_back_to_monday() {
        // 2024-05-15 is a Wednesday.
        assert_eq!(TrendInterval::Week.window_start(d(2024, 5, 15)), d(2024, 5, 13));
        // A Monday stays put.
        assert_eq!(TrendInterval::Week.window_start(d(2024, 5, 13)), d(2024, 5, 13));
        // Sunday goes back six days.
        assert_eq!(TrendInterval::Week.window_start(d(2024, 5, 19)), d(2024, 5, 13));
    }

    #[test]
    fn month_snaps_to_first_day() {
        assert_eq!(TrendInterval::Month.window_start(d(2024, 2, 29)), d(2024, 2, 1));
    }

    #[test]
    fn interval_parse() {
        assert_eq!("Week".parse::<TrendInterval>().unwrap(), TrendInterval::Week);
        assert!("year".parse::<TrendInterval>().is_err());
    }
}
