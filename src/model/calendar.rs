use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a month grid is padded.
///
/// The two policies are deliberately distinct (they came from two different
/// views) and are selected per workspace in `[calendar]` config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPolicy {
    /// Always 42 cells (6 rows x 7 columns): trailing days of the previous
    /// month, the current month, leading days of the next month.
    Fixed,
    /// Leading blanks up to the first weekday, then the days of the month.
    /// No trailing padding; length varies with the month.
    Flow,
}

/// One cell of a rendered month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Flow-policy padding before the 1st
    Blank,
    Day {
        date: NaiveDate,
        /// False for the fixed policy's out-of-month filler days
        in_month: bool,
    },
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn is_in_month(&self) -> bool {
        matches!(self, CalendarCell::Day { in_month: true, .. })
    }
}

/// A built month grid. Derived data, rebuilt on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthRef,
    pub policy: GridPolicy,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Rows of seven cells, top to bottom. The flow policy's last row may be
    /// short.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }
}

/// A year/month pair that is valid by construction.
///
/// Only obtainable from a date or by stepping, so `first_day` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> MonthRef {
        MonthRef {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        // Safe: month is always 1..=12 by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Number of days in this month (28..=31)
    pub fn day_count(&self) -> u32 {
        (self.next().first_day() - self.first_day()).num_days() as u32
    }

    pub fn next(&self) -> MonthRef {
        if self.month == 12 {
            MonthRef {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> MonthRef {
        if self.month == 1 {
            MonthRef {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header label, e.g. "March 2026"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_ref_stepping() {
        let dec = MonthRef::containing(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
        let jan = dec.next();
        assert_eq!((jan.year(), jan.month()), (2026, 1));
        assert_eq!(jan.prev(), dec);

        let feb = jan.next();
        assert_eq!((feb.year(), feb.month()), (2026, 2));
    }

    #[test]
    fn test_day_count() {
        let feb_leap = MonthRef::containing(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb_leap.day_count(), 29);
        let feb = MonthRef::containing(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(feb.day_count(), 28);
        let jan = MonthRef::containing(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(jan.day_count(), 31);
    }

    #[test]
    fn test_contains() {
        let mar = MonthRef::containing(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        assert!(mar.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
        assert!(!mar.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
        assert!(!mar.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }

    #[test]
    fn test_label() {
        let mar = MonthRef::containing(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(mar.label(), "March 2026");
    }
}
