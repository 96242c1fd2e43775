use chrono::{Datelike, Days, NaiveDate};

use crate::model::calendar::{CalendarCell, GridPolicy, MonthGrid, MonthRef};

/// Cell count of the fixed policy: 6 rows of 7
pub const FIXED_GRID_CELLS: usize = 42;

/// Build the grid of calendar cells for a month under the given policy.
///
/// Both policies are Sunday-first (column 0 = Sunday). The fixed policy backs
/// up to the Sunday on or before the 1st and emits 42 consecutive days, so
/// every month — 28 through 31 days, any starting weekday — fills exactly six
/// rows. The flow policy emits one blank per leading weekday column and then
/// only the month's own days.
pub fn month_grid(month: MonthRef, policy: GridPolicy) -> MonthGrid {
    let first = month.first_day();
    let lead = first.weekday().num_days_from_sunday() as usize;

    let cells = match policy {
        GridPolicy::Fixed => {
            let start = first - Days::new(lead as u64);
            (0..FIXED_GRID_CELLS)
                .map(|offset| {
                    let date = start + Days::new(offset as u64);
                    CalendarCell::Day {
                        date,
                        in_month: month.contains(date),
                    }
                })
                .collect()
        }
        GridPolicy::Flow => {
            let mut cells = Vec::with_capacity(lead + month.day_count() as usize);
            cells.extend(std::iter::repeat_n(CalendarCell::Blank, lead));
            cells.extend((0..month.day_count()).map(|offset| CalendarCell::Day {
                date: first + Days::new(offset as u64),
                in_month: true,
            }));
            cells
        }
    };

    MonthGrid {
        month,
        policy,
        cells,
    }
}

/// Items whose date equals `date` exactly, in collection order.
/// `date_of` extracts the item's calendar date (None = never shown).
pub fn items_on<'a, T>(
    items: &'a [T],
    date: NaiveDate,
    date_of: impl Fn(&T) -> Option<NaiveDate>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| date_of(item) == Some(date))
        .collect()
}
