use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::entities::StatementWindow;

/// Returns the same calendar date one year later. Feb 29 maps to Feb 28 of
/// the following (non-leap) year.
pub(crate) fn one_year_after(date: NaiveDate) -> NaiveDate {
    date.with_year(date.year() + 1).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(date.year() + 1, 2, 28)
            .expect("Feb 28 exists in every year")
    })
}

/// Start date (inclusive) of the given statement window, or None for an
/// unbounded one.
pub(crate) fn window_start(window: StatementWindow, as_of: NaiveDate) -> Option<NaiveDate> {
    match window {
        StatementWindow::All => None,
        StatementWindow::LastDays(days) => Some(as_of - Duration::days(days)),
        StatementWindow::Quarter => Some(months_before(as_of, 3)),
        StatementWindow::Year => Some(months_before(as_of, 12)),
    }
}

fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .expect("subtracting months from an in-range date should never fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_one_year_after_plain_date() {
        assert_eq!(one_year_after(d(2024, 3, 1)), d(2025, 3, 1));
    }

    #[test]
    fn test_one_year_after_leap_day() {
        assert_eq!(one_year_after(d(2024, 2, 29)), d(2025, 2, 28));
    }

    #[test]
    fn test_window_start_all_is_unbounded() {
        assert_eq!(window_start(StatementWindow::All, d(2024, 6, 1)), None);
    }

    #[test]
    fn test_window_start_last_days() {
        assert_eq!(
            window_start(StatementWindow::LastDays(30), d(2024, 6, 1)),
            Some(d(2024, 5, 2))
        );
    }

    #[test]
    fn test_window_start_quarter_and_year() {
        assert_eq!(
            window_start(StatementWindow::Quarter, d(2024, 6, 1)),
            Some(d(2024, 3, 1))
        );
        assert_eq!(
            window_start(StatementWindow::Year, d(2024, 6, 1)),
            Some(d(2023, 6, 1))
        );
    }

    #[test]
    fn test_window_start_quarter_clamps_short_months() {
        // May 31 minus 3 months clamps to the end of February.
        assert_eq!(
            window_start(StatementWindow::Quarter, d(2024, 5, 31)),
            Some(d(2024, 2, 29))
        );
    }
}
