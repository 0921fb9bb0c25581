//! Month-counting primitives for service-time proportionality.
//!
//! This module provides the three date-arithmetic primitives the settlement
//! calculators are built on: the whole-month difference, the legally mandated
//! 15-day-rule month count, and an anniversary-anchored month count.

use chrono::{Datelike, NaiveDate};

/// Returns the whole-month difference between two dates.
///
/// Computed as `(yearDiff * 12) + monthDiff`, ignoring the day of month
/// entirely. Negative when `end` is in an earlier month than `start`.
///
/// # Example
///
/// ```
/// use rescisao_engine::calculation::whole_months_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 4, 10).unwrap();
/// assert_eq!(whole_months_between(start, end), 3);
/// ```
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Counts the civil months of a date range that qualify under the 15-day rule.
///
/// Iterates every calendar month intersecting the range, from the first day
/// of `start`'s month through the first day of `end`'s month inclusive. A
/// month counts as a full proportional unit when the number of range days
/// falling within it, clamped to the month's first and last day and counted
/// inclusively, reaches `threshold` (15 under CLT: any month where the
/// employee worked at least half the month counts in full).
///
/// Returns 0 when `end` precedes `start`.
///
/// # Example
///
/// ```
/// use rescisao_engine::calculation::months_by_fifteen_day_rule;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 6, 20).unwrap();
/// // January through May in full, plus 20 days of June
/// assert_eq!(months_by_fifteen_day_rule(start, end, 15), 6);
/// ```
pub fn months_by_fifteen_day_rule(start: NaiveDate, end: NaiveDate, threshold: i64) -> u32 {
    if end < start {
        return 0;
    }

    let mut count = 0;
    let mut month_start = first_day_of_month(start);
    let final_month = first_day_of_month(end);

    while month_start <= final_month {
        let month_end = last_day_of_month(month_start);
        let span_start = start.max(month_start);
        let span_end = end.min(month_end);
        let days_in_month = (span_end - span_start).num_days() + 1;
        if days_in_month >= threshold {
            count += 1;
        }
        month_start = first_day_of_next_month(month_start);
    }

    count
}

/// Counts completed months anchored to the start date's day of month.
///
/// A month completes only once the start day-of-month recurs: the whole-month
/// difference is decremented by one when the end day-of-month precedes the
/// start day-of-month, and the result is floored at 0.
///
/// Not used by the default settlement pipeline; provided as an alternative
/// unit-counting primitive.
///
/// # Example
///
/// ```
/// use rescisao_engine::calculation::anniversary_months_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 20).unwrap();
/// // The 20th of February has not yet passed
/// let end = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();
/// assert_eq!(anniversary_months_between(start, end), 0);
/// ```
pub fn anniversary_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = whole_months_between(start, end);
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

fn first_day_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month")
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_next_month(date)
        .pred_opt()
        .expect("every month has a predecessor day")
}
