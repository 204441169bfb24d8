//! Visible calendar ranges and toolbar navigation math.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Granularity of the visible calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeUnit {
    /// A calendar month.
    Month,
    /// A Monday-to-Sunday week.
    Week,
    /// A single day.
    Day,
}

impl RangeUnit {
    /// Returns the range of this granularity containing `day`.
    #[must_use]
    pub fn range_containing(self, day: NaiveDate) -> DateRange {
        let start = match self {
            Self::Month => day.with_day(1).unwrap_or(day),
            Self::Week => day
                .checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
                .unwrap_or(day),
            Self::Day => day,
        };
        let end = match self {
            Self::Month => start.checked_add_months(Months::new(1)).unwrap_or(start),
            Self::Week => start.checked_add_days(Days::new(7)).unwrap_or(start),
            Self::Day => start.checked_add_days(Days::new(1)).unwrap_or(start),
        };
        DateRange::new(start, end)
    }

    /// Moves an anchor day one step of this granularity in either direction.
    #[must_use]
    pub fn step(self, day: NaiveDate, forward: bool) -> NaiveDate {
        match (self, forward) {
            (Self::Month, true) => day.checked_add_months(Months::new(1)),
            (Self::Month, false) => day.checked_sub_months(Months::new(1)),
            (Self::Week, true) => day.checked_add_days(Days::new(7)),
            (Self::Week, false) => day.checked_sub_days(Days::new(7)),
            (Self::Day, true) => day.checked_add_days(Days::new(1)),
            (Self::Day, false) => day.checked_sub_days(Days::new(1)),
        }
        .unwrap_or(day)
    }
}

/// Half-open visible range, midnight-aligned in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range spanning `[start, end)` days.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// Returns the inclusive start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the `start`/`end` query values in RFC 3339 form.
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        (self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn month_range_spans_the_first_to_the_next_first() {
        let range = RangeUnit::Month.range_containing(day(2026, 1, 15));
        assert_eq!(range, DateRange::new(day(2026, 1, 1), day(2026, 2, 1)));
    }

    #[rstest]
    #[case(day(2026, 1, 5), day(2026, 1, 5))]
    #[case(day(2026, 1, 7), day(2026, 1, 5))]
    #[case(day(2026, 1, 11), day(2026, 1, 5))]
    fn week_range_starts_on_monday(#[case] anchor: NaiveDate, #[case] monday: NaiveDate) {
        let range = RangeUnit::Week.range_containing(anchor);
        assert_eq!(
            range,
            DateRange::new(monday, monday.checked_add_days(Days::new(7)).expect("valid"))
        );
    }

    #[test]
    fn day_range_covers_one_day() {
        let range = RangeUnit::Day.range_containing(day(2026, 1, 31));
        assert_eq!(range, DateRange::new(day(2026, 1, 31), day(2026, 2, 1)));
    }

    #[rstest]
    #[case(RangeUnit::Month, day(2026, 1, 31), true, day(2026, 2, 28))]
    #[case(RangeUnit::Month, day(2026, 3, 15), false, day(2026, 2, 15))]
    #[case(RangeUnit::Week, day(2026, 1, 5), true, day(2026, 1, 12))]
    #[case(RangeUnit::Day, day(2026, 1, 1), false, day(2025, 12, 31))]
    fn stepping_moves_one_unit(
        #[case] unit: RangeUnit,
        #[case] anchor: NaiveDate,
        #[case] forward: bool,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(unit.step(anchor, forward), expected);
    }

    #[test]
    fn query_pair_renders_rfc3339() {
        let range = DateRange::new(day(2026, 1, 1), day(2026, 2, 1));
        let (start, end) = range.query_pair();
        assert_eq!(start, "2026-01-01T00:00:00+00:00");
        assert_eq!(end, "2026-02-01T00:00:00+00:00");
    }
}
