//! # Charge-Day Calendar
//!
//! Decides which days of a rental are billable.
//!
//! ## Rental Window
//! ```text
//! checkout            day 1     day 2     day 3 = due date
//!    │                  │         │         │
//!    ▼                  ▼         ▼         ▼
//! ───●──────────────────■─────────■─────────■─────►
//!    not billed          ╰── each day classified ──╯
//! ```
//! The checkout day itself is never billed. Every day after it, up to and
//! including the due date, lands in exactly one [`DayKind`] bucket:
//!
//! 1. **Holiday**: observed Independence Day or Labor Day
//! 2. **Weekend**: Saturday or Sunday
//! 3. **Weekday**: Monday through Friday
//!
//! Holiday wins over weekend, so a day is never counted twice. A tool type's
//! [`ChargePolicy`] then says which buckets are billed.
//!
//! ## Holiday Rules
//! - **Independence Day**: July 4. Observed Friday July 3 when the 4th is a
//!   Saturday, Monday July 5 when it is a Sunday.
//! - **Labor Day**: first Monday in September.
//!
//! Holidays are derived from each day's own year, so rentals that span a
//! new year pick up the following year's dates.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::{ChargePolicy, DayKind};

/// Observed Independence Day for a year.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::calendar::independence_day_observed;
///
/// // 2015-07-04 is a Saturday → observed Friday the 3rd
/// assert_eq!(independence_day_observed(2015), NaiveDate::from_ymd_opt(2015, 7, 3));
/// // 2021-07-04 is a Sunday → observed Monday the 5th
/// assert_eq!(independence_day_observed(2021), NaiveDate::from_ymd_opt(2021, 7, 5));
/// ```
pub fn independence_day_observed(year: i32) -> Option<NaiveDate> {
    let fourth = NaiveDate::from_ymd_opt(year, 7, 4)?;

    match fourth.weekday() {
        Weekday::Sat => fourth.pred_opt(),
        Weekday::Sun => fourth.succ_opt(),
        _ => Some(fourth),
    }
}

/// Labor Day (first Monday in September) for a year.
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

/// Whether `date` is an observed holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    let year = date.year();
    independence_day_observed(year) == Some(date) || labor_day(year) == Some(date)
}

/// Whether `date` falls on Saturday or Sunday.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Puts a day into its billing bucket (holiday > weekend > weekday).
pub fn classify(date: NaiveDate) -> DayKind {
    if is_holiday(date) {
        DayKind::Holiday
    } else if is_weekend(date) {
        DayKind::Weekend
    } else {
        DayKind::Weekday
    }
}

/// Counts the billable days in `(checkout_date, due_date]`.
///
/// Returns 0 when `due_date` is not after `checkout_date`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::calendar::charge_days;
/// use rental_core::types::ToolType;
///
/// // Thu 2020-07-02 for 3 days: Fri 3rd (observed holiday), Sat 4th, Sun 5th
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2020, 7, 5).unwrap();
/// assert_eq!(charge_days(checkout, due, &ToolType::Ladder.policy()), 2);
/// ```
pub fn charge_days(checkout_date: NaiveDate, due_date: NaiveDate, policy: &ChargePolicy) -> u32 {
    let count = checkout_date
        .iter_days()
        .skip(1)
        .take_while(|day| *day <= due_date)
        .filter(|day| policy.charges(classify(*day)))
        .count();

    tracing::trace!(%checkout_date, %due_date, count, "counted charge days");

    count as u32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolType;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_independence_day_weekday() {
        // 2020-07-04 is a Saturday, 2019-07-04 a Thursday
        assert_eq!(independence_day_observed(2019), Some(date(2019, 7, 4)));
        assert_eq!(independence_day_observed(2020), Some(date(2020, 7, 3)));
    }

    #[test]
    fn test_independence_day_weekend_shift() {
        assert_eq!(independence_day_observed(2015), Some(date(2015, 7, 3)));
        assert_eq!(independence_day_observed(2021), Some(date(2021, 7, 5)));
    }

    #[test]
    fn test_labor_day() {
        assert_eq!(labor_day(2015), Some(date(2015, 9, 7)));
        assert_eq!(labor_day(2020), Some(date(2020, 9, 7)));
        assert_eq!(labor_day(2021), Some(date(2021, 9, 6)));
        // September 1st is itself a Monday
        assert_eq!(labor_day(2025), Some(date(2025, 9, 1)));
    }

    #[test]
    fn test_labor_day_is_always_first_monday() {
        for year in 1990..2060 {
            let day = labor_day(year).unwrap();
            assert_eq!(day.weekday(), Weekday::Mon);
            assert_eq!(day.month(), 9);
            assert!(day.day() <= 7);
        }
    }

    #[test]
    fn test_classify_priority() {
        // Observed Independence Day on a Friday
        assert_eq!(classify(date(2015, 7, 3)), DayKind::Holiday);
        // The actual 4th is then just a Saturday
        assert_eq!(classify(date(2015, 7, 4)), DayKind::Weekend);
        // Sunday the 4th is a weekend, Monday the 5th the holiday
        assert_eq!(classify(date(2021, 7, 4)), DayKind::Weekend);
        assert_eq!(classify(date(2021, 7, 5)), DayKind::Holiday);
        assert_eq!(classify(date(2015, 9, 7)), DayKind::Holiday);
        assert_eq!(classify(date(2015, 9, 8)), DayKind::Weekday);
        assert_eq!(classify(date(2015, 9, 5)), DayKind::Weekend);
    }

    #[test]
    fn test_checkout_day_is_not_billed() {
        // Checkout Wednesday, due Thursday: only Thursday counts
        let policy = ToolType::Jackhammer.policy();
        assert_eq!(charge_days(date(2015, 9, 2), date(2015, 9, 3), &policy), 1);
    }

    #[test]
    fn test_empty_window() {
        let policy = ToolType::Ladder.policy();
        let day = date(2015, 9, 2);
        assert_eq!(charge_days(day, day, &policy), 0);
        assert_eq!(charge_days(day, date(2015, 9, 1), &policy), 0);
    }

    #[test]
    fn test_labor_day_week_per_tool_type() {
        // Thu 2015-09-03 + 6 days: Fri, Sat, Sun, Mon (Labor Day), Tue, Wed
        let checkout = date(2015, 9, 3);
        let due = date(2015, 9, 9);

        assert_eq!(charge_days(checkout, due, &ToolType::Jackhammer.policy()), 3);
        assert_eq!(charge_days(checkout, due, &ToolType::Ladder.policy()), 5);
        assert_eq!(charge_days(checkout, due, &ToolType::Chainsaw.policy()), 4);
    }

    #[test]
    fn test_holidays_rederived_each_year() {
        // Dec 2020 → Sep 2021 picks up 2021-07-05 and 2021-09-06
        let checkout = date(2020, 12, 31);
        let due = date(2021, 9, 30);
        let holidays = checkout
            .iter_days()
            .skip(1)
            .take_while(|day| *day <= due)
            .filter(|day| is_holiday(*day))
            .collect::<Vec<_>>();

        assert_eq!(holidays, vec![date(2021, 7, 5), date(2021, 9, 6)]);
    }

    #[test]
    fn test_charge_days_never_exceed_window() {
        let checkout = date(2005, 5, 25);
        for tool_type in [ToolType::Ladder, ToolType::Chainsaw, ToolType::Jackhammer] {
            for days in [1u64, 7, 45, 100, 400] {
                let due = checkout + chrono::Days::new(days);
                let count = charge_days(checkout, due, &tool_type.policy());
                assert!(count as u64 <= days);
            }
        }
    }
}
