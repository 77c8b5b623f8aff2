//! Derived Value Functions for intake
//!
//! Derived facts are pure functions of the record, recomputed on every
//! evaluation and never stored, so there is no staleness to manage.
//! Currently there is one: age in whole years from date of birth.

use chrono::{Datelike, Local, NaiveDate};

/// Calendar-correct age in whole years as of `as_of`.
///
/// The year difference is decremented by one when the month/day of
/// `as_of` precedes the birthday, so someone born 2000-06-15 is 17 on
/// 2018-06-14 and 18 on 2018-06-15.
pub fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Age in whole years as of the local current date.
pub fn age_in_years_today(date_of_birth: NaiveDate) -> i32 {
    age_in_years(date_of_birth, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let dob = ymd(2000, 6, 15);
        assert_eq!(age_in_years(dob, ymd(2018, 6, 14)), 17);
        assert_eq!(age_in_years(dob, ymd(2018, 6, 15)), 18);
        assert_eq!(age_in_years(dob, ymd(2018, 6, 16)), 18);
    }

    #[test]
    fn test_age_not_naive_year_subtraction() {
        // Born late in the year: year subtraction alone would say 30.
        let dob = ymd(1990, 12, 31);
        assert_eq!(age_in_years(dob, ymd(2020, 1, 1)), 29);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let dob = ymd(2004, 2, 29);
        // In non-leap years the birthday has not occurred on Feb 28.
        assert_eq!(age_in_years(dob, ymd(2021, 2, 28)), 16);
        assert_eq!(age_in_years(dob, ymd(2021, 3, 1)), 17);
    }

    #[test]
    fn test_age_is_deterministic_for_fixed_clock() {
        let dob = ymd(1985, 3, 3);
        let as_of = ymd(2026, 8, 27);
        assert_eq!(age_in_years(dob, as_of), age_in_years(dob, as_of));
    }
}
