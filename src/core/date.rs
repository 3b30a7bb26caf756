use crate::core::digital_root::reduce;
use crate::domain::model::DigitalRoot;
use chrono::{Datelike, NaiveDate};

/// Sums every digit in the raw date string and reduces the result. Day,
/// month and full year digits all land in the same sum, which makes the
/// value depend on the textual format the date was supplied in.
pub fn birth_digital_root(raw_date: &str) -> DigitalRoot {
    let digit_total = raw_date
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum();
    reduce(digit_total)
}

/// Personal year: birth day + birth month + the target calendar year. The
/// birth year itself is deliberately left out of the sum.
pub fn personal_year(birth_date: NaiveDate, target_year: i32) -> DigitalRoot {
    let total = u64::from(birth_date.day()) + u64::from(birth_date.month()) + target_year as u64;
    reduce(total)
}

pub fn personal_month(personal_year: DigitalRoot, target_month: u32) -> DigitalRoot {
    reduce(personal_year.value() + u64::from(target_month))
}

pub fn personal_day(personal_month: DigitalRoot, target_day: u32) -> DigitalRoot {
    reduce(personal_month.value() + u64::from(target_day))
}

pub fn maturity(birth_dr: DigitalRoot, expression_total: u64) -> DigitalRoot {
    reduce(birth_dr.value() + reduce(expression_total).value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_digital_root_mixes_all_digits() {
        // 1+8+0+4+1+9+8+0 = 31 -> 4
        assert_eq!(birth_digital_root("18-04-1980").value(), 4);
        // 1+7+0+2+1+9+6+3 = 29 -> 11 (master preserved)
        assert_eq!(birth_digital_root("17-02-1963").value(), 11);
    }

    #[test]
    fn test_birth_digital_root_is_format_sensitive() {
        // Same calendar date, two-digit year: different digit sum.
        assert_ne!(
            birth_digital_root("18-04-1980").value(),
            birth_digital_root("18-04-80").value()
        );
    }

    #[test]
    fn test_personal_cycle() {
        let birth = NaiveDate::from_ymd_opt(1980, 4, 18).unwrap();

        // 18 + 4 + 2025 = 2047 -> 13 -> 4
        let year = personal_year(birth, 2025);
        assert_eq!(year.value(), 4);

        // 4 + 6 = 10 -> 1
        let month = personal_month(year, 6);
        assert_eq!(month.value(), 1);

        // 1 + 15 = 16 -> 7
        assert_eq!(personal_day(month, 15).value(), 7);
    }

    #[test]
    fn test_personal_year_excludes_birth_year() {
        let a = NaiveDate::from_ymd_opt(1980, 4, 18).unwrap();
        let b = NaiveDate::from_ymd_opt(1995, 4, 18).unwrap();
        assert_eq!(personal_year(a, 2025), personal_year(b, 2025));
    }

    #[test]
    fn test_maturity() {
        // reduce(4 + reduce(40)) = reduce(4 + 4) = 8
        let birth_dr = birth_digital_root("18-04-1980");
        assert_eq!(maturity(birth_dr, 40).value(), 8);
    }
}
