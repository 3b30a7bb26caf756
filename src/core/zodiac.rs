use crate::domain::model::{ShioSign, ZodiacSign};

struct SignRange {
    sign: ZodiacSign,
    start_day: u32,
    start_month: u32,
    end_day: u32,
    end_month: u32,
}

const SIGN_RANGES: [SignRange; 12] = [
    SignRange { sign: ZodiacSign::Capricorn, start_day: 22, start_month: 12, end_day: 19, end_month: 1 },
    SignRange { sign: ZodiacSign::Aquarius, start_day: 20, start_month: 1, end_day: 18, end_month: 2 },
    SignRange { sign: ZodiacSign::Pisces, start_day: 19, start_month: 2, end_day: 20, end_month: 3 },
    SignRange { sign: ZodiacSign::Aries, start_day: 21, start_month: 3, end_day: 19, end_month: 4 },
    SignRange { sign: ZodiacSign::Taurus, start_day: 20, start_month: 4, end_day: 20, end_month: 5 },
    SignRange { sign: ZodiacSign::Gemini, start_day: 21, start_month: 5, end_day: 20, end_month: 6 },
    SignRange { sign: ZodiacSign::Cancer, start_day: 21, start_month: 6, end_day: 22, end_month: 7 },
    SignRange { sign: ZodiacSign::Leo, start_day: 23, start_month: 7, end_day: 22, end_month: 8 },
    SignRange { sign: ZodiacSign::Virgo, start_day: 23, start_month: 8, end_day: 22, end_month: 9 },
    SignRange { sign: ZodiacSign::Libra, start_day: 23, start_month: 9, end_day: 22, end_month: 10 },
    SignRange { sign: ZodiacSign::Scorpio, start_day: 23, start_month: 10, end_day: 21, end_month: 11 },
    SignRange { sign: ZodiacSign::Sagittarius, start_day: 22, start_month: 11, end_day: 21, end_month: 12 },
];

/// First range whose start-month or end-month rule matches wins. The
/// ranges cover the whole year, so the trailing Capricorn default is only
/// reachable if the table itself were malformed.
pub fn sign_for(day: u32, month: u32) -> ZodiacSign {
    for range in &SIGN_RANGES {
        if (month == range.start_month && day >= range.start_day)
            || (month == range.end_month && day <= range.end_day)
        {
            return range.sign;
        }
    }
    ZodiacSign::Capricorn
}

const SHIO_CYCLE: [ShioSign; 12] = [
    ShioSign::Monyet,
    ShioSign::Ayam,
    ShioSign::Anjing,
    ShioSign::Babi,
    ShioSign::Tikus,
    ShioSign::Kerbau,
    ShioSign::Macan,
    ShioSign::Kelinci,
    ShioSign::Naga,
    ShioSign::Ular,
    ShioSign::Kuda,
    ShioSign::Kambing,
];

pub fn shio_for(year: i32) -> ShioSign {
    SHIO_CYCLE[year.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capricorn_boundaries() {
        assert_eq!(sign_for(22, 12), ZodiacSign::Capricorn);
        assert_eq!(sign_for(31, 12), ZodiacSign::Capricorn);
        assert_eq!(sign_for(1, 1), ZodiacSign::Capricorn);
        assert_eq!(sign_for(19, 1), ZodiacSign::Capricorn);
        assert_eq!(sign_for(20, 1), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_pisces_aries_boundary() {
        assert_eq!(sign_for(20, 3), ZodiacSign::Pisces);
        assert_eq!(sign_for(21, 3), ZodiacSign::Aries);
    }

    #[test]
    fn test_early_december_is_sagittarius() {
        assert_eq!(sign_for(1, 12), ZodiacSign::Sagittarius);
        assert_eq!(sign_for(21, 12), ZodiacSign::Sagittarius);
        assert_eq!(sign_for(22, 11), ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_full_year_coverage() {
        const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u32 {
            for day in 1..=DAYS_IN_MONTH[(month - 1) as usize] {
                // Every date matches some range before the fallback.
                let sign = sign_for(day, month);
                let matched = SIGN_RANGES.iter().any(|r| {
                    (month == r.start_month && day >= r.start_day)
                        || (month == r.end_month && day <= r.end_day)
                });
                assert!(matched, "{}-{} fell through to the default", day, month);
                let _ = sign;
            }
        }
    }

    #[test]
    fn test_shio_cycle_repeats_every_twelve_years() {
        assert_eq!(shio_for(1960), ShioSign::Tikus);
        assert_eq!(shio_for(1972), ShioSign::Tikus);
        assert_eq!(shio_for(1948), ShioSign::Tikus);
        assert_eq!(shio_for(1963), ShioSign::Kelinci);
        // Euclidean modulo keeps BCE-style negative years in range.
        assert_eq!(shio_for(-4), shio_for(8));
    }
}
