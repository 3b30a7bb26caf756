use crate::domain::model::{GoodDayEntry, JavaneseDay, NeptuTier, Occasion, Pasaran, WetonResult};
use chrono::{Datelike, NaiveDate};

/// Offset aligning the 5-day pasaran cycle with the Unix epoch:
/// 1970-01-01 was Kamis Wage.
const PASARAN_EPOCH_OFFSET: i64 = 3;

/// Derives the weton for a Gregorian date. The pasaran comes from days
/// elapsed since the epoch; Euclidean modulo keeps pre-1970 dates on the
/// cycle as well.
pub fn weton_for(date: NaiveDate) -> WetonResult {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch is a valid date");
    let days_since_epoch = date.signed_duration_since(epoch).num_days();

    let pasaran_index = (days_since_epoch + PASARAN_EPOCH_OFFSET).rem_euclid(5) as usize;
    let day_index = date.weekday().num_days_from_sunday() as usize;

    let javanese_market = Pasaran::ALL[pasaran_index];
    let javanese_day = JavaneseDay::ALL[day_index];

    WetonResult {
        javanese_day,
        javanese_market,
        neptu_day: javanese_day.neptu(),
        neptu_market: javanese_market.neptu(),
        neptu_total: javanese_day.neptu() + javanese_market.neptu(),
    }
}

/// Enumerates all 35 day/pasaran combinations (days outer, markets inner)
/// and keeps those whose combined neptu is divisible by at least one
/// occasion divisor. Occasions are listed in the fixed check order
/// 7, 5, 6, 4, 9; entries stay in enumeration order.
pub fn good_days(my_neptu: u32) -> Vec<GoodDayEntry> {
    let mut entries = Vec::new();

    for day in JavaneseDay::ALL {
        for market in Pasaran::ALL {
            let combined = my_neptu + day.neptu() + market.neptu();

            let occasions: Vec<Occasion> = Occasion::CHECK_ORDER
                .iter()
                .copied()
                .filter(|occasion| combined % occasion.divisor() == 0)
                .collect();

            if !occasions.is_empty() {
                entries.push(GoodDayEntry {
                    javanese_day: day,
                    javanese_market: market,
                    combined_neptu: combined,
                    occasions,
                });
            }
        }
    }

    entries
}

pub fn neptu_tier(total: u32) -> NeptuTier {
    if total <= 7 {
        NeptuTier::Low
    } else if total <= 13 {
        NeptuTier::Medium
    } else {
        NeptuTier::High
    }
}
