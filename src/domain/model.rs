use crate::utils::error::Result;
use crate::utils::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported report locales. Unrecognized codes fall back to Indonesian,
/// matching the original tool's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Id,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Id,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
        }
    }
}

/// One report subject. Immutable once constructed. The raw date string is
/// kept because the birth digital root is defined over its digits, which
/// makes the value sensitive to the input format by design.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub full_name: String,
    pub raw_birth_date: String,
    pub birth_date: NaiveDate,
    pub language: Language,
}

impl Person {
    pub fn new(full_name: &str, birth_date: &str, language_code: &str) -> Result<Self> {
        validation::validate_non_empty_string("full_name", full_name)?;
        let parsed = validation::validate_birth_date("birth_date", birth_date)?;

        Ok(Self {
            full_name: full_name.trim().to_string(),
            raw_birth_date: birth_date.trim().to_string(),
            birth_date: parsed,
            language: Language::from_code(language_code),
        })
    }
}

/// A digit-sum reduction result: 0-9, or one of the preserved master
/// numbers 11/22/33. Only `core::digital_root::reduce` constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DigitalRoot(u64);

impl DigitalRoot {
    pub(crate) fn new(value: u64) -> Self {
        DigitalRoot(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_master(&self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }
}

impl std::fmt::Display for DigitalRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }
}

/// The 12-year animal cycle, in the source almanac's ordering: the cycle
/// list starts at Monyet so that plain `year % 12` indexing lands 1960 on
/// Tikus. Names double as locale dictionary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShioSign {
    Monyet,
    Ayam,
    Anjing,
    Babi,
    Tikus,
    Kerbau,
    Macan,
    Kelinci,
    Naga,
    Ular,
    Kuda,
    Kambing,
}

impl ShioSign {
    pub fn name(&self) -> &'static str {
        match self {
            ShioSign::Monyet => "Monyet",
            ShioSign::Ayam => "Ayam",
            ShioSign::Anjing => "Anjing",
            ShioSign::Babi => "Babi",
            ShioSign::Tikus => "Tikus",
            ShioSign::Kerbau => "Kerbau",
            ShioSign::Macan => "Macan",
            ShioSign::Kelinci => "Kelinci",
            ShioSign::Naga => "Naga",
            ShioSign::Ular => "Ular",
            ShioSign::Kuda => "Kuda",
            ShioSign::Kambing => "Kambing",
        }
    }
}

/// The 7-day Javanese week, Sunday first to line up with weekday indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JavaneseDay {
    Ahad,
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
}

impl JavaneseDay {
    pub const ALL: [JavaneseDay; 7] = [
        JavaneseDay::Ahad,
        JavaneseDay::Senin,
        JavaneseDay::Selasa,
        JavaneseDay::Rabu,
        JavaneseDay::Kamis,
        JavaneseDay::Jumat,
        JavaneseDay::Sabtu,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JavaneseDay::Ahad => "Ahad",
            JavaneseDay::Senin => "Senin",
            JavaneseDay::Selasa => "Selasa",
            JavaneseDay::Rabu => "Rabu",
            JavaneseDay::Kamis => "Kamis",
            JavaneseDay::Jumat => "Jumat",
            JavaneseDay::Sabtu => "Sabtu",
        }
    }

    pub fn neptu(&self) -> u32 {
        match self {
            JavaneseDay::Ahad => 5,
            JavaneseDay::Senin => 4,
            JavaneseDay::Selasa => 3,
            JavaneseDay::Rabu => 7,
            JavaneseDay::Kamis => 8,
            JavaneseDay::Jumat => 6,
            JavaneseDay::Sabtu => 9,
        }
    }
}

/// The 5-day market cycle (pasaran).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

impl Pasaran {
    pub const ALL: [Pasaran; 5] = [
        Pasaran::Legi,
        Pasaran::Pahing,
        Pasaran::Pon,
        Pasaran::Wage,
        Pasaran::Kliwon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pasaran::Legi => "Legi",
            Pasaran::Pahing => "Pahing",
            Pasaran::Pon => "Pon",
            Pasaran::Wage => "Wage",
            Pasaran::Kliwon => "Kliwon",
        }
    }

    pub fn neptu(&self) -> u32 {
        match self {
            Pasaran::Legi => 5,
            Pasaran::Pahing => 9,
            Pasaran::Pon => 7,
            Pasaran::Wage => 4,
            Pasaran::Kliwon => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WetonResult {
    pub javanese_day: JavaneseDay,
    pub javanese_market: Pasaran,
    pub neptu_day: u32,
    pub neptu_market: u32,
    pub neptu_total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NeptuTier {
    Low,
    Medium,
    High,
}

/// Occasions a day/market combination can be auspicious for, in the fixed
/// divisor check order 7, 5, 6, 4, 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Occasion {
    Marriage,
    Business,
    MovingHouse,
    Aqiqah,
    NewPosition,
}

impl Occasion {
    pub const CHECK_ORDER: [Occasion; 5] = [
        Occasion::Marriage,
        Occasion::Business,
        Occasion::MovingHouse,
        Occasion::Aqiqah,
        Occasion::NewPosition,
    ];

    pub fn divisor(&self) -> u32 {
        match self {
            Occasion::Marriage => 7,
            Occasion::Business => 5,
            Occasion::MovingHouse => 6,
            Occasion::Aqiqah => 4,
            Occasion::NewPosition => 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoodDayEntry {
    pub javanese_day: JavaneseDay,
    pub javanese_market: Pasaran,
    pub combined_neptu: u32,
    pub occasions: Vec<Occasion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub expression_total: u64,
    pub name_dr: DigitalRoot,
    pub birth_dr: DigitalRoot,
    pub soul_urge: DigitalRoot,
    pub maturity: DigitalRoot,
    pub personal_year: DigitalRoot,
    pub personal_month: DigitalRoot,
    pub personal_day: DigitalRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("EN "), Language::En);
        assert_eq!(Language::from_code("id"), Language::Id);
        assert_eq!(Language::from_code("fr"), Language::Id);
        assert_eq!(Language::from_code(""), Language::Id);
    }

    #[test]
    fn test_person_construction() {
        let person = Person::new("Budi Santoso", "18-04-1980", "id").unwrap();
        assert_eq!(person.full_name, "Budi Santoso");
        assert_eq!(person.raw_birth_date, "18-04-1980");

        assert!(Person::new("", "18-04-1980", "id").is_err());
        assert!(Person::new("Budi", "not-a-date", "id").is_err());
    }

    #[test]
    fn test_neptu_tables() {
        let day_total: u32 = JavaneseDay::ALL.iter().map(|d| d.neptu()).sum();
        let market_total: u32 = Pasaran::ALL.iter().map(|p| p.neptu()).sum();
        assert_eq!(day_total, 42);
        assert_eq!(market_total, 33);
    }
}
