use crate::config::locale::{LocaleBundle, ReportStrings};
use crate::core::{date, name, weton, zodiac};
use crate::domain::model::{
    DigitalRoot, GoodDayEntry, Language, NeptuTier, NumerologyProfile, Occasion, Person, ShioSign,
    WetonResult, ZodiacSign,
};
use crate::domain::ports::{LocaleSource, ReportRequest};
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Machine-readable form of one generated report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub full_name: String,
    pub birth_date: String,
    pub language: Language,
    pub zodiac: ZodiacSign,
    pub shio: ShioSign,
    pub weton: WetonResult,
    pub neptu_tier: NeptuTier,
    pub good_days: Vec<GoodDayEntry>,
    pub profile: NumerologyProfile,
    pub forecast: Vec<YearTrend>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearTrend {
    pub year: i32,
    pub personal_year: DigitalRoot,
    pub emoji: String,
    pub meaning: String,
    pub focus: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub data: ReportData,
    pub text: String,
}

/// Narrative copy resolved for one digital-root value, with every field
/// falling back to the locale's unknown string when absent.
struct NumberNarrative {
    emoji: String,
    meaning: String,
    profession: String,
    challenge: String,
    strength: String,
    weakness: String,
    life_path_detail: String,
    recommendation: String,
}

pub struct ReportEngine<L: LocaleSource> {
    locales: L,
}

impl<L: LocaleSource> ReportEngine<L> {
    pub fn new(locales: L) -> Self {
        Self { locales }
    }

    pub fn generate_request<R: ReportRequest>(
        &self,
        request: &R,
        today: NaiveDate,
    ) -> Result<GeneratedReport> {
        let person = Person::new(
            request.full_name(),
            request.birth_date(),
            request.language_code(),
        )?;
        self.generate(&person, today)
    }

    /// Resolves every numerology, zodiac and weton fact for `person`,
    /// attaches localized copy and renders the report text. `today` drives
    /// the personal year/month/day and the 3-year forecast.
    pub fn generate(&self, person: &Person, today: NaiveDate) -> Result<GeneratedReport> {
        let bundle = self.locales.bundle(person.language)?;

        tracing::debug!(
            "Generating report for '{}' ({}) in {}",
            person.full_name,
            person.raw_birth_date,
            person.language.code()
        );

        let profile = build_profile(person, today);
        let zodiac_sign = zodiac::sign_for(person.birth_date.day(), person.birth_date.month());
        let shio_sign = zodiac::shio_for(person.birth_date.year());
        let weton_result = weton::weton_for(person.birth_date);
        let good_days = weton::good_days(weton_result.neptu_total);
        let forecast = build_forecast(person, today, &bundle);

        let data = ReportData {
            full_name: person.full_name.clone(),
            birth_date: person.raw_birth_date.clone(),
            language: person.language,
            zodiac: zodiac_sign,
            shio: shio_sign,
            weton: weton_result,
            neptu_tier: weton::neptu_tier(weton_result.neptu_total),
            good_days,
            profile,
            forecast,
        };

        let text = render(&data, &bundle);
        Ok(GeneratedReport { data, text })
    }
}

fn build_profile(person: &Person, today: NaiveDate) -> NumerologyProfile {
    let expression_total = name::expression_total(&person.full_name);
    let birth_dr = date::birth_digital_root(&person.raw_birth_date);
    let personal_year = date::personal_year(person.birth_date, today.year());
    let personal_month = date::personal_month(personal_year, today.month());

    NumerologyProfile {
        expression_total,
        name_dr: name::name_digital_root(&person.full_name),
        birth_dr,
        soul_urge: name::soul_urge(&person.full_name),
        maturity: date::maturity(birth_dr, expression_total),
        personal_year,
        personal_month,
        personal_day: date::personal_day(personal_month, today.day()),
    }
}

fn build_forecast(person: &Person, today: NaiveDate, bundle: &LocaleBundle) -> Vec<YearTrend> {
    (0..3)
        .map(|offset| {
            let year = today.year() + offset;
            let personal_year = date::personal_year(person.birth_date, year);
            let narrative = build_narrative(bundle, personal_year);
            YearTrend {
                year,
                personal_year,
                emoji: narrative.emoji,
                meaning: narrative.meaning,
                focus: narrative.recommendation,
            }
        })
        .collect()
}

fn build_narrative(bundle: &LocaleBundle, dr: DigitalRoot) -> NumberNarrative {
    let unknown = bundle.unknown().to_string();

    match bundle.number_detail(dr.value()) {
        Some(detail) => {
            let prefix = bundle
                .report_strings
                .recommendation_prefix
                .as_deref()
                .unwrap_or(bundle.unknown());
            let suffix = bundle
                .report_strings
                .recommendation_suffix
                .as_deref()
                .unwrap_or(bundle.unknown());
            NumberNarrative {
                emoji: detail.emoji.clone(),
                meaning: detail.meaning.clone(),
                profession: detail.profession.clone(),
                challenge: detail.challenge.clone(),
                strength: detail.strength.clone(),
                weakness: detail.weakness.clone(),
                life_path_detail: detail.life_path_detail.clone(),
                recommendation: format!(
                    "{} {}, {} {}.",
                    prefix,
                    detail.strength.to_lowercase(),
                    suffix,
                    detail.weakness.to_lowercase()
                ),
            }
        }
        None => NumberNarrative {
            emoji: "❓".to_string(),
            meaning: unknown.clone(),
            profession: unknown.clone(),
            challenge: unknown.clone(),
            strength: unknown.clone(),
            weakness: unknown.clone(),
            life_path_detail: unknown.clone(),
            recommendation: unknown,
        },
    }
}

fn occasion_label<'a>(strings: &'a ReportStrings, occasion: Occasion) -> &'a str {
    match occasion {
        Occasion::Marriage => &strings.suitable_for.marriage,
        Occasion::Business => &strings.suitable_for.business,
        Occasion::MovingHouse => &strings.suitable_for.moving_house,
        Occasion::Aqiqah => &strings.suitable_for.aqiqah,
        Occasion::NewPosition => &strings.suitable_for.new_position,
    }
}

fn neptu_description<'a>(bundle: &'a LocaleBundle, tier: NeptuTier) -> &'a str {
    match tier {
        NeptuTier::Low => &bundle.neptu_descriptions.low_neptu,
        NeptuTier::Medium => &bundle.neptu_descriptions.medium_neptu,
        NeptuTier::High => &bundle.neptu_descriptions.high_neptu,
    }
}

/// Fixed section order: header, zodiac, shio, weton, good days, life
/// path, name DR, soul urge, maturity, personal year/month/day, forecast.
fn render(data: &ReportData, bundle: &LocaleBundle) -> String {
    let strings = &bundle.report_strings;
    let mut out = String::new();

    out.push_str(&format!(
        "\n✨ **{}{} ({})**\n",
        strings.title, data.full_name, data.birth_date
    ));

    out.push_str(&format!(
        "\n🌠 **{} {}**\n{}\n",
        strings.zodiac_header,
        data.zodiac.name(),
        bundle.zodiac_description(data.zodiac.name())
    ));

    out.push_str(&format!(
        "\n🐲 **{} {}**\n{}\n",
        strings.shio_header,
        data.shio.name(),
        bundle.shio_description(data.shio.name())
    ));

    out.push_str(&format!(
        "\n🌾 **{} {} {} (Neptu {})**\n{}\n",
        strings.weton_header,
        data.weton.javanese_day.name(),
        data.weton.javanese_market.name(),
        data.weton.neptu_total,
        neptu_description(bundle, data.neptu_tier)
    ));

    out.push_str(&format!("\n🌞 **{}**\n", strings.good_days_header));
    for entry in &data.good_days {
        let labels: Vec<&str> = entry
            .occasions
            .iter()
            .map(|occasion| occasion_label(strings, *occasion))
            .collect();
        out.push_str(&format!(
            "• {} {} (Neptu {}): {}\n",
            entry.javanese_day.name(),
            entry.javanese_market.name(),
            entry.combined_neptu,
            labels.join(", ")
        ));
    }

    let life_path = build_narrative(bundle, data.profile.birth_dr);
    out.push_str(&format!(
        "\n🌟 **{} ({} {})**\n{}. {} {}. {} {}. {} {}. {}\n",
        strings.life_path_header,
        life_path.emoji,
        life_path.meaning,
        life_path.meaning,
        strings.known_as,
        life_path.strength.to_lowercase(),
        strings.challenge_header,
        life_path.challenge.to_lowercase(),
        strings.profession_header,
        life_path.profession,
        life_path.recommendation
    ));

    let name_dr = build_narrative(bundle, data.profile.name_dr);
    out.push_str(&format!(
        "\n🎨 **{} ({} {})**\n{}. {} {}. {} {}.\n",
        strings.name_dr_header,
        name_dr.emoji,
        name_dr.meaning,
        name_dr.meaning,
        strings.your_character,
        name_dr.strength.to_lowercase(),
        strings.avoid_header,
        name_dr.challenge.to_lowercase()
    ));

    let soul_urge = build_narrative(bundle, data.profile.soul_urge);
    out.push_str(&format!(
        "\n❤️ **{} ({} {})**\n{} {}. {} {}.\n",
        strings.soul_urge_header,
        soul_urge.emoji,
        soul_urge.meaning,
        strings.innermost_drive,
        soul_urge.strength.to_lowercase(),
        strings.beware_header,
        soul_urge.weakness.to_lowercase()
    ));

    let maturity = build_narrative(bundle, data.profile.maturity);
    out.push_str(&format!(
        "\n💎 **{} ({} {})**\n{} {}.\n",
        strings.maturity_header,
        maturity.emoji,
        maturity.meaning,
        strings.in_adulthood,
        maturity.strength.to_lowercase()
    ));

    let personal_year = build_narrative(bundle, data.profile.personal_year);
    out.push_str(&format!(
        "\n⏳ **{} ({} {})**\n{} {}.\n",
        strings.personal_year_header,
        personal_year.emoji,
        personal_year.meaning,
        strings.energy_header,
        personal_year.life_path_detail
    ));

    let personal_month = build_narrative(bundle, data.profile.personal_month);
    out.push_str(&format!(
        "\n🗓️ **{} ({} {})**\n{} {}.\n",
        strings.personal_month_header,
        personal_month.emoji,
        personal_month.meaning,
        strings.focus_this_month,
        personal_month.life_path_detail
    ));

    let personal_day = build_narrative(bundle, data.profile.personal_day);
    out.push_str(&format!(
        "\n🗓️ **{} ({} {})**\n{} {}.\n",
        strings.personal_day_header,
        personal_day.emoji,
        personal_day.meaning,
        strings.today_energy,
        personal_day.life_path_detail
    ));

    let focus_label = strings.forecast_focus.as_deref().unwrap_or("fokus");
    out.push_str(&format!("\n🔮 **{}**\n", strings.predictions_header));
    for trend in &data.forecast {
        out.push_str(&format!(
            "• {}: {} ({} {}), {}: {}\n",
            trend.year,
            trend.personal_year,
            trend.emoji,
            trend.meaning,
            focus_label,
            trend.focus.to_lowercase()
        ));
    }

    out
}
