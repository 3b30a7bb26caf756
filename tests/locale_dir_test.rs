use chrono::NaiveDate;
use primbon::domain::ports::LocaleSource;
use primbon::{EmbeddedLocales, Language, LocaleDir, Person, ReportEngine};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

fn embedded_en_toml() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en.toml")).unwrap()
}

#[test]
fn test_locale_dir_overrides_report_copy() {
    let temp_dir = TempDir::new().unwrap();

    let customized = embedded_en_toml().replacen(
        "title = \"Numerology + Zodiac + Shio + Weton Report for \"",
        "title = \"Custom Report for \"",
        1,
    );
    std::fs::write(temp_dir.path().join("en.toml"), customized).unwrap();

    let person = Person::new("Michael Jordan", "17-02-1963", "en").unwrap();
    let engine = ReportEngine::new(LocaleDir::new(temp_dir.path()));

    let report = engine.generate(&person, today()).unwrap();
    assert!(report.text.contains("Custom Report for Michael Jordan"));
    assert!(report.text.contains("Life Path"));
}

#[test]
fn test_locale_dir_missing_bundle_fails() {
    let temp_dir = TempDir::new().unwrap();

    let source = LocaleDir::new(temp_dir.path());
    assert!(source.bundle(Language::En).is_err());
}

#[test]
fn test_locale_dir_rejects_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("en.toml"), "report_strings = 42").unwrap();

    let source = LocaleDir::new(temp_dir.path());
    assert!(source.bundle(Language::En).is_err());
}

#[test]
fn test_env_var_substitution_in_locale_file() {
    std::env::set_var("PRIMBON_IT_TITLE", "Injected Title for ");

    let temp_dir = TempDir::new().unwrap();
    let customized = embedded_en_toml().replacen(
        "title = \"Numerology + Zodiac + Shio + Weton Report for \"",
        "title = \"${PRIMBON_IT_TITLE}\"",
        1,
    );
    std::fs::write(temp_dir.path().join("en.toml"), customized).unwrap();

    let person = Person::new("Michael Jordan", "17-02-1963", "en").unwrap();
    let engine = ReportEngine::new(LocaleDir::new(temp_dir.path()));

    let report = engine.generate(&person, today()).unwrap();
    assert!(report.text.contains("Injected Title for Michael Jordan"));

    std::env::remove_var("PRIMBON_IT_TITLE");
}

#[test]
fn test_embedded_and_dir_sources_agree_on_untouched_copy() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("en.toml"), embedded_en_toml()).unwrap();

    let person = Person::new("Michael Jordan", "17-02-1963", "en").unwrap();

    let from_embedded = ReportEngine::new(EmbeddedLocales)
        .generate(&person, today())
        .unwrap();
    let from_dir = ReportEngine::new(LocaleDir::new(temp_dir.path()))
        .generate(&person, today())
        .unwrap();

    assert_eq!(from_embedded.text, from_dir.text);
}
