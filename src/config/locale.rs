use crate::domain::model::Language;
use crate::domain::ports::LocaleSource;
use crate::utils::error::{PrimbonError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const EMBEDDED_ID: &str = include_str!("../../locales/id.toml");
const EMBEDDED_EN: &str = include_str!("../../locales/en.toml");

/// One language's worth of report copy. All description lookups go through
/// accessors that fall back to `report_strings.unknown` for absent keys,
/// so partial bundles degrade instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleBundle {
    pub report_strings: ReportStrings,
    pub zodiac_descriptions: HashMap<String, String>,
    pub shio_descriptions: HashMap<String, String>,
    pub neptu_descriptions: NeptuDescriptions,
    pub numerology_data: HashMap<String, NumberDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStrings {
    pub title: String,
    pub zodiac_header: String,
    pub shio_header: String,
    pub weton_header: String,
    pub good_days_header: String,
    pub life_path_header: String,
    pub name_dr_header: String,
    pub soul_urge_header: String,
    pub maturity_header: String,
    pub personal_year_header: String,
    pub personal_month_header: String,
    pub personal_day_header: String,
    pub predictions_header: String,
    pub unknown: String,
    pub known_as: String,
    pub challenge_header: String,
    pub profession_header: String,
    pub your_character: String,
    pub avoid_header: String,
    pub innermost_drive: String,
    pub beware_header: String,
    pub in_adulthood: String,
    pub energy_header: String,
    pub focus_this_month: String,
    pub today_energy: String,
    pub forecast_focus: Option<String>,
    pub recommendation_prefix: Option<String>,
    pub recommendation_suffix: Option<String>,
    pub suitable_for: SuitableFor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitableFor {
    pub marriage: String,
    pub business: String,
    pub moving_house: String,
    pub aqiqah: String,
    pub new_position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeptuDescriptions {
    pub low_neptu: String,
    pub medium_neptu: String,
    pub high_neptu: String,
}

/// Narrative attached to one digital-root value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberDetail {
    pub emoji: String,
    pub meaning: String,
    pub profession: String,
    pub challenge: String,
    pub strength: String,
    pub weakness: String,
    pub life_path_detail: String,
}

impl LocaleBundle {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PrimbonError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let bundle: LocaleBundle = toml::from_str(&processed_content)?;
        Ok(bundle)
    }

    /// Replaces `${VAR_NAME}` placeholders so deployments can inject
    /// strings (e.g. a branded report title) without editing the files.
    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn unknown(&self) -> &str {
        &self.report_strings.unknown
    }

    pub fn zodiac_description(&self, sign_name: &str) -> &str {
        self.zodiac_descriptions
            .get(sign_name)
            .map(String::as_str)
            .unwrap_or(self.unknown())
    }

    pub fn shio_description(&self, shio_name: &str) -> &str {
        self.shio_descriptions
            .get(shio_name)
            .map(String::as_str)
            .unwrap_or(self.unknown())
    }

    pub fn number_detail(&self, value: u64) -> Option<&NumberDetail> {
        self.numerology_data.get(&value.to_string())
    }
}

impl Validate for LocaleBundle {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string(
            "report_strings.unknown",
            &self.report_strings.unknown,
        )?;

        if self.numerology_data.is_empty() {
            return Err(PrimbonError::LocaleError {
                message: "numerology_data has no entries; every section would render as unknown"
                    .to_string(),
            });
        }

        for key in self.numerology_data.keys() {
            if key.parse::<u64>().is_err() {
                return Err(PrimbonError::LocaleError {
                    message: format!("numerology_data key '{}' is not a number", key),
                });
            }
        }

        Ok(())
    }
}

/// Compiled-in locale bundles; the zero-configuration path.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedLocales;

impl LocaleSource for EmbeddedLocales {
    fn bundle(&self, language: Language) -> Result<LocaleBundle> {
        let content = match language {
            Language::Id => EMBEDDED_ID,
            Language::En => EMBEDDED_EN,
        };
        LocaleBundle::from_toml_str(content)
    }
}

/// Loads `<code>.toml` bundles from a directory, so report copy can be
/// edited without rebuilding.
#[derive(Debug, Clone)]
pub struct LocaleDir {
    base_path: PathBuf,
}

impl LocaleDir {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl LocaleSource for LocaleDir {
    fn bundle(&self, language: Language) -> Result<LocaleBundle> {
        let path = self.base_path.join(format!("{}.toml", language.code()));
        tracing::debug!("Loading locale bundle from {}", path.display());

        let bundle = LocaleBundle::from_file(&path)?;
        bundle.validate()?;
        Ok(bundle)
    }
}
