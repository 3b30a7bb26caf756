use crate::domain::ports::ReportRequest;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "primbon")]
#[command(about = "Numerology + zodiac + shio + weton report generator")]
pub struct CliConfig {
    /// Full name of the report subject
    #[arg(long)]
    pub name: String,

    /// Birth date in DD-MM-YYYY format
    #[arg(long)]
    pub birth_date: String,

    /// Report language code (id or en; unrecognized codes fall back to id)
    #[arg(long, default_value = "id")]
    pub lang: String,

    /// Directory with <lang>.toml locale bundles (built-in locales if omitted)
    #[arg(long)]
    pub locale_dir: Option<String>,

    /// Emit the structured report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ReportRequest for CliConfig {
    fn full_name(&self) -> &str {
        &self.name
    }

    fn birth_date(&self) -> &str {
        &self.birth_date
    }

    fn language_code(&self) -> &str {
        &self.lang
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;
        validation::validate_birth_date("birth_date", &self.birth_date)?;

        if let Some(dir) = &self.locale_dir {
            validation::validate_dir_path("locale_dir", dir)?;
        }

        Ok(())
    }
}
