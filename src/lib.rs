pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{EmbeddedLocales, LocaleBundle, LocaleDir};
pub use crate::core::report::{GeneratedReport, ReportData, ReportEngine};
pub use domain::model::{Language, Person};
pub use utils::error::{PrimbonError, Result};
