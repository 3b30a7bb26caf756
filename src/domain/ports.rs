use crate::config::locale::LocaleBundle;
use crate::domain::model::Language;
use crate::utils::error::Result;

/// Where locale bundles come from: compiled-in defaults or a directory of
/// TOML files.
pub trait LocaleSource {
    fn bundle(&self, language: Language) -> Result<LocaleBundle>;
}

/// Everything the report engine needs to know about one request.
pub trait ReportRequest {
    fn full_name(&self) -> &str;
    fn birth_date(&self) -> &str;
    fn language_code(&self) -> &str;
}
