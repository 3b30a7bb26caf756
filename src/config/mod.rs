#[cfg(feature = "cli")]
pub mod cli;
pub mod locale;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use locale::{EmbeddedLocales, LocaleBundle, LocaleDir};
