pub mod date;
pub mod digital_root;
pub mod name;
pub mod report;
pub mod weton;
pub mod zodiac;

pub use crate::domain::model::{Person, WetonResult};
pub use crate::domain::ports::{LocaleSource, ReportRequest};
pub use crate::utils::error::Result;
