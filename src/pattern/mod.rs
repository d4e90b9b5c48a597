mod data;
mod error;
mod translate;

pub use data::UrlPatternData;
pub use error::{PatternError, PatternResult};
pub use translate::{compile_url, to_regex};
