pub mod constraints;
pub mod encoding;
pub mod errors;
pub mod mapping;
pub mod pattern;
pub mod precedence;
pub mod table;
pub mod types;

pub use constraints::{ConstraintValidator, ConstraintViolation, ParamConstraint, RegexConstraint};
pub use encoding::EncodingError;
pub use errors::{UrlMappingError, UrlMappingResult};
pub use mapping::{CreateUrlError, MappingTarget, UrlMapping, UrlMatchInfo};
pub use pattern::{PatternError, UrlPatternData};
pub use precedence::compare_precedence;
pub use table::UrlMappingTable;
pub use types::{ParamMap, ParamValue};
