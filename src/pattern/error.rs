use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("error evaluating mapping for pattern '{pattern}': {source}")]
    Compilation {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error(
        "pattern '{pattern}' declares {groups} capturing groups but only {constraints} constraints"
    )]
    UnboundCaptureGroups {
        pattern: String,
        groups: usize,
        constraints: usize,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
