use crate::encoding::EncodingError;
use crate::mapping::CreateUrlError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlMappingError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    CreateUrl(#[from] CreateUrlError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

pub type UrlMappingResult<T> = Result<T, UrlMappingError>;
