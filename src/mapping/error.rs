use crate::encoding::EncodingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateUrlError {
    #[error(
        "unable to create URL for mapping '{mapping}': parameter '{name}' is required but was not specified"
    )]
    MissingRouteParameter { mapping: String, name: String },
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

pub type CreateUrlResult<T> = Result<T, CreateUrlError>;
