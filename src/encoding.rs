use thiserror::Error;

pub const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("character encoding '{name}' is not supported for URL encoding")]
    Unsupported { name: String },
}

pub type EncodingResult<T> = Result<T, EncodingError>;

/// Percent-encodes `text` for use as a single URL component. The encoding name
/// must be a UTF-8 alias; anything else is a configuration error surfaced
/// immediately.
pub fn percent_encode(text: &str, encoding: &str) -> EncodingResult<String> {
    if !is_supported(encoding) {
        return Err(EncodingError::Unsupported {
            name: encoding.to_string(),
        });
    }

    Ok(urlencoding::encode(text).into_owned())
}

fn is_supported(encoding: &str) -> bool {
    encoding.eq_ignore_ascii_case("utf-8") || encoding.eq_ignore_ascii_case("utf8")
}
