use std::fmt;

/// The parsed form of a declared URL pattern: its `?`-stripped path tokens and
/// the logical URL variants derived from optional tokens.
///
/// A token declared with a trailing `?` is optional; each optional token
/// contributes one additional, shorter logical URL that omits it and everything
/// following it. Variants are ordered most specific (longest) first so that the
/// matcher prefers the fullest form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPatternData {
    url_pattern: String,
    tokens: Vec<String>,
    logical_urls: Vec<String>,
}

impl UrlPatternData {
    pub fn parse(url_pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut logical_urls = Vec::new();
        let mut buf = String::new();

        for raw in url_pattern.split('/').filter(|t| !t.is_empty()) {
            let (token, optional) = match raw.strip_suffix('?') {
                // a bare '?' token is not an optional marker
                Some(stripped) if !stripped.is_empty() => (stripped, true),
                _ => (raw, false),
            };

            if optional {
                logical_urls.push(if buf.is_empty() {
                    String::from("/")
                } else {
                    buf.clone()
                });
            }

            buf.push('/');
            buf.push_str(token);
            tokens.push(token.to_string());
        }

        if buf.is_empty() {
            buf.push('/');
        }
        logical_urls.push(buf);
        logical_urls.reverse();

        Self {
            url_pattern: url_pattern.to_string(),
            tokens,
            logical_urls,
        }
    }

    /// The original declared pattern, optional markers included.
    pub fn url_pattern(&self) -> &str {
        &self.url_pattern
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Logical URL variants, most specific first.
    pub fn logical_urls(&self) -> &[String] {
        &self.logical_urls
    }
}

impl fmt::Display for UrlPatternData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url_pattern)
    }
}
