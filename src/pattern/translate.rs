use std::sync::LazyLock;

use regex::Regex;

use super::{PatternError, PatternResult};

// Single wildcards must collapse before double wildcards: running the `**`
// stage first would leave `.*` text that the flanked-`*` stage then corrupts.
static FLANKED_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^*])\*([^*])").unwrap());
static TRAILING_SINGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^*])\*$").unwrap());
static DOUBLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*").unwrap());

/// Translates one logical URL into regex source text.
///
/// `*` between non-wildcard characters and a trailing `*` become `[^/]+`;
/// remaining `**` runs become `.*`. Capturing parentheses written around a
/// wildcard in the declaration survive as regex capture groups. The result is
/// anchored and tolerates one optional trailing separator.
pub fn to_regex(url: &str) -> String {
    let pattern = url.replace('.', "\\.").replace('+', "\\+");
    let pattern = FLANKED_SINGLE.replace_all(&pattern, "${1}[^/]+${2}");
    let pattern = TRAILING_SINGLE.replace_all(&pattern, "${1}[^/]+");
    let pattern = DOUBLE.replace_all(&pattern, ".*");

    format!("^{pattern}/??$")
}

/// Compiles one logical URL variant. Degenerate wildcard input that produces
/// malformed regex text is a configuration-time failure.
pub fn compile_url(url: &str) -> PatternResult<Regex> {
    let source = to_regex(url);
    Regex::new(&source).map_err(|err| PatternError::Compilation {
        pattern: source,
        source: err,
    })
}
