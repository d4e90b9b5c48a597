use std::sync::LazyLock;

use hashbrown::HashSet;
use regex::Regex;

use crate::encoding::{DEFAULT_ENCODING, percent_encode};
use crate::types::{ParamMap, ParamValue};

use super::{ACTION, CONTROLLER, CreateUrlError, CreateUrlResult, UrlMapping};

const CAPTURED_DOUBLE_WILDCARD: &str = "(**)";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\*\*?\)").unwrap());

impl UrlMapping {
    /// Builds the URL for this mapping from the supplied parameter values,
    /// appending any values not consumed by the pattern as a query string.
    /// `encoding` defaults to UTF-8.
    pub fn create_url(
        &self,
        parameter_values: &ParamMap,
        encoding: Option<&str>,
    ) -> CreateUrlResult<String> {
        self.create_url_internal("", parameter_values, encoding)
    }

    /// Like [`create_url`](Self::create_url), prefixed with the application's
    /// context path.
    pub fn create_url_in_context(
        &self,
        context_path: &str,
        parameter_values: &ParamMap,
        encoding: Option<&str>,
    ) -> CreateUrlResult<String> {
        self.create_url_internal(context_path, parameter_values, encoding)
    }

    pub fn create_url_with_fragment(
        &self,
        parameter_values: &ParamMap,
        encoding: Option<&str>,
        fragment: &str,
    ) -> CreateUrlResult<String> {
        let url = self.create_url(parameter_values, encoding)?;
        let encoding = encoding.unwrap_or(DEFAULT_ENCODING);
        Ok(format!("{url}#{}", percent_encode(fragment, encoding)?))
    }

    /// Builds the URL with explicit controller and action names layered over
    /// the supplied values. The caller's map is left untouched.
    pub fn create_url_for(
        &self,
        controller: Option<&str>,
        action: Option<&str>,
        parameter_values: &ParamMap,
        encoding: Option<&str>,
    ) -> CreateUrlResult<String> {
        let mut values = parameter_values.clone();
        if let Some(controller) = controller.filter(|name| !name.trim().is_empty()) {
            values.insert(CONTROLLER.to_string(), ParamValue::from(controller));
        }
        if let Some(action) = action.filter(|name| !name.trim().is_empty()) {
            values.insert(ACTION.to_string(), ParamValue::from(action));
        }
        self.create_url(&values, encoding)
    }

    fn create_url_internal(
        &self,
        context_path: &str,
        parameter_values: &ParamMap,
        encoding: Option<&str>,
    ) -> CreateUrlResult<String> {
        let encoding = encoding.unwrap_or(DEFAULT_ENCODING);
        let mut uri = String::from(context_path);
        let mut used: HashSet<&str> = HashSet::new();
        let mut param_index = 0usize;

        'tokens: for token in self.data().tokens() {
            if PLACEHOLDER.is_match(token) {
                let mut substituted = String::new();
                let mut tail = 0usize;

                for placeholder in PLACEHOLDER.find_iter(token) {
                    substituted.push_str(&token[tail..placeholder.start()]);
                    tail = placeholder.end();

                    let constraint = &self.constraints()[param_index];
                    param_index += 1;
                    used.insert(constraint.name());

                    match parameter_values.get(constraint.name()) {
                        Some(value) => substituted.push_str(&value.as_text()),
                        None if constraint.is_nullable() => {}
                        None => {
                            return Err(CreateUrlError::MissingRouteParameter {
                                mapping: self.data().url_pattern().to_string(),
                                name: constraint.name().to_string(),
                            });
                        }
                    }
                }
                substituted.push_str(&token[tail..]);

                if substituted.contains('/') && token == CAPTURED_DOUBLE_WILDCARD {
                    // embedded separators are structural: encode each segment on its own
                    let trimmed = substituted.strip_prefix('/').unwrap_or(&substituted);
                    let mut segments: Vec<&str> = trimmed.split('/').collect();
                    while segments.last() == Some(&"") {
                        segments.pop();
                    }
                    for segment in segments {
                        uri.push('/');
                        uri.push_str(&percent_encode(segment, encoding)?);
                    }
                } else if !substituted.is_empty() {
                    uri.push('/');
                    uri.push_str(&percent_encode(&substituted, encoding)?);
                } else {
                    // an absent optional segment truncates the rest of the path
                    break 'tokens;
                }
            } else {
                uri.push('/');
                uri.push_str(token);
            }
        }

        self.append_query_string(&mut uri, parameter_values, used, encoding)?;

        tracing::debug!(uri = %uri, pattern = %self.data().url_pattern(), "created reverse url mapping");
        Ok(uri)
    }

    fn append_query_string(
        &self,
        uri: &mut String,
        parameter_values: &ParamMap,
        mut used: HashSet<&str>,
        encoding: &str,
    ) -> CreateUrlResult<()> {
        // controller and action are always consumed by mapping resolution,
        // captured or not
        used.insert(CONTROLLER);
        used.insert(ACTION);

        let mut added = false;
        for (name, value) in parameter_values {
            if used.contains(name.as_str()) {
                continue;
            }
            uri.push(if added { '&' } else { '?' });
            added = true;

            match value {
                ParamValue::Single(single) => append_pair(uri, name, single, encoding)?,
                ParamValue::Multiple(values) => {
                    for (i, single) in values.iter().enumerate() {
                        if i > 0 {
                            uri.push('&');
                        }
                        append_pair(uri, name, single, encoding)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn append_pair(uri: &mut String, name: &str, value: &str, encoding: &str) -> CreateUrlResult<()> {
    uri.push_str(&percent_encode(name, encoding)?);
    uri.push('=');
    uri.push_str(&percent_encode(value, encoding)?);
    Ok(())
}
