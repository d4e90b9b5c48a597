use std::borrow::Cow;
use std::collections::HashMap;

pub type ParamMap = HashMap<String, ParamValue>;

/// A parameter value supplied to or produced by a mapping. Reverse URL
/// generation expands `Multiple` values into repeated query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// The value as rendered into a path position. Multi-valued parameters
    /// collapse to a comma-joined list.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Single(value) => Cow::Borrowed(value),
            ParamValue::Multiple(values) => Cow::Owned(values.join(",")),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::Multiple(_) => None,
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}
