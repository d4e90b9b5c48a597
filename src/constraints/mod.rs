use std::fmt;
use std::sync::Arc;

use regex::Regex;

const CAPTURED_WILDCARD: &str = "(*)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub property: String,
    pub message: String,
}

/// Validation capability attached to a captured route parameter. Returning any
/// violation rejects the candidate match outright.
pub trait ConstraintValidator: Send + Sync {
    fn validate(&self, property: &str, value: &str) -> Vec<ConstraintViolation>;
}

/// A named constraint bound to a capturing placeholder, in declaration order.
/// Nullability is a static property of the pattern text, derived once by
/// [`bind_nullability`].
#[derive(Clone)]
pub struct ParamConstraint {
    name: String,
    nullable: bool,
    validator: Option<Arc<dyn ConstraintValidator>>,
}

impl ParamConstraint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            validator: None,
        }
    }

    pub fn with_validator(
        name: impl Into<String>,
        validator: Arc<dyn ConstraintValidator>,
    ) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            validator: Some(validator),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn validate(&self, value: &str) -> Vec<ConstraintViolation> {
        match &self.validator {
            Some(validator) => validator.validate(&self.name, value),
            None => Vec::new(),
        }
    }

    pub(crate) fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }
}

impl fmt::Debug for ParamConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamConstraint")
            .field("name", &self.name)
            .field("nullable", &self.nullable)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

/// Derives each constraint's nullable flag from where its `(*)` placeholder
/// sits in the literal pattern text.
///
/// Constraints consume successive `(*)` occurrences in order. A constraint with
/// no remaining occurrence is nullable (this covers `(**)` captures and
/// constraints on plain query parameters), as is one whose placeholder is
/// immediately followed by `?` in the declaration.
pub fn bind_nullability(url_pattern: &str, constraints: &mut [ParamConstraint]) {
    let mut pos = 0usize;

    for constraint in constraints.iter_mut() {
        match url_pattern[pos..].find(CAPTURED_WILDCARD) {
            Some(offset) => {
                let after = pos + offset + CAPTURED_WILDCARD.len();
                constraint.set_nullable(url_pattern[after..].starts_with('?'));
                pos = after;
            }
            None => {
                constraint.set_nullable(true);
                pos = url_pattern.len();
            }
        }
    }
}

/// Validates a captured value against an anchored regular expression.
#[derive(Debug, Clone)]
pub struct RegexConstraint {
    pattern: Regex,
}

impl RegexConstraint {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{pattern})$");
        Ok(Self {
            pattern: Regex::new(&anchored)?,
        })
    }
}

impl ConstraintValidator for RegexConstraint {
    fn validate(&self, property: &str, value: &str) -> Vec<ConstraintViolation> {
        if self.pattern.is_match(value) {
            Vec::new()
        } else {
            vec![ConstraintViolation {
                property: property.to_string(),
                message: format!(
                    "value '{value}' does not match pattern '{}'",
                    self.pattern.as_str()
                ),
            }]
        }
    }
}
