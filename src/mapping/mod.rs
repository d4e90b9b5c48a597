mod error;
mod info;
mod reverse;

pub use error::{CreateUrlError, CreateUrlResult};
pub use info::{MappingTarget, UrlMatchInfo};

use std::fmt;

use memchr::memchr;
use regex::Regex;
use smallvec::SmallVec;

use crate::constraints::{ParamConstraint, bind_nullability};
use crate::pattern::{PatternError, PatternResult, UrlPatternData, compile_url};
use crate::types::{ParamMap, ParamValue};

pub(crate) const CONTROLLER: &str = "controller";
pub(crate) const ACTION: &str = "action";
const VIEW: &str = "view";

/// One declared URL mapping: the pattern, one compiled matcher per logical URL
/// variant, the ordered constraints bound to its capturing placeholders, and
/// the controller/action/view identifiers it routes to.
///
/// Built once at configuration time and immutable afterwards; matching and
/// reverse URL generation take `&self` and are safe to call concurrently.
pub struct UrlMapping {
    data: UrlPatternData,
    matchers: Vec<Regex>,
    constraints: Vec<ParamConstraint>,
    controller: Option<MappingTarget>,
    action: Option<MappingTarget>,
    view: Option<MappingTarget>,
    parameter_values: ParamMap,
}

impl UrlMapping {
    pub fn builder(url_pattern: impl Into<String>) -> UrlMappingBuilder {
        UrlMappingBuilder {
            url_pattern: url_pattern.into(),
            controller: None,
            action: None,
            view: None,
            constraints: Vec::new(),
            parameter_values: ParamMap::new(),
        }
    }

    /// A mapping with constraints and nothing else configured.
    pub fn new(url_pattern: &str, constraints: Vec<ParamConstraint>) -> PatternResult<Self> {
        Self::builder(url_pattern).constraints(constraints).build()
    }

    pub fn data(&self) -> &UrlPatternData {
        &self.data
    }

    /// The logical URL variants this mapping matches, most specific first.
    pub fn logical_mappings(&self) -> &[String] {
        self.data.logical_urls()
    }

    pub fn constraints(&self) -> &[ParamConstraint] {
        &self.constraints
    }

    pub fn controller(&self) -> Option<&MappingTarget> {
        self.controller.as_ref()
    }

    pub fn action(&self) -> Option<&MappingTarget> {
        self.action.as_ref()
    }

    pub fn view(&self) -> Option<&MappingTarget> {
        self.view.as_ref()
    }

    /// Matches `uri` against each logical URL variant in order and returns the
    /// first candidate that survives constraint validation. Structural
    /// non-match and constraint rejection are both silent negatives.
    #[tracing::instrument(level = "trace", skip(self), fields(pattern = %self.data.url_pattern()))]
    pub fn match_uri(&self, uri: &str) -> Option<UrlMatchInfo> {
        for matcher in &self.matchers {
            if let Some(caps) = matcher.captures(uri)
                && let Some(info) = self.build_match_info(uri, &caps)
            {
                return Some(info);
            }
        }
        None
    }

    fn build_match_info(&self, uri: &str, caps: &regex::Captures<'_>) -> Option<UrlMatchInfo> {
        // (truncated value, end offset of the untruncated group)
        let mut captured: SmallVec<[(&str, usize); 4]> = SmallVec::new();
        for i in 1..caps.len() {
            let Some(group) = caps.get(i) else { continue };
            let mut value = group.as_str();
            // guard against an embedded query-string fragment leaking into the value
            if let Some(cut) = memchr(b'?', value.as_bytes()) {
                value = &value[..cut];
            }
            captured.push((value, group.end()));
        }

        let mut params = ParamMap::new();
        for (&(value, _), constraint) in captured.iter().zip(&self.constraints) {
            if !constraint.validate(value).is_empty() {
                return None;
            }
            params.insert(constraint.name().to_string(), ParamValue::from(value));
        }

        if let Some(&(_, last_end)) = captured.last() {
            let mut remaining = &uri[last_end..];
            if !remaining.is_empty() {
                if let Some(stripped) = remaining.strip_prefix('/') {
                    remaining = stripped;
                }
                let segments: Vec<&str> = remaining.split('/').collect();
                // consecutive pairs; an unpaired trailing token is dropped
                for pair in segments.chunks(2) {
                    if let [name, value] = pair {
                        params.insert(name.to_string(), ParamValue::from(*value));
                    }
                }
            }
        }

        // fixed extra values take precedence over anything captured
        for (name, value) in &self.parameter_values {
            params.insert(name.clone(), value.clone());
        }

        Some(UrlMatchInfo::new(
            self.data.url_pattern().to_string(),
            params,
            self.controller.clone(),
            self.action.clone(),
            self.view.clone(),
        ))
    }
}

impl fmt::Display for UrlMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data.url_pattern())
    }
}

impl fmt::Debug for UrlMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlMapping")
            .field("pattern", &self.data.url_pattern())
            .field("constraints", &self.constraints)
            .finish()
    }
}

pub struct UrlMappingBuilder {
    url_pattern: String,
    controller: Option<String>,
    action: Option<String>,
    view: Option<String>,
    constraints: Vec<ParamConstraint>,
    parameter_values: ParamMap,
}

impl UrlMappingBuilder {
    pub fn controller(mut self, name: impl Into<String>) -> Self {
        self.controller = Some(name.into());
        self
    }

    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.action = Some(name.into());
        self
    }

    pub fn view(mut self, name: impl Into<String>) -> Self {
        self.view = Some(name.into());
        self
    }

    pub fn constraint(mut self, constraint: ParamConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn constraints(mut self, constraints: Vec<ParamConstraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// A fixed extra parameter merged into every match, overwriting captured
    /// values of the same name.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameter_values.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> PatternResult<UrlMapping> {
        let data = UrlPatternData::parse(&self.url_pattern);

        let mut matchers = Vec::with_capacity(data.logical_urls().len());
        for url in data.logical_urls() {
            matchers.push(compile_url(url)?);
        }

        let mut constraints = self.constraints;
        // the most specific variant carries every capturing group
        let groups = matchers
            .first()
            .map(|m| m.captures_len() - 1)
            .unwrap_or_default();
        if groups > constraints.len() {
            return Err(PatternError::UnboundCaptureGroups {
                pattern: data.url_pattern().to_string(),
                groups,
                constraints: constraints.len(),
            });
        }

        bind_nullability(data.url_pattern(), &mut constraints);

        let controller = resolve_target(self.controller, CONTROLLER, &constraints);
        let action = resolve_target(self.action, ACTION, &constraints);
        let view = resolve_target(self.view, VIEW, &constraints);

        Ok(UrlMapping {
            data,
            matchers,
            constraints,
            controller,
            action,
            view,
            parameter_values: self.parameter_values,
        })
    }
}

fn resolve_target(
    fixed: Option<String>,
    property: &str,
    constraints: &[ParamConstraint],
) -> Option<MappingTarget> {
    if let Some(value) = fixed {
        return Some(MappingTarget::Fixed(value));
    }
    constraints
        .iter()
        .find(|c| c.name() == property)
        .map(|c| MappingTarget::Deferred(c.name().to_string()))
}
