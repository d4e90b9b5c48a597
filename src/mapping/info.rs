use crate::types::{ParamMap, ParamValue};

/// A controller, action or view identifier on a mapping.
///
/// `Fixed` values are known at configuration time. `Deferred` values name a
/// constrained property whose value is only known once the current request's
/// parameters exist; they resolve late, against whatever parameter map the
/// caller supplies at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingTarget {
    Fixed(String),
    Deferred(String),
}

impl MappingTarget {
    pub fn resolve<'a>(&'a self, current_params: &'a ParamMap) -> Option<&'a str> {
        match self {
            MappingTarget::Fixed(value) => Some(value),
            MappingTarget::Deferred(property) => {
                current_params.get(property).and_then(ParamValue::as_single)
            }
        }
    }
}

/// The outcome of a successful match: captured parameters, residual key/value
/// pairs and fixed extras, plus the mapping's target identifiers.
#[derive(Debug, Clone)]
pub struct UrlMatchInfo {
    pattern: String,
    params: ParamMap,
    controller: Option<MappingTarget>,
    action: Option<MappingTarget>,
    view: Option<MappingTarget>,
}

impl UrlMatchInfo {
    pub(crate) fn new(
        pattern: String,
        params: ParamMap,
        controller: Option<MappingTarget>,
        action: Option<MappingTarget>,
        view: Option<MappingTarget>,
    ) -> Self {
        Self {
            pattern,
            params,
            controller,
            action,
            view,
        }
    }

    /// The declared pattern of the mapping that produced this match.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn parameters(&self) -> &ParamMap {
        &self.params
    }

    pub fn into_parameters(self) -> ParamMap {
        self.params
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
}
