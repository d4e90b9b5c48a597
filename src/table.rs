use crate::mapping::{UrlMapping, UrlMatchInfo};
use crate::precedence::compare_precedence;

/// Owns a set of mappings sorted by precedence, highest first, and probes them
/// in that order. Ties keep declaration order (the sort is stable).
#[derive(Debug)]
pub struct UrlMappingTable {
    mappings: Vec<UrlMapping>,
}

impl UrlMappingTable {
    pub fn new(mut mappings: Vec<UrlMapping>) -> Self {
        mappings.sort_by(|a, b| compare_precedence(b, a));
        Self { mappings }
    }

    /// The first mapping, in precedence order, that matches `uri`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn match_uri(&self, uri: &str) -> Option<UrlMatchInfo> {
        self.mappings.iter().find_map(|mapping| mapping.match_uri(uri))
    }

    pub fn mappings(&self) -> &[UrlMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
