//! OData query option building
//!
//! Builds the `$select` / `$count` / `$top` / `$skip` / `$filter` query
//! string for each page request. Filter timestamps are formatted in UTC at
//! second precision with no sub-second component; two records whose
//! timestamps collide within the same second can be skipped or duplicated
//! across consecutive runs, which is inherent to the scheme.

use chrono::{DateTime, Utc};

/// Format applied to bookmark timestamps in `$filter` clauses
pub const FILTER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a timestamp for use in a `$filter` clause
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(FILTER_TIMESTAMP_FORMAT).to_string()
}

/// Build a strict greater-than filter on an update-timestamp field,
/// e.g. `updatedDate gt 2024-05-01T00:00:00Z`
pub fn updated_since(field: &str, ts: DateTime<Utc>) -> String {
    format!("{field} gt {}", format_timestamp(ts))
}

/// OData query options for a single page request
///
/// Emitted in a fixed order: `$select`, `$count`, `$top`, `$skip`, `$filter`.
/// Absent options are omitted entirely, never sent as empty strings.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    select: Vec<String>,
    count: bool,
    top: Option<u32>,
    skip: Option<u32>,
    filter: Option<String>,
}

impl QueryOptions {
    /// Create empty query options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `$select` field list
    #[must_use]
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select = fields.iter().map(|f| (*f).to_string()).collect();
        self
    }

    /// Request the total match count via `$count=true`
    #[must_use]
    pub fn count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Set the `$top` page size
    #[must_use]
    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Set the `$skip` offset
    #[must_use]
    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set the `$filter` clause
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Render as ordered query pairs for the HTTP layer
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.select.is_empty() {
            pairs.push(("$select".to_string(), self.select.join(",")));
        }
        if self.count {
            pairs.push(("$count".to_string(), "true".to_string()));
        }
        if let Some(top) = self.top {
            pairs.push(("$top".to_string(), top.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("$skip".to_string(), skip.to_string()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter".to_string(), filter.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests;
