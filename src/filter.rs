//! Listing filters.
//!
//! [`Criteria`] expresses what the search box and the status/type dropdowns
//! select; [`apply`] computes the matching subset without touching the store.
//! It is a pure, stable filter: same inputs, same output, input order
//! preserved, no re-sort.

use crate::model::{Property, Status};

/// A filter specification. Absent fields match everything.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Case-insensitive substring matched against `name`, `id`, and `project`
    /// (any of the three suffices).
    pub search: Option<String>,
    /// Exact status match.
    pub status: Option<Status>,
    /// Listing type, matched by case-insensitive equality.
    pub kind: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Check a single record against every predicate (AND semantics).
    pub fn matches(&self, record: &Property) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            // An empty search box matches everything.
            if !term.is_empty() {
                let hit = record.name.to_lowercase().contains(&term)
                    || record.id.to_lowercase().contains(&term)
                    || record.project.to_lowercase().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }

        if let Some(kind) = &self.kind {
            if !kind.is_empty() && !record.kind.eq_ignore_ascii_case(kind) {
                return false;
            }
        }

        true
    }
}

/// Filter `records` by `criteria`, preserving input order.
pub fn apply<'a, I>(records: I, criteria: &Criteria) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_records;

    fn ids<'a>(matches: &[&'a Property]) -> Vec<&'a str> {
        matches.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new());
        assert_eq!(ids(&matched), vec!["P001", "P002", "P003"]);
    }

    #[test]
    fn test_search_matches_project_substring() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_search("ocean"));
        assert_eq!(ids(&matched), vec!["P002"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_search("SUNRISE"));
        assert_eq!(ids(&matched), vec!["P001"]);
    }

    #[test]
    fn test_search_matches_id() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_search("p003"));
        assert_eq!(ids(&matched), vec!["P003"]);
    }

    #[test]
    fn test_search_or_semantics_across_fields() {
        // "plaza" appears in P003's name and project only.
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_search("plaza"));
        assert_eq!(ids(&matched), vec!["P003"]);
    }

    #[test]
    fn test_empty_search_term_matches_all() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_search(""));
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_status_filter() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_status(Status::Sold));
        assert_eq!(ids(&matched), vec!["P003"]);
    }

    #[test]
    fn test_kind_filter_is_case_insensitive_equality() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_kind("commercial"));
        assert_eq!(ids(&matched), vec!["P003"]);

        // Equality, not substring.
        let matched = apply(&records, &Criteria::new().with_kind("Comm"));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_predicates_are_anded() {
        let records = sample_records();
        let criteria = Criteria::new()
            .with_search("residences")
            .with_status(Status::Reserved);
        assert_eq!(ids(&apply(&records, &criteria)), vec!["P002"]);

        let criteria = Criteria::new()
            .with_search("residences")
            .with_status(Status::Sold);
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let records = sample_records();
        let matched = apply(&records, &Criteria::new().with_search("mountain"));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_result_preserves_input_order() {
        let records = sample_records();
        let criteria = Criteria::new().with_kind("Residential");
        assert_eq!(ids(&apply(&records, &criteria)), vec!["P001", "P002"]);
    }
}
