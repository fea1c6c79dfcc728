//! Search and category filtering over catalog entries.
//!
//! Matching is case-insensitive substring containment over an entry's
//! name, description, and property statements.

use geo_types::CatalogEntry;

/// Whether an entry matches a free-text query.
pub fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(&query)
        || entry.description.to_lowercase().contains(&query)
        || entry
            .properties
            .iter()
            .any(|p| p.to_lowercase().contains(&query))
}

/// Apply category and query filters, preserving catalog order.
///
/// An empty or absent query matches everything; `category = None` keeps
/// all categories.
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    category: Option<&str>,
    query: Option<&str>,
) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| query.map_or(true, |q| matches_query(e, q)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use geo_types::Domain;

    #[test]
    fn query_matches_name_case_insensitively() {
        let catalog = Catalog::load();
        let hits = filter_entries(catalog.entries(Domain::ThreeD), None, Some("SPHERE"));
        assert!(hits.iter().any(|e| e.id == "sphere"));
        assert!(hits.iter().any(|e| e.id == "hemisphere"));
    }

    #[test]
    fn query_matches_properties_and_description() {
        let catalog = Catalog::load();
        // "Self-dual polyhedron" is a tetrahedron property, not part of its name.
        let hits = filter_entries(catalog.entries(Domain::ThreeD), None, Some("self-dual"));
        assert!(hits.iter().any(|e| e.id == "tetrahedron"));
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let catalog = Catalog::load();
        let hits = filter_entries(catalog.entries(Domain::ThreeD), Some("platonic"), None);
        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|e| e.category == "platonic"));
    }

    #[test]
    fn filters_compose() {
        let catalog = Catalog::load();
        let hits = filter_entries(
            catalog.entries(Domain::ThreeD),
            Some("platonic"),
            Some("hexahedron"),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "cube");
    }

    #[test]
    fn no_match_yields_empty_list() {
        let catalog = Catalog::load();
        let hits = filter_entries(
            catalog.entries(Domain::TwoD),
            None,
            Some("definitely not a shape"),
        );
        assert!(hits.is_empty());
    }
}
