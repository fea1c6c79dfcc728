use geo_types::{CatalogEntry, Category, Domain};

use crate::{lines, shapes2d, shapes3d};

/// The full content catalog, one entry list per domain.
///
/// Built once at startup and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    lines: Vec<CatalogEntry>,
    shapes_2d: Vec<CatalogEntry>,
    shapes_3d: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the catalog from the compiled-in datasets.
    pub fn load() -> Self {
        Self {
            lines: lines::entries(),
            shapes_2d: shapes2d::entries(),
            shapes_3d: shapes3d::entries(),
        }
    }

    /// All entries of a domain, in display order.
    pub fn entries(&self, domain: Domain) -> &[CatalogEntry] {
        match domain {
            Domain::Lines => &self.lines,
            Domain::TwoD => &self.shapes_2d,
            Domain::ThreeD => &self.shapes_3d,
        }
    }

    /// Look up an entry by its domain-local id.
    pub fn find(&self, domain: Domain, id: &str) -> Option<&CatalogEntry> {
        self.entries(domain).iter().find(|e| e.id == id)
    }

    /// The category list of a domain, in display order.
    pub fn categories(&self, domain: Domain) -> Vec<Category> {
        match domain {
            Domain::Lines => lines::categories(),
            Domain::TwoD => shapes2d::categories(),
            Domain::ThreeD => shapes3d::categories(),
        }
    }

    /// Number of entries in a domain (the denominator for progress stats).
    pub fn total(&self, domain: Domain) -> usize {
        self.entries(domain).len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}
