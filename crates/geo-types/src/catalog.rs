use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// A single entry in the static content catalog.
///
/// Entries are reference data: built once at startup and never mutated.
/// `formula` holds the primary notation string (area formula for 2D
/// shapes, volume formula for solids, symbol notation for line concepts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier, unique within the domain.
    pub id: String,
    /// Display name shown in lists and quiz options.
    pub name: String,
    pub description: String,
    pub domain: Domain,
    /// Category slug, e.g. "triangles", "platonic".
    pub category: String,
    /// Short property statements, ordered as displayed.
    pub properties: Vec<String>,
    /// Primary formula notation, if the entry has one.
    pub formula: Option<String>,
    /// Surface-area notation (solids only).
    pub surface_area: Option<String>,
    /// Accent color hint for rendering.
    pub color: String,
    /// Face/edge/vertex counts (solids that record them).
    pub topology: Option<TopologyInfo>,
}

impl CatalogEntry {
    /// The progress-set identifier for this entry (`3d-cube` etc.).
    pub fn scoped_id(&self) -> String {
        self.domain.scoped_id(&self.id)
    }
}

/// Face/edge/vertex counts and the Euler check string for a solid.
///
/// All fields are display strings because the dataset mixes counts with
/// annotations ("2 circles + 1 curved", "1 (apex)").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyInfo {
    pub faces: Option<String>,
    pub edges: Option<String>,
    pub vertices: Option<String>,
    /// Euler characteristic check, e.g. "6 - 12 + 8 = 2 ✓".
    pub euler_formula: Option<String>,
}

/// A category of catalog entries within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
