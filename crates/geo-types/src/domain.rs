use serde::{Deserialize, Serialize};

/// The three content domains of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Lines, rays, segments, angles and related concepts.
    #[serde(rename = "lines")]
    Lines,
    /// Flat shapes: circles, polygons, stars.
    #[serde(rename = "2d")]
    TwoD,
    /// Solids: polyhedra, surfaces of revolution.
    #[serde(rename = "3d")]
    ThreeD,
}

impl Domain {
    /// Prefix used to scope progress identifiers, e.g. `3d-cube`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Domain::Lines => "lines",
            Domain::TwoD => "2d",
            Domain::ThreeD => "3d",
        }
    }

    /// The word quiz prompts use for an item of this domain.
    pub fn noun(&self) -> &'static str {
        match self {
            Domain::Lines => "concept",
            _ => "shape",
        }
    }

    /// Plural noun for user-facing copy ("Add more shapes to start.").
    pub fn noun_plural(&self) -> &'static str {
        match self {
            Domain::Lines => "concepts",
            _ => "shapes",
        }
    }

    /// Build the progress-set identifier for an entry of this domain.
    pub fn scoped_id(&self, entry_id: &str) -> String {
        format!("{}-{}", self.prefix(), entry_id)
    }

    /// The dimensionality the calculator uses, if the domain has one.
    /// Line concepts have no measurable dimensions.
    pub fn dimensionality(&self) -> Option<Dimensionality> {
        match self {
            Domain::Lines => None,
            Domain::TwoD => Some(Dimensionality::TwoD),
            Domain::ThreeD => Some(Dimensionality::ThreeD),
        }
    }
}

/// Whether a shape is measured in 2D (area/perimeter) or 3D
/// (volume/surface area) terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimensionality {
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_ids_carry_domain_prefix() {
        assert_eq!(Domain::ThreeD.scoped_id("cube"), "3d-cube");
        assert_eq!(Domain::TwoD.scoped_id("circle"), "2d-circle");
        assert_eq!(Domain::Lines.scoped_id("midpoint"), "lines-midpoint");
    }

    #[test]
    fn lines_use_concept_noun() {
        assert_eq!(Domain::Lines.noun(), "concept");
        assert_eq!(Domain::TwoD.noun(), "shape");
        assert_eq!(Domain::ThreeD.noun(), "shape");
    }

    #[test]
    fn serde_tags_match_ui_vocabulary() {
        assert_eq!(serde_json::to_string(&Domain::ThreeD).unwrap(), "\"3d\"");
        let d: Domain = serde_json::from_str("\"lines\"").unwrap();
        assert_eq!(d, Domain::Lines);
    }

    #[test]
    fn lines_have_no_dimensionality() {
        assert!(Domain::Lines.dimensionality().is_none());
        assert_eq!(Domain::TwoD.dimensionality(), Some(Dimensionality::TwoD));
    }
}
