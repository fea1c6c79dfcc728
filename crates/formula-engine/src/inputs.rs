//! Dimension input parsing and the required-input-field tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use geo_types::{Dimensionality, InputField};

/// Raw dimension values as typed by the user, keyed by field key.
///
/// Values are kept as strings; [`DimensionInputSet::value`] applies the
/// lenient parse: a missing or non-numeric value reads as 0.0. The UI
/// cannot distinguish "user entered 0" from garbage input — a documented
/// limitation, kept for compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionInputSet(HashMap<String, String>);

impl DimensionInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's raw value, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Parse a field as f64. Unset or unparseable values read as 0.0.
    pub fn value(&self, key: &str) -> f64 {
        self.0
            .get(key)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DimensionInputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One row of the field-derivation table.
///
/// A rule matches when the lowercased shape name contains any of the
/// `any` substrings and none of the `none` substrings. An empty `any`
/// list matches everything, which is how the terminal default rule is
/// expressed.
struct FieldRule {
    any: &'static [&'static str],
    none: &'static [&'static str],
    fields: &'static [(&'static str, &'static str)],
}

impl FieldRule {
    fn matches(&self, name: &str) -> bool {
        (self.any.is_empty() || self.any.iter().any(|s| name.contains(s)))
            && !self.none.iter().any(|s| name.contains(s))
    }
}

/// Rules are checked in order; first match wins. The last rule of each
/// table is the catch-all, so derivation is total.
const RULES_3D: &[FieldRule] = &[
    FieldRule {
        any: &["sphere", "hemisphere"],
        none: &[],
        fields: &[("radius", "Radius (r)")],
    },
    FieldRule {
        any: &["cube"],
        none: &["cuboid"],
        fields: &[("side", "Side (s)")],
    },
    FieldRule {
        any: &["cuboid", "rectangular"],
        none: &[],
        fields: &[
            ("length", "Length (l)"),
            ("width", "Width (w)"),
            ("height", "Height (h)"),
        ],
    },
    FieldRule {
        any: &["cylinder", "cone"],
        none: &[],
        fields: &[("radius", "Radius (r)"), ("height", "Height (h)")],
    },
    FieldRule {
        any: &["torus"],
        none: &[],
        fields: &[("majorRadius", "Major Radius (R)"), ("radius", "Minor Radius (r)")],
    },
    FieldRule {
        any: &["tetrahedron", "octahedron", "icosahedron", "dodecahedron"],
        none: &[],
        fields: &[("side", "Edge Length (a)")],
    },
    FieldRule {
        any: &[],
        none: &[],
        fields: &[
            ("length", "Length (l)"),
            ("width", "Width (w)"),
            ("height", "Height (h)"),
        ],
    },
];

const RULES_2D: &[FieldRule] = &[
    FieldRule {
        any: &["circle", "semicircle"],
        none: &[],
        fields: &[("radius", "Radius (r)")],
    },
    FieldRule {
        any: &["square"],
        none: &[],
        fields: &[("side", "Side (s)")],
    },
    FieldRule {
        any: &["rectangle"],
        none: &[],
        fields: &[("length", "Length (l)"), ("width", "Width (w)")],
    },
    FieldRule {
        any: &["triangle"],
        none: &[],
        fields: &[
            ("base", "Base (b)"),
            ("height", "Height (h)"),
            ("side", "Side (for equilateral)"),
        ],
    },
    FieldRule {
        any: &["rhombus"],
        none: &[],
        fields: &[
            ("side", "Side (s)"),
            ("diagonal1", "Diagonal 1 (d₁)"),
            ("diagonal2", "Diagonal 2 (d₂)"),
        ],
    },
    FieldRule {
        any: &["trapezoid"],
        none: &[],
        fields: &[
            ("parallelSide1", "Parallel Side 1 (a)"),
            ("parallelSide2", "Parallel Side 2 (b)"),
            ("height", "Height (h)"),
        ],
    },
    FieldRule {
        any: &["pentagon", "hexagon", "octagon", "gon"],
        none: &[],
        fields: &[("side", "Side (s)")],
    },
    FieldRule {
        any: &[],
        none: &[],
        fields: &[("base", "Base (b)"), ("height", "Height (h)")],
    },
];

/// Derive the input fields the calculator should show for a shape.
///
/// Matching is case-insensitive substring containment over a
/// priority-ordered rule table. Unknown or empty names resolve to the
/// dimensionality's default field set; there is no error path.
pub fn required_inputs(shape_name: &str, dimensionality: Dimensionality) -> Vec<InputField> {
    let name = shape_name.to_lowercase();
    let rules = match dimensionality {
        Dimensionality::TwoD => RULES_2D,
        Dimensionality::ThreeD => RULES_3D,
    };

    // The catch-all rule guarantees a match.
    let rule = rules
        .iter()
        .find(|r| r.matches(&name))
        .unwrap_or(&rules[rules.len() - 1]);
    debug!(shape = %shape_name, fields = rule.fields.len(), "derived input fields");

    rule.fields
        .iter()
        .map(|&(key, label)| InputField::new(key, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(shape: &str, dim: Dimensionality) -> Vec<String> {
        required_inputs(shape, dim)
            .into_iter()
            .map(|f| f.key)
            .collect()
    }

    #[test]
    fn cube_is_not_routed_to_cuboid_fields() {
        assert_eq!(keys("Cube (Hexahedron)", Dimensionality::ThreeD), ["side"]);
        assert_eq!(
            keys("Cuboid (Rectangular Prism)", Dimensionality::ThreeD),
            ["length", "width", "height"]
        );
    }

    #[test]
    fn any_triangle_variant_gets_triangle_fields() {
        for name in [
            "Scalene Triangle",
            "Isosceles Triangle",
            "RIGHT TRIANGLE",
            "equilateral triangle",
        ] {
            assert_eq!(
                keys(name, Dimensionality::TwoD),
                ["base", "height", "side"]
            );
        }
    }

    #[test]
    fn polygon_names_containing_gon_get_side_field() {
        assert_eq!(keys("Regular Pentagon", Dimensionality::TwoD), ["side"]);
        assert_eq!(keys("Regular Nonagon", Dimensionality::TwoD), ["side"]);
    }

    #[test]
    fn unknown_names_fall_back_to_defaults() {
        assert_eq!(keys("", Dimensionality::TwoD), ["base", "height"]);
        assert_eq!(
            keys("möbius strip", Dimensionality::ThreeD),
            ["length", "width", "height"]
        );
    }

    #[test]
    fn lenient_parse_coerces_garbage_to_zero() {
        let mut inputs = DimensionInputSet::new();
        inputs.set("radius", "2.5");
        inputs.set("side", "1o");
        inputs.set("base", "");
        assert_eq!(inputs.value("radius"), 2.5);
        assert_eq!(inputs.value("side"), 0.0);
        assert_eq!(inputs.value("base"), 0.0);
        assert_eq!(inputs.value("never-set"), 0.0);
    }

    #[test]
    fn input_set_serializes_as_a_plain_map() {
        let inputs: DimensionInputSet = [("radius", "2")].into_iter().collect();
        let json = serde_json::to_string(&inputs).unwrap();
        assert_eq!(json, r#"{"radius":"2"}"#);
    }
}
