use geo_types::{CatalogEntry, Category, Domain};

/// Raw record for a line/angle concept.
struct RawConcept {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    formula: &'static str,
    properties: &'static [&'static str],
    color: &'static str,
    category: &'static str,
}

const LINES: &[RawConcept] = &[
    RawConcept {
        id: "point",
        name: "Point",
        description: "A point represents an exact location in space. It has no size, only position.",
        formula: "Notation: P or (x, y)",
        properties: &["No size", "Position only", "Zero dimensions"],
        color: "#8b5cf6",
        category: "fundamentals",
    },
    RawConcept {
        id: "line",
        name: "Line",
        description: "A line extends infinitely in both directions. It has no endpoints.",
        formula: "↔ or AB̅",
        properties: &["Infinite length", "No endpoints", "Extends both ways"],
        color: "#8b5cf6",
        category: "fundamentals",
    },
    RawConcept {
        id: "ray",
        name: "Ray",
        description: "A ray has one endpoint and extends infinitely in one direction.",
        formula: "→ or AB⃗",
        properties: &["One endpoint", "Extends one way", "Infinite length"],
        color: "#06b6d4",
        category: "fundamentals",
    },
    RawConcept {
        id: "segment",
        name: "Line Segment",
        description: "A line segment has two endpoints and a definite length.",
        formula: "AB̅ with length d",
        properties: &["Two endpoints", "Definite length", "Measurable"],
        color: "#ec4899",
        category: "fundamentals",
    },
    RawConcept {
        id: "parallel",
        name: "Parallel Lines",
        description: "Two lines that never intersect, maintaining equal distance forever.",
        formula: "l₁ ∥ l₂",
        properties: &["Never intersect", "Equal distance apart", "Same direction"],
        color: "#8b5cf6",
        category: "pairs",
    },
    RawConcept {
        id: "perpendicular",
        name: "Perpendicular Lines",
        description: "Two lines that intersect at a 90° right angle.",
        formula: "l₁ ⊥ l₂",
        properties: &["Intersect at 90°", "Form four right angles", "Shortest crossing"],
        color: "#8b5cf6",
        category: "pairs",
    },
    RawConcept {
        id: "intersecting",
        name: "Intersecting Lines",
        description: "Two lines that cross at exactly one point.",
        formula: "l₁ ∩ l₂ = {P}",
        properties: &["Cross at one point", "Form vertical angles", "Share a single point"],
        color: "#8b5cf6",
        category: "pairs",
    },
    RawConcept {
        id: "angle-acute",
        name: "Acute Angle",
        description: "An angle measuring less than 90 degrees.",
        formula: "0° < θ < 90°",
        properties: &["Less than 90°", "Sharp corner", "Smaller than a right angle"],
        color: "#8b5cf6",
        category: "angles",
    },
    RawConcept {
        id: "angle-right",
        name: "Right Angle",
        description: "An angle measuring exactly 90 degrees.",
        formula: "θ = 90°",
        properties: &["Exactly 90°", "Square corner", "Perpendicular sides"],
        color: "#8b5cf6",
        category: "angles",
    },
    RawConcept {
        id: "angle-obtuse",
        name: "Obtuse Angle",
        description: "An angle measuring more than 90 but less than 180 degrees.",
        formula: "90° < θ < 180°",
        properties: &["More than 90°", "Less than 180°", "Wide corner"],
        color: "#8b5cf6",
        category: "angles",
    },
    RawConcept {
        id: "midpoint",
        name: "Midpoint",
        description: "The point that divides a line segment into two equal parts.",
        formula: "M = ((x₁+x₂)/2, (y₁+y₂)/2)",
        properties: &["Divides segment equally", "Two equal parts", "Center of segment"],
        color: "#8b5cf6",
        category: "constructions",
    },
    RawConcept {
        id: "bisector",
        name: "Angle Bisector",
        description: "A ray that divides an angle into two equal parts.",
        formula: "∠BAD = ∠DAC",
        properties: &["Divides angle equally", "Two equal angles", "Ray from vertex"],
        color: "#8b5cf6",
        category: "constructions",
    },
];

pub(crate) fn entries() -> Vec<CatalogEntry> {
    LINES
        .iter()
        .map(|raw| CatalogEntry {
            id: raw.id.to_string(),
            name: raw.name.to_string(),
            description: raw.description.to_string(),
            domain: Domain::Lines,
            category: raw.category.to_string(),
            properties: raw.properties.iter().map(|p| p.to_string()).collect(),
            formula: Some(raw.formula.to_string()),
            surface_area: None,
            color: raw.color.to_string(),
            topology: None,
        })
        .collect()
}

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new("fundamentals", "Fundamentals"),
        Category::new("pairs", "Line Pairs"),
        Category::new("angles", "Angles"),
        Category::new("constructions", "Constructions"),
    ]
}
