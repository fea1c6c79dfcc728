use geo_types::{CatalogEntry, Category, Domain};

/// Raw record for a 2D shape.
struct RawShape {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    formula: &'static str,
    properties: &'static [&'static str],
    color: &'static str,
    category: &'static str,
}

const SHAPES_2D: &[RawShape] = &[
    // Circles & curves
    RawShape {
        id: "circle",
        name: "Circle",
        description: "A perfectly round shape where all points are equidistant from the center.",
        formula: "Area = πr², Circumference = 2πr",
        properties: &["No sides", "No vertices", "360° total"],
        color: "hsl(259 85% 65%)",
        category: "curves",
    },
    RawShape {
        id: "ellipse",
        name: "Ellipse",
        description: "An oval shape with two focal points. The sum of distances from any point to both foci is constant.",
        formula: "Area = πab",
        properties: &["Two axes", "Two foci", "Smooth curve"],
        color: "hsl(330 85% 65%)",
        category: "curves",
    },
    RawShape {
        id: "semicircle",
        name: "Semicircle",
        description: "Half of a circle, bounded by a diameter and half the circumference.",
        formula: "Area = ½πr²",
        properties: &["One curved edge", "One straight edge", "180° arc"],
        color: "hsl(195 90% 55%)",
        category: "curves",
    },
    RawShape {
        id: "quarter-circle",
        name: "Quarter Circle",
        description: "One quarter of a circle, bounded by two radii and a 90° arc.",
        formula: "Area = ¼πr²",
        properties: &["90° arc", "Two straight edges", "One vertex"],
        color: "hsl(160 70% 45%)",
        category: "curves",
    },
    RawShape {
        id: "annulus",
        name: "Annulus (Ring)",
        description: "The region between two concentric circles.",
        formula: "Area = π(R² - r²)",
        properties: &["Two circular boundaries", "Donut shape", "No vertices"],
        color: "hsl(35 90% 55%)",
        category: "curves",
    },
    RawShape {
        id: "crescent",
        name: "Crescent",
        description: "A curved shape formed by two circular arcs, resembling a moon phase.",
        formula: "Complex area formula",
        properties: &["Two curved edges", "Two cusps", "Asymmetric"],
        color: "hsl(259 85% 65%)",
        category: "curves",
    },
    // Triangles
    RawShape {
        id: "triangle",
        name: "Scalene Triangle",
        description: "A triangle with all three sides of different lengths and all angles different.",
        formula: "Area = ½ × base × height",
        properties: &["3 sides", "3 vertices", "No equal sides"],
        color: "hsl(160 70% 45%)",
        category: "triangles",
    },
    RawShape {
        id: "equilateral",
        name: "Equilateral Triangle",
        description: "A triangle with all three sides equal and all angles measuring 60°.",
        formula: "Area = (√3/4) × a²",
        properties: &["3 equal sides", "3 equal angles (60°)", "Perfect symmetry"],
        color: "hsl(259 85% 65%)",
        category: "triangles",
    },
    RawShape {
        id: "isosceles",
        name: "Isosceles Triangle",
        description: "A triangle with two sides of equal length and two equal base angles.",
        formula: "Area = ½ × base × height",
        properties: &["2 equal sides", "2 equal angles", "Line of symmetry"],
        color: "hsl(195 90% 55%)",
        category: "triangles",
    },
    RawShape {
        id: "right-triangle",
        name: "Right Triangle",
        description: "A triangle with one 90° angle. Forms the basis of trigonometry.",
        formula: "a² + b² = c² (Pythagorean)",
        properties: &["One 90° angle", "Hypotenuse", "Two legs"],
        color: "hsl(330 85% 65%)",
        category: "triangles",
    },
    RawShape {
        id: "obtuse-triangle",
        name: "Obtuse Triangle",
        description: "A triangle with one angle greater than 90°.",
        formula: "Area = ½ × base × height",
        properties: &["One obtuse angle", "Two acute angles", "3 vertices"],
        color: "hsl(35 90% 55%)",
        category: "triangles",
    },
    RawShape {
        id: "acute-triangle",
        name: "Acute Triangle",
        description: "A triangle where all three angles are less than 90°.",
        formula: "Area = ½ × base × height",
        properties: &["All angles < 90°", "3 acute angles", "3 vertices"],
        color: "hsl(160 70% 45%)",
        category: "triangles",
    },
    // Quadrilaterals
    RawShape {
        id: "square",
        name: "Square",
        description: "A four-sided regular polygon with equal sides and four right angles.",
        formula: "Area = s², Perimeter = 4s",
        properties: &["4 equal sides", "4 right angles (90°)", "4-fold symmetry"],
        color: "hsl(195 90% 55%)",
        category: "quadrilaterals",
    },
    RawShape {
        id: "rectangle",
        name: "Rectangle",
        description: "A four-sided polygon with opposite sides equal and four right angles.",
        formula: "Area = l × w, Perimeter = 2(l + w)",
        properties: &["4 sides", "4 right angles", "Opposite sides equal"],
        color: "hsl(330 85% 65%)",
        category: "quadrilaterals",
    },
    RawShape {
        id: "rhombus",
        name: "Rhombus",
        description: "A parallelogram with all four sides equal. Diagonals bisect each other at right angles.",
        formula: "Area = ½ × d₁ × d₂",
        properties: &["4 equal sides", "Opposite angles equal", "Diagonals bisect at 90°"],
        color: "hsl(160 70% 45%)",
        category: "quadrilaterals",
    },
    RawShape {
        id: "parallelogram",
        name: "Parallelogram",
        description: "A quadrilateral with opposite sides parallel and equal.",
        formula: "Area = base × height",
        properties: &["Opposite sides parallel", "Opposite angles equal", "Diagonals bisect each other"],
        color: "hsl(259 85% 65%)",
        category: "quadrilaterals",
    },
    RawShape {
        id: "trapezoid",
        name: "Trapezoid",
        description: "A quadrilateral with exactly one pair of parallel sides.",
        formula: "Area = ½(a + b) × h",
        properties: &["One pair parallel sides", "4 vertices", "Variable angles"],
        color: "hsl(195 90% 55%)",
        category: "quadrilaterals",
    },
    RawShape {
        id: "kite",
        name: "Kite",
        description: "A quadrilateral with two pairs of adjacent sides that are equal.",
        formula: "Area = ½ × d₁ × d₂",
        properties: &["2 pairs equal adjacent sides", "One line of symmetry", "Perpendicular diagonals"],
        color: "hsl(35 90% 55%)",
        category: "quadrilaterals",
    },
    // Regular polygons
    RawShape {
        id: "pentagon",
        name: "Pentagon",
        description: "A five-sided polygon. Regular pentagons have equal sides and 108° angles.",
        formula: "Area = ¼√(5(5+2√5)) × s²",
        properties: &["5 sides", "5 vertices", "Interior angles = 540°"],
        color: "hsl(330 85% 65%)",
        category: "polygons",
    },
    RawShape {
        id: "hexagon",
        name: "Hexagon",
        description: "A six-sided polygon. Found in nature in honeycombs and snowflakes.",
        formula: "Area = (3√3/2) × s²",
        properties: &["6 sides", "6 vertices", "Interior angles = 720°"],
        color: "hsl(160 70% 45%)",
        category: "polygons",
    },
    RawShape {
        id: "heptagon",
        name: "Heptagon",
        description: "A seven-sided polygon with interior angles summing to 900°.",
        formula: "Interior angle = 128.57° (regular)",
        properties: &["7 sides", "7 vertices", "Interior angles = 900°"],
        color: "hsl(259 85% 65%)",
        category: "polygons",
    },
    RawShape {
        id: "octagon",
        name: "Octagon",
        description: "An eight-sided polygon. Commonly seen in stop signs.",
        formula: "Area = 2(1 + √2) × s²",
        properties: &["8 sides", "8 vertices", "Interior angles = 1080°"],
        color: "hsl(195 90% 55%)",
        category: "polygons",
    },
    RawShape {
        id: "nonagon",
        name: "Nonagon",
        description: "A nine-sided polygon with each interior angle measuring 140°.",
        formula: "Interior angle = 140° (regular)",
        properties: &["9 sides", "9 vertices", "Interior angles = 1260°"],
        color: "hsl(330 85% 65%)",
        category: "polygons",
    },
    RawShape {
        id: "decagon",
        name: "Decagon",
        description: "A ten-sided polygon with each interior angle measuring 144°.",
        formula: "Interior angle = 144° (regular)",
        properties: &["10 sides", "10 vertices", "Interior angles = 1440°"],
        color: "hsl(160 70% 45%)",
        category: "polygons",
    },
    RawShape {
        id: "hendecagon",
        name: "Hendecagon",
        description: "An eleven-sided polygon with each interior angle measuring 147.27°.",
        formula: "Interior angle = 147.27° (regular)",
        properties: &["11 sides", "11 vertices", "Interior angles = 1620°"],
        color: "hsl(35 90% 55%)",
        category: "polygons",
    },
    RawShape {
        id: "dodecagon",
        name: "Dodecagon",
        description: "A twelve-sided polygon with each interior angle measuring 150°.",
        formula: "Interior angle = 150° (regular)",
        properties: &["12 sides", "12 vertices", "Interior angles = 1800°"],
        color: "hsl(259 85% 65%)",
        category: "polygons",
    },
    // Stars & special shapes
    RawShape {
        id: "star",
        name: "5-Point Star",
        description: "A star polygon with five points, created by extending the sides of a pentagon.",
        formula: "Point angle = 36°",
        properties: &["5 points", "10 edges", "Non-convex"],
        color: "hsl(259 85% 65%)",
        category: "special",
    },
    RawShape {
        id: "star6",
        name: "6-Point Star",
        description: "A hexagram formed by two overlapping equilateral triangles.",
        formula: "Also called Star of David",
        properties: &["6 points", "12 edges", "Two triangles"],
        color: "hsl(195 90% 55%)",
        category: "special",
    },
    RawShape {
        id: "star8",
        name: "8-Point Star",
        description: "An octagram formed by two overlapping squares.",
        formula: "Two rotated squares",
        properties: &["8 points", "16 edges", "High symmetry"],
        color: "hsl(330 85% 65%)",
        category: "special",
    },
    RawShape {
        id: "arrow",
        name: "Arrow",
        description: "A directional shape commonly used to indicate movement or direction.",
        formula: "Composite shape",
        properties: &["7 vertices", "Directional", "Asymmetric"],
        color: "hsl(160 70% 45%)",
        category: "special",
    },
    RawShape {
        id: "cross",
        name: "Cross",
        description: "A shape with four arms extending from a central point.",
        formula: "12 vertices",
        properties: &["4-fold symmetry", "12 edges", "Convex"],
        color: "hsl(35 90% 55%)",
        category: "special",
    },
    RawShape {
        id: "heart",
        name: "Heart",
        description: "A symbolic shape representing love and affection.",
        formula: "Curved composite",
        properties: &["Symmetric", "Curved edges", "One vertex"],
        color: "hsl(330 85% 65%)",
        category: "special",
    },
];

pub(crate) fn entries() -> Vec<CatalogEntry> {
    SHAPES_2D
        .iter()
        .map(|raw| CatalogEntry {
            id: raw.id.to_string(),
            name: raw.name.to_string(),
            description: raw.description.to_string(),
            domain: Domain::TwoD,
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
        Category::new("curves", "Circles & Curves"),
        Category::new("triangles", "Triangles"),
        Category::new("quadrilaterals", "Quadrilaterals"),
        Category::new("polygons", "Polygons"),
        Category::new("special", "Special"),
    ]
}
