//! Closed-form measurement computation per shape kind.
//!
//! Results are full f64 precision; rounding to display precision is the
//! UI's job. The measurement order per shape is fixed and fully replaces
//! any previous result set.

use std::f64::consts::{PI, SQRT_2};

use tracing::instrument;

use geo_types::{Dimensionality, Measurement, Unit};

use crate::inputs::DimensionInputSet;
use crate::shapes::{ShapeKind2d, ShapeKind3d};

/// Compute the measurements for a shape from its dimension inputs.
///
/// Total over the input domain: unknown names take the generic fallback
/// formula, and unset or invalid fields read as 0.0.
#[instrument(skip(inputs))]
pub fn compute(
    shape_name: &str,
    dimensionality: Dimensionality,
    inputs: &DimensionInputSet,
) -> Vec<Measurement> {
    match dimensionality {
        Dimensionality::TwoD => compute_2d(ShapeKind2d::from_name(shape_name), inputs),
        Dimensionality::ThreeD => compute_3d(ShapeKind3d::from_name(shape_name), inputs),
    }
}

fn compute_2d(kind: ShapeKind2d, inputs: &DimensionInputSet) -> Vec<Measurement> {
    let r = inputs.value("radius");
    let s = inputs.value("side");
    let l = inputs.value("length");
    let w = inputs.value("width");
    let b = inputs.value("base");
    let h = inputs.value("height");
    let d1 = inputs.value("diagonal1");
    let d2 = inputs.value("diagonal2");

    use Unit::{Linear, Square};
    match kind {
        ShapeKind2d::Circle => vec![
            Measurement::new("Area", PI * r * r, Square),
            Measurement::new("Circumference", 2.0 * PI * r, Linear),
        ],
        ShapeKind2d::Square => vec![
            Measurement::new("Area", s * s, Square),
            Measurement::new("Perimeter", 4.0 * s, Linear),
            Measurement::new("Diagonal", s * SQRT_2, Linear),
        ],
        ShapeKind2d::Rectangle => vec![
            Measurement::new("Area", l * w, Square),
            Measurement::new("Perimeter", 2.0 * (l + w), Linear),
            Measurement::new("Diagonal", (l * l + w * w).sqrt(), Linear),
        ],
        ShapeKind2d::ScaleneTriangle | ShapeKind2d::IsoscelesTriangle | ShapeKind2d::RightTriangle => {
            vec![Measurement::new("Area", 0.5 * b * h, Square)]
        }
        ShapeKind2d::EquilateralTriangle => vec![
            Measurement::new("Area", 0.5 * b * h, Square),
            Measurement::new("Area (from side)", (3.0_f64.sqrt() / 4.0) * s * s, Square),
            Measurement::new("Perimeter", 3.0 * s, Linear),
        ],
        ShapeKind2d::Rhombus => vec![
            Measurement::new("Area", 0.5 * d1 * d2, Square),
            Measurement::new("Perimeter", 4.0 * s, Linear),
        ],
        ShapeKind2d::Parallelogram => vec![Measurement::new("Area", b * h, Square)],
        ShapeKind2d::Trapezoid => {
            let a = inputs.value("parallelSide1");
            let b2 = inputs.value("parallelSide2");
            vec![Measurement::new("Area", 0.5 * (a + b2) * h, Square)]
        }
        ShapeKind2d::RegularPentagon => vec![
            Measurement::new(
                "Area",
                0.25 * (5.0 * (5.0 + 2.0 * 5.0_f64.sqrt())).sqrt() * s * s,
                Square,
            ),
            Measurement::new("Perimeter", 5.0 * s, Linear),
        ],
        ShapeKind2d::RegularHexagon => vec![
            Measurement::new("Area", (3.0 * 3.0_f64.sqrt() / 2.0) * s * s, Square),
            Measurement::new("Perimeter", 6.0 * s, Linear),
        ],
        ShapeKind2d::RegularOctagon => vec![
            Measurement::new("Area", 2.0 * (1.0 + SQRT_2) * s * s, Square),
            Measurement::new("Perimeter", 8.0 * s, Linear),
        ],
        ShapeKind2d::Unknown => vec![Measurement::new("Area (b×h/2)", 0.5 * b * h, Square)],
    }
}

fn compute_3d(kind: ShapeKind3d, inputs: &DimensionInputSet) -> Vec<Measurement> {
    let r = inputs.value("radius");
    let s = inputs.value("side");
    let l = inputs.value("length");
    let w = inputs.value("width");
    let h = inputs.value("height");
    let major = inputs.value("majorRadius");

    use Unit::{Cubic, Linear, Square};
    match kind {
        ShapeKind3d::Sphere => vec![
            Measurement::new("Volume", (4.0 / 3.0) * PI * r * r * r, Cubic),
            Measurement::new("Surface Area", 4.0 * PI * r * r, Square),
        ],
        ShapeKind3d::Cube => vec![
            Measurement::new("Volume", s * s * s, Cubic),
            Measurement::new("Surface Area", 6.0 * s * s, Square),
            Measurement::new("Space Diagonal", s * 3.0_f64.sqrt(), Linear),
        ],
        ShapeKind3d::Cuboid => vec![
            Measurement::new("Volume", l * w * h, Cubic),
            Measurement::new("Surface Area", 2.0 * (l * w + w * h + l * h), Square),
            Measurement::new("Space Diagonal", (l * l + w * w + h * h).sqrt(), Linear),
        ],
        ShapeKind3d::Cylinder => vec![
            Measurement::new("Volume", PI * r * r * h, Cubic),
            Measurement::new("Surface Area", 2.0 * PI * r * (r + h), Square),
            Measurement::new("Lateral Area", 2.0 * PI * r * h, Square),
        ],
        ShapeKind3d::Cone => {
            let slant = (r * r + h * h).sqrt();
            vec![
                Measurement::new("Volume", (1.0 / 3.0) * PI * r * r * h, Cubic),
                Measurement::new("Surface Area", PI * r * (r + slant), Square),
                Measurement::new("Slant Height", slant, Linear),
            ]
        }
        ShapeKind3d::Tetrahedron => vec![
            Measurement::new("Volume", (s * s * s * SQRT_2) / 12.0, Cubic),
            Measurement::new("Surface Area", 3.0_f64.sqrt() * s * s, Square),
        ],
        ShapeKind3d::Octahedron => vec![
            Measurement::new("Volume", (SQRT_2 / 3.0) * s * s * s, Cubic),
            Measurement::new("Surface Area", 2.0 * 3.0_f64.sqrt() * s * s, Square),
        ],
        ShapeKind3d::Torus => vec![
            Measurement::new("Volume", 2.0 * PI * PI * major * r * r, Cubic),
            Measurement::new("Surface Area", 4.0 * PI * PI * major * r, Square),
        ],
        ShapeKind3d::Unknown => vec![Measurement::new("Volume (l×w×h)", l * w * h, Cubic)],
    }
}
