//! Shape-kind dispatch enums.
//!
//! `compute` matches the lowercased shape name against these exact-match
//! tables. Names outside the table land on the `Unknown` variant, which
//! carries the generic fallback formula, so dispatch is total and the
//! fallback order is auditable.

use serde::{Deserialize, Serialize};

/// Recognized 2D shapes of the calculator dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind2d {
    Circle,
    Square,
    Rectangle,
    ScaleneTriangle,
    IsoscelesTriangle,
    RightTriangle,
    EquilateralTriangle,
    Rhombus,
    Parallelogram,
    Trapezoid,
    RegularPentagon,
    RegularHexagon,
    RegularOctagon,
    Unknown,
}

impl ShapeKind2d {
    /// Case-insensitive exact-name dispatch.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "circle" => Self::Circle,
            "square" => Self::Square,
            "rectangle" => Self::Rectangle,
            "scalene triangle" => Self::ScaleneTriangle,
            "isosceles triangle" => Self::IsoscelesTriangle,
            "right triangle" => Self::RightTriangle,
            "equilateral triangle" => Self::EquilateralTriangle,
            "rhombus" => Self::Rhombus,
            "parallelogram" => Self::Parallelogram,
            "trapezoid" => Self::Trapezoid,
            "regular pentagon" => Self::RegularPentagon,
            "regular hexagon" => Self::RegularHexagon,
            "regular octagon" => Self::RegularOctagon,
            _ => Self::Unknown,
        }
    }
}

/// Recognized 3D shapes of the calculator dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind3d {
    Sphere,
    Cube,
    Cuboid,
    Cylinder,
    Cone,
    Tetrahedron,
    Octahedron,
    Torus,
    Unknown,
}

impl ShapeKind3d {
    /// Case-insensitive exact-name dispatch. The catalog display names
    /// "Cube (Hexahedron)" and "Cuboid (Rectangular Prism)" are accepted
    /// alongside the bare names.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "sphere" => Self::Sphere,
            "cube (hexahedron)" | "cube" => Self::Cube,
            "cuboid (rectangular prism)" | "cuboid" => Self::Cuboid,
            "cylinder" => Self::Cylinder,
            "cone" => Self::Cone,
            "tetrahedron" => Self::Tetrahedron,
            "octahedron" => Self::Octahedron,
            "torus" => Self::Torus,
            _ => Self::Unknown,
        }
    }
}
