use serde::{Deserialize, Serialize};

/// Parameters handed to the 3D rendering collaborator.
///
/// The core never inspects the rendered output; it only assembles these
/// tuples from the selected entry and view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidRenderSpec {
    pub shape_id: String,
    pub color: String,
    pub wireframe: bool,
}

/// Parameters handed to the SVG diagram collaborator for lines and 2D
/// shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramRenderSpec {
    pub type_id: String,
    pub size: f64,
    pub color: String,
}
