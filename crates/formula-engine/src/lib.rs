//! The formula evaluation engine.
//!
//! Two total operations over shape names:
//!
//! - [`required_inputs`] — which dimension fields the calculator should ask
//!   for, derived from an ordered substring-rule table.
//! - [`compute`] — the measurements (area, perimeter, volume, ...) for a
//!   shape given a [`DimensionInputSet`].
//!
//! Both are total by design: an unrecognized shape name falls back to a
//! generic field set / formula, and a missing or unparseable dimension
//! reads as 0.0. Neither operation has an error path.

pub mod compute;
pub mod inputs;
pub mod shapes;

pub use compute::compute;
pub use inputs::{required_inputs, DimensionInputSet};
pub use shapes::{ShapeKind2d, ShapeKind3d};
