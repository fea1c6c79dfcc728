pub mod catalog;
pub mod domain;
pub mod measure;
pub mod render;

pub use catalog::*;
pub use domain::*;
pub use measure::*;
pub use render::*;
