//! Static content catalogs for the three domains.
//!
//! The datasets are reference data compiled into the binary: line and
//! angle concepts, 2D shapes, and solids, each with descriptions,
//! properties, formula notation, and (for solids) topology counts.
//! `Catalog::load()` builds the owned entries once; nothing here mutates
//! after that.

pub mod catalog;
pub mod search;

mod lines;
mod shapes2d;
mod shapes3d;

pub use catalog::Catalog;
pub use search::{filter_entries, matches_query};
