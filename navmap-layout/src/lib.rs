pub mod error;
pub mod force;
mod rng;

pub use error::{LayoutError, Result};
pub use force::{ForceDirected, LayoutEngine, Position, layout_graph};
