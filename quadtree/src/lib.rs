pub mod collision_detection;
pub mod error;
pub mod quadtree;

pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, Entry, QuadTree, QuadTreeBuilder, Quadrant};
