mod loader;
mod point;

pub use loader::{load_points, read_points};
pub use point::Point;
