//! Planar geometry primitives.

mod bbox;
mod determinant;
mod nested;
mod point;
mod ring;
mod segment;

pub use self::bbox::BoundingBox;
pub use self::nested::{Nested, flatten};
pub use self::point::Point;
pub use self::ring::{Orientation, Ring};
pub use self::segment::Segment;
