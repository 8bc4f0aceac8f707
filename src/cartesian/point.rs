use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{IsClose, Tolerance};

/// A point in the plain.
///
/// Geographic coordinates are treated as planar: `x` holds the longitude and `y` the latitude.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(
    from = "[T; 2]",
    into = "[T; 2]",
    bound(serialize = "T: Copy + Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Point<T = f64> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for [T; 2] {
    fn from(point: Point<T>) -> Self {
        [point.x, point.y]
    }
}

impl<T> IsClose for Point<T>
where
    T: Float,
{
    type Tolerance = Tolerance<T>;

    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool {
        self.x.is_close(&rhs.x, tolerance) && self.y.is_close(&rhs.y, tolerance)
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns the euclidean distance between self and rhs.
    pub fn distance(&self, rhs: &Self) -> T {
        (self.x - rhs.x).hypot(self.y - rhs.y)
    }
}

/// A constructor macro for the cartesian [`Point`].
#[macro_export]
macro_rules! cartesian_point {
    ($x:expr, $y:expr) => {
        $crate::cartesian::Point { x: $x, y: $y }
    };
}
