use num_traits::Float;

use crate::cartesian::Point;

/// The axis-aligned rectangle enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T = f64> {
    /// The corner with the lowest coordinates.
    pub min: Point<T>,
    /// The corner with the highest coordinates.
    pub max: Point<T>,
}

impl<T> BoundingBox<T>
where
    T: Float,
{
    /// Returns the smallest box enclosing all the given points, if any.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point<T>>) -> Option<Self>
    where
        T: 'a,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;

        Some(points.fold(
            Self {
                min: first,
                max: first,
            },
            |bbox, point| Self {
                min: Point {
                    x: bbox.min.x.min(point.x),
                    y: bbox.min.y.min(point.y),
                },
                max: Point {
                    x: bbox.max.x.max(point.x),
                    y: bbox.max.y.max(point.y),
                },
            },
        ))
    }

    /// Returns true if, and only if, self and rhs overlap, touching edges included.
    pub fn intersects(&self, rhs: &Self) -> bool {
        self.min.x <= rhs.max.x
            && rhs.min.x <= self.max.x
            && self.min.y <= rhs.max.y
            && rhs.min.y <= self.max.y
    }

    /// Returns the extent of the box along each axis.
    pub fn size(&self) -> [T; 2] {
        [self.max.x - self.min.x, self.max.y - self.min.y]
    }
}
