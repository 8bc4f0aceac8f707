use num_traits::Float;

use crate::{
    Tolerance,
    cartesian::{BoundingBox, Orientation, Point, Ring},
    clipper::{Clipper, Direction, Location, Operator, Role},
};

/// A combination of non-crossing boundaries.
///
/// Outer boundaries are oriented counter-clockwise, holes clockwise.
#[derive(Debug, Clone)]
pub struct Shape<T = f64> {
    /// The list of non-crossing boundaries.
    pub(crate) boundaries: Vec<Ring<T>>,
}

impl<T> From<Ring<T>> for Shape<T>
where
    T: Float,
{
    fn from(ring: Ring<T>) -> Self {
        Self {
            boundaries: vec![ring.oriented(Orientation::CounterClockwise)],
        }
    }
}

impl<T> PartialEq for Shape<T>
where
    T: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.boundaries.len() != other.boundaries.len() {
            return false;
        }

        self.boundaries
            .iter()
            .all(|a| other.boundaries.iter().any(|b| a.eq(b)))
    }
}

impl<T> Shape<T>
where
    T: Float,
{
    /// Creates a new shape from the given boundary.
    pub fn new(boundary: impl Into<Ring<T>>) -> Self {
        Self::from(boundary.into())
    }

    /// Creates a new shape from the given outer boundary and holes.
    pub fn with_holes(
        outer: impl Into<Ring<T>>,
        holes: impl IntoIterator<Item = impl Into<Ring<T>>>,
    ) -> Self {
        let mut shape = Self::new(outer);
        shape.boundaries.extend(
            holes
                .into_iter()
                .map(|hole| hole.into().oriented(Orientation::Clockwise)),
        );

        shape
    }

    /// Returns the amount of times self winds around the given [`Point`].
    pub fn winding(&self, point: &Point<T>) -> isize {
        self.boundaries
            .iter()
            .map(|boundary| boundary.winding(point))
            .sum()
    }

    /// Returns true if, and only if, self encloses the given [`Point`].
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.winding(point) != 0
    }

    /// Returns the area enclosed by the shape, holes excluded.
    pub fn area(&self) -> T {
        -self
            .boundaries
            .iter()
            .fold(T::zero(), |area, boundary| area + boundary.signed_area())
    }

    /// Returns the bounding box of all the boundaries of the shape, if any.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::from_points(self.boundaries.iter().flat_map(|boundary| boundary.vertices()))
    }

    /// Returns the union of self and rhs.
    pub fn or(self, rhs: Self, tolerance: Tolerance<T>) -> Option<Self> {
        struct OrOperator;

        impl Operator for OrOperator {
            fn is_output(role: Role, location: Location) -> bool {
                match role {
                    Role::Subject => matches!(location, Location::Outside | Location::Along),
                    Role::Clip => matches!(location, Location::Outside),
                }
            }
        }

        Clipper::default()
            .with_operator::<OrOperator>()
            .with_subject(self)
            .with_clip(rhs)
            .with_tolerance(tolerance)
            .execute()
    }

    /// Returns the difference of rhs on self.
    pub fn not(self, rhs: Self, tolerance: Tolerance<T>) -> Option<Self> {
        struct NotOperator;

        impl Operator for NotOperator {
            fn is_output(role: Role, location: Location) -> bool {
                match role {
                    Role::Subject => matches!(location, Location::Outside | Location::Against),
                    Role::Clip => matches!(location, Location::Inside),
                }
            }

            fn direction(role: Role) -> Direction {
                match role {
                    Role::Subject => Direction::Forward,
                    Role::Clip => Direction::Backward,
                }
            }
        }

        Clipper::default()
            .with_operator::<NotOperator>()
            .with_clip(rhs)
            .with_subject(self)
            .with_tolerance(tolerance)
            .execute()
    }

    /// Returns the intersection of self and rhs.
    pub fn and(self, rhs: Self, tolerance: Tolerance<T>) -> Option<Self> {
        struct AndOperator;

        impl Operator for AndOperator {
            fn is_output(role: Role, location: Location) -> bool {
                match role {
                    Role::Subject => matches!(location, Location::Inside | Location::Along),
                    Role::Clip => matches!(location, Location::Inside),
                }
            }
        }

        Clipper::default()
            .with_operator::<AndOperator>()
            .with_subject(self)
            .with_clip(rhs)
            .with_tolerance(tolerance)
            .execute()
    }
}

impl<T> Shape<T> {
    /// Returns the boundaries of the shape, outer ones first.
    pub fn boundaries(&self) -> &[Ring<T>] {
        &self.boundaries
    }

    /// Returns the boundaries of the shape, consuming it.
    pub fn into_boundaries(self) -> Vec<Ring<T>> {
        self.boundaries
    }
}
