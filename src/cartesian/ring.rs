use num_traits::Float;

use crate::{
    Tolerance,
    cartesian::{BoundingBox, Point, Segment, determinant::Determinant},
};

/// The direction in which a [`Ring`] is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Returns the opposite orientation.
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A closed boundary in the plain.
///
/// The last vertex is implicitly connected to the first one.
#[derive(Debug, Default, Clone)]
pub struct Ring<T = f64> {
    /// The ordered list of vertices describing the boundary.
    pub(crate) vertices: Vec<Point<T>>,
}

impl<T, P> From<Vec<P>> for Ring<T>
where
    T: PartialEq,
    P: Into<Point<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        Self::new(vertices)
    }
}

impl<T> FromIterator<Point<T>> for Ring<T>
where
    T: PartialEq,
{
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> PartialEq for Ring<T>
where
    T: Clone + PartialEq,
{
    /// Two rings are equal if, and only if, they have the same vertices describing the same
    /// boundary.
    fn eq(&self, other: &Self) -> bool {
        let len = self.vertices.len();
        if len != other.vertices.len() {
            return false;
        }

        if len == 0 {
            return true;
        }

        let mut double = other.vertices.clone();
        double.extend_from_slice(&other.vertices);

        (0..len).any(|padding| double[padding..padding + len] == self.vertices)
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = Point<T>;
    type IntoIter = std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<T> Ring<T>
where
    T: PartialEq,
{
    /// Returns the ring traversing the given vertices.
    ///
    /// Consecutive repeated vertices are merged, and a closing vertex equal to the first one is
    /// dropped.
    pub fn new<P>(vertices: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<Point<T>>,
    {
        let mut cleaned: Vec<Point<T>> = Vec::new();
        for vertex in vertices.into_iter().map(Into::into) {
            if cleaned.last() != Some(&vertex) {
                cleaned.push(vertex);
            }
        }

        while cleaned.len() > 1 && cleaned.first() == cleaned.last() {
            cleaned.pop();
        }

        Self { vertices: cleaned }
    }
}

impl<T> Ring<T> {
    /// Returns the ordered list of vertices of the ring.
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    /// Returns the ordered list of vertices of the ring, consuming it.
    pub fn into_vertices(self) -> Vec<Point<T>> {
        self.vertices
    }

    /// Returns the amount of vertices in the ring.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if, and only if, the ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an ordered iterator over all the segments of this ring, the closing one included.
    pub fn edges(&self) -> impl Iterator<Item = Segment<'_, T>> {
        self.vertices
            .iter()
            .zip(self.vertices.iter().skip(1).chain(self.vertices.first()))
            .map(|(from, to)| Segment { from, to })
    }

    /// Returns this ring with the reversed orientation.
    pub fn reversed(mut self) -> Self {
        self.vertices.reverse();
        self
    }
}

impl<T> Ring<T>
where
    T: Float,
{
    /// Returns the signed area enclosed by the ring.
    ///
    /// The area is positive when the ring is traversed clockwise, with the vertical axis
    /// pointing up (towards north for geographic coordinates).
    pub fn signed_area(&self) -> T {
        let two = T::one() + T::one();
        self.edges()
            .map(|segment| (segment.to.x - segment.from.x) * (segment.to.y + segment.from.y))
            .fold(T::zero(), |sum, term| sum + term)
            / two
    }

    /// Returns the area enclosed by the ring.
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Returns the orientation of the ring, if conclusive.
    ///
    /// A ring enclosing no area has no orientation.
    pub fn orientation(&self) -> Option<Orientation> {
        let area = self.signed_area();
        if area > T::zero() {
            Some(Orientation::Clockwise)
        } else if area < T::zero() {
            Some(Orientation::CounterClockwise)
        } else {
            None
        }
    }

    /// Returns true if the ring is oriented clockwise, false if counter-clockwise, and none if
    /// the orientation is inconclusive.
    pub fn is_clockwise(&self) -> Option<bool> {
        self.orientation()
            .map(|orientation| orientation == Orientation::Clockwise)
    }

    /// Returns this ring with the given orientation.
    ///
    /// A ring with no orientation is returned as is.
    pub fn oriented(self, orientation: Orientation) -> Self {
        match self.orientation() {
            Some(current) if current != orientation => self.reversed(),
            _ => self,
        }
    }

    /// Returns true if, and only if, the ring cannot enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.orientation().is_none()
    }

    /// Returns the bounding box of the ring, if any.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::from_points(&self.vertices)
    }

    /// Returns the amount of times this ring winds around the given point.
    ///
    /// Counter-clockwise turns count positive, clockwise turns count negative.
    pub fn winding(&self, point: &Point<T>) -> isize {
        self.edges().fold(0, |winding, segment| {
            let side = Determinant::from([segment.from, segment.to, point]).into_inner();

            if segment.from.y <= point.y {
                if segment.to.y > point.y && side > T::zero() {
                    return winding + 1;
                }
            } else if segment.to.y <= point.y && side < T::zero() {
                return winding - 1;
            }

            winding
        })
    }

    /// Returns true if, and only if, the given point is enclosed by this ring.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.winding(point) != 0
    }

    /// Tries to construct a ring from the raw vertices produced by a clipping operation.
    pub(crate) fn from_raw(vertices: Vec<Point<T>>, tolerance: &Tolerance<T>) -> Option<Self> {
        let ring = Self::new(vertices);
        if ring.vertices.len() < 3 || tolerance.is_negligible(ring.signed_area()) {
            return None;
        }

        Some(ring)
    }
}
