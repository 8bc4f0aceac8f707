use num_traits::Float;

use crate::{
    IsClose, MaybePair, Tolerance,
    cartesian::{Point, determinant::Determinant},
};

/// The straight line between two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, T = f64> {
    /// The first point in the segment.
    pub from: &'a Point<T>,
    /// The last point in the segment.
    pub to: &'a Point<T>,
}

impl<'a, T> Segment<'a, T> {
    /// Returns the segment between the given endpoints.
    pub fn new(from: &'a Point<T>, to: &'a Point<T>) -> Self {
        Self { from, to }
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns the distance between the two endpoints of the segment.
    pub fn length(&self) -> T {
        self.from.distance(self.to)
    }

    /// Returns the middle point of the segment.
    pub fn midpoint(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point {
            x: (self.from.x + self.to.x) / two,
            y: (self.from.y + self.to.y) / two,
        }
    }

    /// Returns true if, and only if, the given point lies on this segment.
    pub fn contains(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> bool {
        if point.is_close(self.from, tolerance) || point.is_close(self.to, tolerance) {
            return true;
        }

        let length = self.length();
        if length.is_zero() {
            return false;
        }

        let determinant = Determinant::from([self.from, self.to, point]).into_inner();
        if !tolerance.is_negligible(determinant / length) {
            return false;
        }

        let projection =
            (point.x - self.from.x) * (self.to.x - self.from.x) + (point.y - self.from.y) * (self.to.y - self.from.y);

        projection >= T::zero() && projection <= length * length
    }

    /// Returns the intersection between self and rhs, if any.
    ///
    /// Collinear segments overlapping along a stretch yield the pair of points delimiting the
    /// shared stretch. Intersections at endpoints keep the exact coordinates of the endpoint.
    pub fn intersection(&self, rhs: &Self, tolerance: &Tolerance<T>) -> Option<MaybePair<Point<T>>> {
        let mut common = Vec::<Point<T>>::with_capacity(4);
        [self.from, self.to]
            .into_iter()
            .filter(|point| rhs.contains(point, tolerance))
            .chain(
                [rhs.from, rhs.to]
                    .into_iter()
                    .filter(|point| self.contains(point, tolerance)),
            )
            .for_each(|point| {
                if !common.iter().any(|other| other.is_close(point, tolerance)) {
                    common.push(*point);
                }
            });

        match common.len() {
            0 => {}
            1 => return Some(MaybePair::Single(common[0])),
            2 => return Some(MaybePair::Pair([common[0], common[1]])),
            _ => return farthest_pair(&common).map(MaybePair::Pair),
        }

        let determinant = Determinant::from([self, rhs]).into_inner();
        if determinant.is_zero() {
            // Parallel or coincident lines sharing no endpoint.
            return None;
        }

        let r = [self.to.x - self.from.x, self.to.y - self.from.y];
        let s = [rhs.to.x - rhs.from.x, rhs.to.y - rhs.from.y];
        let qp = [rhs.from.x - self.from.x, rhs.from.y - self.from.y];

        let t = (qp[0] * s[1] - qp[1] * s[0]) / determinant;
        let u = (qp[0] * r[1] - qp[1] * r[0]) / determinant;

        let unit = T::zero()..=T::one();
        if !unit.contains(&t) || !unit.contains(&u) {
            return None;
        }

        Some(MaybePair::Single(Point {
            x: self.from.x + t * r[0],
            y: self.from.y + t * r[1],
        }))
    }
}

/// Returns the two points furthest apart from each other.
fn farthest_pair<T>(points: &[Point<T>]) -> Option<[Point<T>; 2]>
where
    T: Float,
{
    let mut farthest: Option<(T, [Point<T>; 2])> = None;
    for (index, a) in points.iter().enumerate() {
        for b in &points[index + 1..] {
            let distance = a.distance(b);
            if farthest.is_none_or(|(max, _)| distance > max) {
                farthest = Some((distance, [*a, *b]));
            }
        }
    }

    farthest.map(|(_, pair)| pair)
}
