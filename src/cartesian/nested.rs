use serde::Deserialize;

use crate::cartesian::{Point, Ring};

/// A sequence of points possibly split into nested groups, as supplied by drawing surfaces that
/// mark holes with sub-arrays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Nested<T = f64> {
    /// A plain sequence of points.
    Path(Vec<Point<T>>),
    /// A sequence of nested structures.
    Group(Vec<Nested<T>>),
}

impl<T> From<Vec<Point<T>>> for Nested<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self::Path(points)
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(group: Vec<Nested<T>>) -> Self {
        Self::Group(group)
    }
}

impl<T> From<Nested<T>> for Ring<T>
where
    T: num_traits::Float,
{
    fn from(nested: Nested<T>) -> Self {
        Ring::new(flatten(&nested))
    }
}

/// Concatenates all the leaf point sequences of the given structure, preserving their order.
pub fn flatten<T>(nested: &Nested<T>) -> Vec<Point<T>>
where
    T: Copy,
{
    fn walk<T: Copy>(nested: &Nested<T>, points: &mut Vec<Point<T>>) {
        match nested {
            Nested::Path(path) => points.extend_from_slice(path),
            Nested::Group(group) => group.iter().for_each(|nested| walk(nested, points)),
        }
    }

    let mut points = Vec::new();
    walk(nested, &mut points);
    points
}
