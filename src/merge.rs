//! Boolean merge of two simple rings.
//!
//! Both operations accept rings in any orientation: operands are normalized before clipping.
//! The result is zero, one or several rings, outer boundaries (counter-clockwise) first and
//! holes (clockwise) after.

use num_traits::Float;

use crate::{Shape, Tolerance, cartesian::Ring};

/// Returns the rings bounding the union of subject and clip.
pub fn union<T>(subject: &Ring<T>, clip: &Ring<T>, tolerance: Tolerance<T>) -> Vec<Ring<T>>
where
    T: Float,
{
    Shape::new(subject.clone())
        .or(Shape::new(clip.clone()), tolerance)
        .map(Shape::into_boundaries)
        .unwrap_or_default()
}

/// Returns the rings bounding what remains of subject once clip is removed from it.
pub fn difference<T>(subject: &Ring<T>, clip: &Ring<T>, tolerance: Tolerance<T>) -> Vec<Ring<T>>
where
    T: Float,
{
    Shape::new(subject.clone())
        .not(Shape::new(clip.clone()), tolerance)
        .map(Shape::into_boundaries)
        .unwrap_or_default()
}
