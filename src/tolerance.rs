use num_traits::Float;

/// A value that is always positive.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Positive<T>(T);

impl<T> From<T> for Positive<T>
where
    T: Float,
{
    fn from(value: T) -> Self {
        Self(value.abs())
    }
}

impl<T> Positive<T> {
    /// Returns the inner value of self.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// The acceptable deviation between two values.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// The maximum allowed difference between two values, relative to their magnitude.
    pub relative: Positive<T>,
    /// Used to compare values near zero.
    pub absolute: Positive<T>,
}

impl<T> Tolerance<T>
where
    T: Float,
{
    /// Returns a tolerance that only accepts an absolute deviation.
    pub fn absolute(value: T) -> Self {
        Self {
            relative: Positive(T::zero()),
            absolute: value.into(),
        }
    }

    /// Returns a copy of self with the given relative deviation.
    pub fn with_relative(self, value: T) -> Self {
        Self {
            relative: value.into(),
            ..self
        }
    }

    /// Returns true if, and only if, the given value is indistinguishable from zero.
    pub fn is_negligible(&self, value: T) -> bool {
        value.is_close(&T::zero(), self)
    }
}

/// A value whose equality depends on a tolerance.
pub trait IsClose {
    type Tolerance;

    /// Returns true if, and only if, self and rhs are close enough given a tolerance;
    /// otherwise returns false.
    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool;
}

impl<T> IsClose for T
where
    T: Float,
{
    type Tolerance = Tolerance<T>;

    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool {
        (*self - *rhs).abs()
            <= T::max(
                tolerance.relative.0 * T::max(self.abs(), rhs.abs()),
                tolerance.absolute.0,
            )
    }
}
