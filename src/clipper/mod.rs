mod btree;
mod chain;
mod graph;

use std::marker::PhantomData;

use num_traits::Float;

use crate::{
    Shape, Tolerance,
    cartesian::{Point, Ring, Segment},
};

use self::btree::PartialOrdBTreeMap;
use self::chain::{Chain, Fragment};
use self::graph::Graph;

/// The set of fragments of both operands, keyed by role and endpoints.
type FragmentIndex<T> = PartialOrdBTreeMap<(Role, Point<T>, Point<T>), ()>;

/// Marker for yet undefined generic parameters.
pub struct Unknown;

/// The operand a piece of boundary comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Role {
    Subject,
    Clip,
}

impl Role {
    /// Returns the role of the other operand.
    pub(crate) fn opposite(self) -> Self {
        match self {
            Role::Subject => Role::Clip,
            Role::Clip => Role::Subject,
        }
    }
}

/// Where a [`Fragment`] lies relative to the other operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    /// Strictly inside the other operand.
    Inside,
    /// Strictly outside the other operand.
    Outside,
    /// Shared with the other operand, both traversing it the same way.
    Along,
    /// Shared with the other operand, each traversing it the opposite way.
    Against,
}

/// A direction to follow when emitting a [`Fragment`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    #[default]
    Forward,
    Backward,
}

/// The operation to perform by the clipping algorithm.
pub(crate) trait Operator {
    /// Returns true if, and only if, a fragment from the given operand at the given location
    /// belongs to the output of the clipping operation.
    fn is_output(role: Role, location: Location) -> bool;

    /// Returns the direction in which fragments from the given operand are emitted.
    fn direction(_: Role) -> Direction {
        Direction::Forward
    }
}

/// Implements the clipping algorithm.
pub(crate) struct Clipper<Subject, Clip, Operator, Tolerance> {
    subject: Subject,
    clip: Clip,
    tolerance: Tolerance,
    operator: PhantomData<Operator>,
}

impl Default for Clipper<Unknown, Unknown, Unknown, Unknown> {
    fn default() -> Self {
        Self {
            operator: PhantomData,
            tolerance: Unknown,
            subject: Unknown,
            clip: Unknown,
        }
    }
}

impl<Sub, Clip, Op, Tol> Clipper<Sub, Clip, Op, Tol> {
    pub(crate) fn with_operator<Operator>(self) -> Clipper<Sub, Clip, Operator, Tol> {
        Clipper {
            operator: PhantomData,
            tolerance: self.tolerance,
            subject: self.subject,
            clip: self.clip,
        }
    }
}

impl<Clip, Op, Tol> Clipper<Unknown, Clip, Op, Tol> {
    pub(crate) fn with_subject<U>(
        self,
        subject: impl Into<Shape<U>>,
    ) -> Clipper<Shape<U>, Clip, Op, Tol> {
        Clipper {
            operator: PhantomData,
            tolerance: self.tolerance,
            subject: subject.into(),
            clip: self.clip,
        }
    }
}

impl<Sub, Op, Tol> Clipper<Sub, Unknown, Op, Tol> {
    pub(crate) fn with_clip<U>(self, clip: impl Into<Shape<U>>) -> Clipper<Sub, Shape<U>, Op, Tol> {
        Clipper {
            operator: PhantomData,
            tolerance: self.tolerance,
            subject: self.subject,
            clip: clip.into(),
        }
    }
}

impl<Sub, Clip, Op> Clipper<Sub, Clip, Op, Unknown> {
    pub(crate) fn with_tolerance<Tol>(self, tolerance: Tol) -> Clipper<Sub, Clip, Op, Tol> {
        Clipper {
            operator: PhantomData,
            subject: self.subject,
            clip: self.clip,
            tolerance,
        }
    }
}

impl<T, Op> Clipper<Shape<T>, Shape<T>, Op, Tolerance<T>>
where
    T: Float,
    Op: Operator,
{
    /// Performs the clipping operation and returns the resulting [`Shape`], if any.
    pub(crate) fn execute(self) -> Option<Shape<T>> {
        let fragments = Graph::builder(&self.tolerance)
            .with_subject(&self.subject)
            .with_clip(&self.clip)
            .build()
            .fragments(&self.tolerance);

        let mut index = FragmentIndex::default();
        fragments.iter().for_each(|fragment| {
            index.insert((fragment.role, fragment.from, fragment.to), ());
        });

        let output = fragments
            .iter()
            .filter(|fragment| Op::is_output(fragment.role, self.locate(fragment, &index)))
            .map(|&fragment| match Op::direction(fragment.role) {
                Direction::Forward => fragment,
                Direction::Backward => fragment.reversed(),
            })
            .collect::<Vec<_>>();

        let mut boundaries = Chain::from(output)
            .filter_map(|vertices| Ring::from_raw(vertices, &self.tolerance))
            .collect::<Vec<_>>();

        if boundaries.is_empty() {
            return None;
        }

        // Outer boundaries go first.
        boundaries.sort_by_key(|ring| ring.is_clockwise() == Some(true));
        Some(Shape { boundaries })
    }

    /// Returns where the given fragment lies relative to the operand it does not come from.
    fn locate(&self, fragment: &Fragment<T>, index: &FragmentIndex<T>) -> Location {
        let other = fragment.role.opposite();
        if index.contains_key((other, fragment.from, fragment.to)) {
            return Location::Along;
        }

        if index.contains_key((other, fragment.to, fragment.from)) {
            return Location::Against;
        }

        let midpoint = Segment::new(&fragment.from, &fragment.to).midpoint();
        let operand = match other {
            Role::Subject => &self.subject,
            Role::Clip => &self.clip,
        };

        if operand.contains(&midpoint) {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}
