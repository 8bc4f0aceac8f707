use num_traits::Float;

use crate::{
    cartesian::Point,
    clipper::{Role, btree::PartialOrdBTreeMap},
};

/// A directed piece of boundary between two consecutive nodes of the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Fragment<T> {
    pub(crate) from: Point<T>,
    pub(crate) to: Point<T>,
    pub(crate) role: Role,
}

impl<T> Fragment<T> {
    /// Returns the same fragment traversed the other way around.
    pub(crate) fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            role: self.role,
        }
    }
}

/// Joins fragments end to end, yielding the vertices of every closed boundary they make up.
///
/// At a vertex with more than one way out, the left-most turn is taken. A sequence of fragments
/// that cannot be closed is dropped.
pub(crate) struct Chain<T> {
    fragments: Vec<Fragment<T>>,
    outgoing: PartialOrdBTreeMap<Point<T>, Vec<usize>>,
    taken: Vec<bool>,
    cursor: usize,
}

impl<T> From<Vec<Fragment<T>>> for Chain<T>
where
    T: Float,
{
    fn from(fragments: Vec<Fragment<T>>) -> Self {
        let mut outgoing = PartialOrdBTreeMap::<Point<T>, Vec<usize>>::default();
        fragments
            .iter()
            .enumerate()
            .for_each(|(index, fragment)| outgoing.get_or_default(fragment.from).push(index));

        Self {
            taken: vec![false; fragments.len()],
            fragments,
            outgoing,
            cursor: 0,
        }
    }
}

impl<T> Iterator for Chain<T>
where
    T: Float,
{
    type Item = Vec<Point<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        'chains: loop {
            let start = (self.cursor..self.fragments.len()).find(|&index| !self.taken[index])?;
            self.cursor = start + 1;
            self.taken[start] = true;

            let origin = self.fragments[start].from;
            let mut vertices = vec![origin];
            let mut current = start;

            loop {
                let fragment = self.fragments[current];
                if fragment.to == origin {
                    return Some(vertices);
                }

                vertices.push(fragment.to);
                let Some(next) = self.successor(&fragment) else {
                    continue 'chains;
                };

                self.taken[next] = true;
                current = next;
            }
        }
    }
}

impl<T> Chain<T>
where
    T: Float,
{
    /// Returns the position of the untaken fragment making the left-most turn after the given
    /// one.
    fn successor(&self, fragment: &Fragment<T>) -> Option<usize> {
        let incoming = [fragment.to.x - fragment.from.x, fragment.to.y - fragment.from.y];

        self.outgoing
            .get(fragment.to)?
            .iter()
            .copied()
            .filter(|&index| !self.taken[index])
            .map(|index| {
                let candidate = &self.fragments[index];
                if candidate.to == fragment.from {
                    return (index, T::neg_infinity());
                }

                let outgoing = [candidate.to.x - candidate.from.x, candidate.to.y - candidate.from.y];
                let cross = incoming[0] * outgoing[1] - incoming[1] * outgoing[0];
                let dot = incoming[0] * outgoing[0] + incoming[1] * outgoing[1];

                (index, cross.atan2(dot))
            })
            .fold(None, |best: Option<(usize, T)>, (index, turn)| match best {
                Some((_, max)) if max >= turn => best,
                _ => Some((index, turn)),
            })
            .map(|(index, _)| index)
    }
}
