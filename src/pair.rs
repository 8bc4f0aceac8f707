/// A type that may contain a single value or a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaybePair<T> {
    Single(T),
    Pair([T; 2]),
}

impl<T> IntoIterator for MaybePair<T> {
    type Item = T;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<T>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            MaybePair::Single(value) => [Some(value), None],
            MaybePair::Pair([first, second]) => [Some(first), Some(second)],
        }
        .into_iter()
        .flatten()
    }
}
