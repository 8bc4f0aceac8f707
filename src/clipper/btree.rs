use std::{cmp::Ordering, collections::BTreeMap};

/// A key whose order is given by its partial order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PartialOrdKey<T>(T);

impl<T> PartialOrd for PartialOrdKey<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Eq for PartialOrdKey<T> where T: PartialEq {}
impl<T> Ord for PartialOrdKey<T>
where
    T: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Less)
    }
}

impl<T> From<T> for PartialOrdKey<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// A [`BTreeMap`] whose keys are only partially ordered, like floating point coordinates.
#[derive(Debug)]
pub(super) struct PartialOrdBTreeMap<K, V>(BTreeMap<PartialOrdKey<K>, V>);

impl<K, V> Default for PartialOrdBTreeMap<K, V> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K, V> PartialOrdBTreeMap<K, V>
where
    K: PartialOrd,
{
    pub(super) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key.into(), value)
    }

    pub(super) fn get(&self, key: K) -> Option<&V> {
        self.0.get(&key.into())
    }

    pub(super) fn contains_key(&self, key: K) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Returns a mutable reference to the value of the given key, inserting the default value
    /// first if there was none.
    pub(super) fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.0.entry(key.into()).or_default()
    }
}
