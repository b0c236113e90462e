//! Search results types.

/// Materialized result of a blocking search.
///
/// Borrows the searched slice and keeps the matched positions in input
/// order. Use `iter()` to walk matched items without cloning.
#[derive(Debug)]
pub struct SearchResults<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) indices: Vec<usize>,
}

impl<'a, T> SearchResults<'a, T> {
    pub(crate) fn all(items: &'a [T]) -> Self {
        Self {
            items,
            indices: (0..items.len()).collect(),
        }
    }

    pub(crate) fn none(items: &'a [T]) -> Self {
        Self {
            items,
            indices: Vec::new(),
        }
    }

    /// Iterates over matched items in input order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        let items = self.items;
        self.indices.iter().map(move |&i| &items[i])
    }

    /// Positions of the matched items within the searched slice, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'r, 'a, T> IntoIterator for &'r SearchResults<'a, T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'r>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
