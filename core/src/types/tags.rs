/// Capability that yields the searchable tags of an item.
///
/// Implemented once per item type and injected into the engines, so items
/// never need a common base type. Returning `None` is a contract violation
/// (an item with nothing to search must return `Some(vec![])`) and surfaces
/// as [`SearchError::InvalidInput`](crate::SearchError::InvalidInput).
pub trait TagExtractor<T: ?Sized>: Send + Sync {
    fn tags(&self, item: &T) -> Option<Vec<String>>;
}

impl<T, F> TagExtractor<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Option<Vec<String>> + Send + Sync,
{
    fn tags(&self, item: &T) -> Option<Vec<String>> {
        self(item)
    }
}

#[cfg(test)]
mod tests;
