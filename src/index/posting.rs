use crate::core::types::RecordId;

/// Ordered, duplicate-free list of record ids filed under one value.
///
/// Note: ids are kept in insertion order. The builder visits one record at a
/// time, so a repeated (value, id) emission is always adjacent to the
/// previous one and checking the tail is enough to de-duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    ids: Vec<RecordId>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList { ids: Vec::new() }
    }

    /// Append `id` unless it is already the last entry. Returns whether it
    /// was added.
    pub fn add(&mut self, id: &RecordId) -> bool {
        if self.ids.last() == Some(id) {
            return false;
        }
        self.ids.push(id.clone());
        true
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|candidate| candidate.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut list = PostingList::new();
        list.add(&RecordId::from("b"));
        list.add(&RecordId::from("a"));
        list.add(&RecordId::from("c"));
        let ids: Vec<_> = list.ids().iter().map(RecordId::as_str).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_add_skips_repeated_emission() {
        let mut list = PostingList::new();
        assert!(list.add(&RecordId::from("1")));
        assert!(!list.add(&RecordId::from("1")));
        assert!(list.add(&RecordId::from("2")));
        assert_eq!(list.len(), 2);
        assert!(list.contains("1"));
        assert!(!list.contains("3"));
    }
}
