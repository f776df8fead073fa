use std::collections::HashMap;
use crate::core::types::{EntityKind, RecordId};
use crate::schema::schema::Record;

/// Records of one type keyed by identity, iterated in load order.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
    positions: HashMap<RecordId, usize>,
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Collection {
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        R::KIND
    }

    /// Insert a record, replacing any record with the same id in place.
    /// Returns the replaced record.
    pub fn insert(&mut self, record: R) -> Option<R> {
        match self.positions.get(record.id()) {
            Some(&pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.positions.insert(record.id().clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}

impl<'a, R: Record> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
