use crate::core::error::Result;
use crate::index::field_index::FieldIndex;
use crate::model::Collection;
use crate::schema::schema::Record;
use crate::search::executor;

/// A collection paired with the index built from it.
///
/// The only way to obtain one is to hand over the collection, so the index
/// always describes exactly the records it sits next to.
#[derive(Debug, Clone)]
pub struct IndexedCollection<R> {
    records: Collection<R>,
    index: FieldIndex,
}

impl<R: Record> IndexedCollection<R> {
    pub fn new(records: Collection<R>) -> Self {
        let index = FieldIndex::build(&records);
        IndexedCollection { records, index }
    }

    pub fn records(&self) -> &Collection<R> {
        &self.records
    }

    pub fn index(&self) -> &FieldIndex {
        &self.index
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Exact-match search over this collection.
    pub fn find(&self, field: &str, value: &str) -> Result<Vec<&R>> {
        executor::search(field, value, &self.index, &self.records)
    }
}

impl<R: Record> From<Collection<R>> for IndexedCollection<R> {
    fn from(records: Collection<R>) -> Self {
        IndexedCollection::new(records)
    }
}
