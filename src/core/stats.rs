use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::core::types::EntityKind;

/// Shape of one field index, captured when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub kind: EntityKind,
    pub records: usize,
    pub fields: usize,
    /// Buckets across all fields, the sentinel bucket included.
    pub distinct_values: usize,
    /// Posting entries across all buckets.
    pub entries: usize,
    pub build_micros: u64,
}

/// Database statistics for the `stats` command
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStats {
    pub loaded_at: DateTime<Utc>,
    pub indexes: Vec<IndexStats>,
}

impl DatabaseStats {
    pub fn total_records(&self) -> usize {
        self.indexes.iter().map(|index| index.records).sum()
    }

    pub fn total_entries(&self) -> usize {
        self.indexes.iter().map(|index| index.entries).sum()
    }

    pub fn for_kind(&self, kind: EntityKind) -> Option<&IndexStats> {
        self.indexes.iter().find(|index| index.kind == kind)
    }
}
