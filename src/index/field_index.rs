use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;
use crate::core::error::{Error, Result};
use crate::core::stats::IndexStats;
use crate::core::types::{EntityKind, FieldValue, RecordId};
use crate::index::posting::PostingList;
use crate::model::Collection;
use crate::schema::schema::{self, Record};

/// Per-field reverse index: field name → (value → ordered record ids).
///
/// Every field declared by the record schema is present as a key, even
/// when no record populates it.
#[derive(Debug, Clone)]
pub struct FieldIndex {
    kind: EntityKind,
    fields: HashMap<&'static str, HashMap<String, PostingList>>,
    stats: IndexStats,
}

impl FieldIndex {
    /// Index every declared field of every record in `records`.
    pub fn build<R: Record>(records: &Collection<R>) -> Self {
        let start = Instant::now();
        let schema = R::schema();

        let mut fields: HashMap<&'static str, HashMap<String, PostingList>> = schema
            .fields
            .iter()
            .map(|definition| (definition.name, HashMap::new()))
            .collect();

        let mut entries = 0;
        for record in records {
            let id = record.id();
            for definition in schema.fields {
                let value = record.field(definition.name).unwrap_or(FieldValue::Null);
                let buckets = fields.entry(definition.name).or_default();
                for key in value.index_keys() {
                    if buckets.entry(key.into_owned()).or_default().add(id) {
                        entries += 1;
                    }
                }
            }
        }

        let stats = IndexStats {
            kind: R::KIND,
            records: records.len(),
            fields: fields.len(),
            distinct_values: fields.values().map(HashMap::len).sum(),
            entries,
            build_micros: start.elapsed().as_micros() as u64,
        };
        debug!(
            kind = %R::KIND,
            records = stats.records,
            distinct_values = stats.distinct_values,
            entries = stats.entries,
            "built field index"
        );

        FieldIndex { kind: R::KIND, fields, stats }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Buckets of one field, `None` when the field is not declared.
    pub fn field(&self, field: &str) -> Option<&HashMap<String, PostingList>> {
        self.fields.get(field)
    }

    pub fn bucket(&self, field: &str, value: &str) -> Option<&PostingList> {
        self.fields.get(field).and_then(|buckets| buckets.get(value))
    }

    /// Ids filed under `value` for `field`.
    ///
    /// A value nobody holds is an empty slice; a field the schema does not
    /// declare is `UnknownField`.
    pub fn lookup(&self, field: &str, value: &str) -> Result<&[RecordId]> {
        let buckets = self.fields.get(field).ok_or_else(|| Error::UnknownField {
            kind: self.kind,
            field: field.to_string(),
        })?;
        Ok(buckets.get(value).map_or(&[][..], PostingList::ids))
    }
}

/// Build the index for a collection named by record type.
///
/// Fails with `UnknownRecordType` when no schema is declared under
/// `record_type`, and with `RecordTypeMismatch` when the collection holds a
/// different record type than the one named.
pub fn build_index<R: Record>(record_type: &str, records: &Collection<R>) -> Result<FieldIndex> {
    let schema = schema::lookup(record_type)?;
    if schema.kind != R::KIND {
        return Err(Error::RecordTypeMismatch {
            expected: schema.kind,
            found: R::KIND,
        });
    }
    Ok(FieldIndex::build(records))
}
