use tracing::{debug, trace};
use crate::core::error::{Error, Result};
use crate::index::field_index::FieldIndex;
use crate::model::Collection;
use crate::schema::schema::Record;

/// Exact-match search: records whose `field` reduces to exactly `value`.
///
/// Results follow bucket order. Ids with no backing record are skipped.
/// An empty result is `Ok(vec![])`; an undeclared field is `UnknownField`.
pub fn search<'a, R: Record>(
    field: &str,
    value: &str,
    index: &FieldIndex,
    records: &'a Collection<R>,
) -> Result<Vec<&'a R>> {
    if index.kind() != R::KIND {
        return Err(Error::RecordTypeMismatch {
            expected: index.kind(),
            found: R::KIND,
        });
    }

    let ids = index.lookup(field, value)?;
    let mut matches = Vec::with_capacity(ids.len());
    for id in ids {
        match records.get(id.as_str()) {
            Some(record) => matches.push(record),
            None => trace!(kind = %R::KIND, %id, "skipping id with no backing record"),
        }
    }

    debug!(kind = %R::KIND, field, value, hits = matches.len(), "search");
    Ok(matches)
}
