use std::fmt;
use serde::Serialize;
use crate::core::error::Result;
use crate::core::types::{EntityKind, NULL_OR_EMPTY};
use crate::schema::schema::schema_for;

/// One exact-match lookup: `kind.field == value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub kind: EntityKind,
    pub field: String,
    pub value: String,
}

impl SearchQuery {
    pub fn new(kind: EntityKind, field: impl Into<String>, value: impl Into<String>) -> Self {
        SearchQuery {
            kind,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Query for records whose `field` is absent or empty.
    pub fn empty_field(kind: EntityKind, field: impl Into<String>) -> Self {
        Self::new(kind, field, NULL_OR_EMPTY)
    }

    pub fn is_empty_field_search(&self) -> bool {
        self.value == NULL_OR_EMPTY
    }

    /// Check the field against the record schema without touching an index.
    pub fn validate(&self) -> Result<()> {
        schema_for(self.kind).require(&self.field).map(|_| ())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty_field_search() {
            write!(f, "{} with an empty {} field", self.kind.plural(), self.field)
        } else {
            write!(f, "{} by {} {}", self.kind.plural(), self.field, self.value)
        }
    }
}
