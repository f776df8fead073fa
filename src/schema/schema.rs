use std::fmt;
use serde::Serialize;
use crate::core::error::{Error, Result};
use crate::core::types::{EntityKind, FieldValue, RecordId};
use crate::model::{organization, ticket, user};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Text,
    Boolean,
    List,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Boolean => "boolean",
            FieldType::List => "list",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable field of a record type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
}

impl FieldDefinition {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        FieldDefinition { name, label, field_type: FieldType::Text }
    }

    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        FieldDefinition { name, label, field_type: FieldType::Boolean }
    }

    pub const fn list(name: &'static str, label: &'static str) -> Self {
        FieldDefinition { name, label, field_type: FieldType::List }
    }
}

/// Static field list of one record type, in display order.
#[derive(Debug)]
pub struct RecordSchema {
    pub kind: EntityKind,
    pub fields: &'static [FieldDefinition],
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Fails with `UnknownField` when `name` is not declared.
    pub fn require(&self, name: &str) -> Result<&FieldDefinition> {
        self.field(name).ok_or_else(|| Error::UnknownField {
            kind: self.kind,
            field: name.to_string(),
        })
    }
}

/// A record type with a statically declared schema.
///
/// `field` is the accessor half of the schema: it must answer `Some` for
/// every name in `schema().fields` and `None` for anything else.
pub trait Record {
    const KIND: EntityKind;

    fn schema() -> &'static RecordSchema;

    fn id(&self) -> &RecordId;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

pub fn schema_for(kind: EntityKind) -> &'static RecordSchema {
    match kind {
        EntityKind::Organization => &organization::SCHEMA,
        EntityKind::User => &user::SCHEMA,
        EntityKind::Ticket => &ticket::SCHEMA,
    }
}

/// Resolve a schema from a record type name such as `"Organization"`.
pub fn lookup(record_type: &str) -> Result<&'static RecordSchema> {
    let kind: EntityKind = record_type.parse()?;
    Ok(schema_for(kind))
}
