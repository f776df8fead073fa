use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use crate::core::error::Error;

/// Reserved index key for an absent, null or empty field value.
///
/// Searching for this literal is how a caller asks for "records where the
/// field is missing". It never collides with a real value because every
/// empty value is reduced to it before indexing.
pub const NULL_OR_EMPTY: &str = "NULL_OR_EMPTY";

/// Identity of a record within its collection.
///
/// Data files carry ids either as JSON strings (`"436bf9b0-..."`) or as
/// JSON numbers (`101`); both deserialize to their string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => RecordId(text),
            RawId::Signed(n) => RecordId(n.to_string()),
            RawId::Unsigned(n) => RecordId(n.to_string()),
            RawId::Float(n) => RecordId(n.to_string()),
        })
    }
}

/// Runtime value of one declared field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Boolean(bool),
    List(&'a [String]),
    Null,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(FieldValue::Null, FieldValue::Text)
    }

    pub fn id(value: &'a Option<RecordId>) -> Self {
        value.as_ref().map_or(FieldValue::Null, |id| FieldValue::Text(id.as_str()))
    }

    pub fn flag(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Boolean)
    }

    pub fn list(value: &'a Option<Vec<String>>) -> Self {
        value.as_deref().map_or(FieldValue::Null, FieldValue::List)
    }

    /// True when the value reduces to the sentinel and nothing else.
    pub fn is_empty(&self) -> bool {
        match *self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Boolean(_) => false,
            FieldValue::Null => true,
        }
    }

    /// Keys this value is filed under in a field index.
    ///
    /// A non-empty list yields one key per element, each element verbatim;
    /// absent, null and empty values (including an empty list) yield the
    /// sentinel.
    pub fn index_keys(&self) -> Vec<Cow<'a, str>> {
        match *self {
            FieldValue::List(items) if !items.is_empty() => {
                items.iter().map(|item| Cow::Borrowed(item.as_str())).collect()
            }
            FieldValue::List(_) | FieldValue::Null => vec![Cow::Borrowed(NULL_OR_EMPTY)],
            FieldValue::Text(text) => vec![canonical(text)],
            FieldValue::Boolean(flag) => vec![Cow::Owned(flag.to_string())],
        }
    }

    /// Human readable form, `-` for anything empty.
    pub fn display(&self) -> Cow<'a, str> {
        if self.is_empty() {
            return Cow::Borrowed("-");
        }
        match *self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Boolean(flag) => Cow::Owned(flag.to_string()),
            FieldValue::List(items) => Cow::Owned(items.join(", ")),
            FieldValue::Null => Cow::Borrowed("-"),
        }
    }
}

fn canonical(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        Cow::Borrowed(NULL_OR_EMPTY)
    } else {
        Cow::Borrowed(text)
    }
}

/// The three record types the engine knows how to index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Organization,
    User,
    Ticket,
}

impl EntityKind {
    /// Menu order used by the interactive prompt.
    pub const ALL: [EntityKind; 3] = [EntityKind::Organization, EntityKind::User, EntityKind::Ticket];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Organization => "Organization",
            EntityKind::User => "User",
            EntityKind::Ticket => "Ticket",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Organization => "Organizations",
            EntityKind::User => "Users",
            EntityKind::Ticket => "Tickets",
        }
    }

    /// 1-based menu selection.
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "organization" | "organizations" | "org" | "orgs" => Ok(EntityKind::Organization),
            "user" | "users" => Ok(EntityKind::User),
            "ticket" | "tickets" => Ok(EntityKind::Ticket),
            _ => Err(Error::UnknownRecordType(s.to_string())),
        }
    }
}
