use serde::{Deserialize, Serialize};
use crate::core::types::{EntityKind, FieldValue, RecordId};
use crate::schema::schema::{FieldDefinition, Record, RecordSchema};

pub static SCHEMA: RecordSchema = RecordSchema {
    kind: EntityKind::Organization,
    fields: &[
        FieldDefinition::text("id", "ID"),
        FieldDefinition::text("name", "Name"),
        FieldDefinition::text("url", "Url"),
        FieldDefinition::list("domainNames", "Domain Names"),
        FieldDefinition::text("externalId", "External ID"),
        FieldDefinition::text("createdAt", "Created At"),
        FieldDefinition::text("details", "Details"),
        FieldDefinition::boolean("sharedTickets", "Shared Tickets"),
        FieldDefinition::list("tags", "Tags"),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub domain_names: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub details: Option<String>,
    pub shared_tickets: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl Organization {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Organization {
            id: id.into(),
            url: None,
            external_id: None,
            name: None,
            domain_names: None,
            created_at: None,
            details: None,
            shared_tickets: None,
            tags: None,
        }
    }
}

impl Record for Organization {
    const KIND: EntityKind = EntityKind::Organization;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(self.id.as_str()),
            "name" => FieldValue::text(&self.name),
            "url" => FieldValue::text(&self.url),
            "domainNames" => FieldValue::list(&self.domain_names),
            "externalId" => FieldValue::text(&self.external_id),
            "createdAt" => FieldValue::text(&self.created_at),
            "details" => FieldValue::text(&self.details),
            "sharedTickets" => FieldValue::flag(self.shared_tickets),
            "tags" => FieldValue::list(&self.tags),
            _ => return None,
        };
        Some(value)
    }
}
