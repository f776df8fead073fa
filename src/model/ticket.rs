use serde::{Deserialize, Serialize};
use crate::core::types::{EntityKind, FieldValue, RecordId};
use crate::schema::schema::{FieldDefinition, Record, RecordSchema};

pub static SCHEMA: RecordSchema = RecordSchema {
    kind: EntityKind::Ticket,
    fields: &[
        FieldDefinition::text("id", "ID"),
        FieldDefinition::text("subject", "Subject"),
        FieldDefinition::text("type", "Type"),
        FieldDefinition::text("url", "Url"),
        FieldDefinition::text("externalId", "External ID"),
        FieldDefinition::text("createdAt", "Created At"),
        FieldDefinition::text("priority", "Priority"),
        FieldDefinition::text("status", "Status"),
        FieldDefinition::text("description", "Description"),
        FieldDefinition::text("submitterId", "Submitter ID"),
        FieldDefinition::text("assigneeId", "Assignee ID"),
        FieldDefinition::text("requesterId", "Requester ID"),
        FieldDefinition::text("organizationId", "Organization"),
        FieldDefinition::list("tags", "Tags"),
        FieldDefinition::boolean("hasIncidents", "Has Incidents"),
        FieldDefinition::text("dueAt", "Due At"),
        FieldDefinition::text("via", "Via"),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub created_at: Option<String>,
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub submitter_id: Option<RecordId>,
    pub assignee_id: Option<RecordId>,
    pub requester_id: Option<RecordId>,
    pub organization_id: Option<RecordId>,
    pub tags: Option<Vec<String>>,
    pub has_incidents: Option<bool>,
    pub due_at: Option<String>,
    pub via: Option<String>,
}

impl Ticket {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Ticket {
            id: id.into(),
            url: None,
            external_id: None,
            created_at: None,
            ticket_type: None,
            subject: None,
            description: None,
            priority: None,
            status: None,
            submitter_id: None,
            assignee_id: None,
            requester_id: None,
            organization_id: None,
            tags: None,
            has_incidents: None,
            due_at: None,
            via: None,
        }
    }
}

impl Record for Ticket {
    const KIND: EntityKind = EntityKind::Ticket;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(self.id.as_str()),
            "subject" => FieldValue::text(&self.subject),
            "type" => FieldValue::text(&self.ticket_type),
            "url" => FieldValue::text(&self.url),
            "externalId" => FieldValue::text(&self.external_id),
            "createdAt" => FieldValue::text(&self.created_at),
            "priority" => FieldValue::text(&self.priority),
            "status" => FieldValue::text(&self.status),
            "description" => FieldValue::text(&self.description),
            "submitterId" => FieldValue::id(&self.submitter_id),
            "assigneeId" => FieldValue::id(&self.assignee_id),
            "requesterId" => FieldValue::id(&self.requester_id),
            "organizationId" => FieldValue::id(&self.organization_id),
            "tags" => FieldValue::list(&self.tags),
            "hasIncidents" => FieldValue::flag(self.has_incidents),
            "dueAt" => FieldValue::text(&self.due_at),
            "via" => FieldValue::text(&self.via),
            _ => return None,
        };
        Some(value)
    }
}
