use serde::{Deserialize, Serialize};
use crate::core::types::{EntityKind, FieldValue, RecordId};
use crate::schema::schema::{FieldDefinition, Record, RecordSchema};

pub static SCHEMA: RecordSchema = RecordSchema {
    kind: EntityKind::User,
    fields: &[
        FieldDefinition::text("id", "ID"),
        FieldDefinition::text("name", "Name"),
        FieldDefinition::text("alias", "Alias"),
        FieldDefinition::text("url", "Url"),
        FieldDefinition::text("externalId", "External ID"),
        FieldDefinition::text("createdAt", "Created At"),
        FieldDefinition::boolean("active", "Active"),
        FieldDefinition::boolean("verified", "Verified"),
        FieldDefinition::boolean("shared", "Shared"),
        FieldDefinition::text("locale", "Locale"),
        FieldDefinition::text("timezone", "Timezone"),
        FieldDefinition::text("lastLoginAt", "Last Logged In At"),
        FieldDefinition::text("email", "Email"),
        FieldDefinition::text("phone", "Phone"),
        FieldDefinition::text("signature", "Signature"),
        FieldDefinition::text("organizationId", "Organization"),
        FieldDefinition::list("tags", "Tags"),
        FieldDefinition::boolean("suspended", "Suspended"),
        FieldDefinition::text("role", "Role"),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub created_at: Option<String>,
    pub active: Option<bool>,
    pub verified: Option<bool>,
    pub shared: Option<bool>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub last_login_at: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub signature: Option<String>,
    pub organization_id: Option<RecordId>,
    pub tags: Option<Vec<String>>,
    pub suspended: Option<bool>,
    pub role: Option<String>,
}

impl User {
    pub fn new(id: impl Into<RecordId>) -> Self {
        User {
            id: id.into(),
            url: None,
            external_id: None,
            name: None,
            alias: None,
            created_at: None,
            active: None,
            verified: None,
            shared: None,
            locale: None,
            timezone: None,
            last_login_at: None,
            email: None,
            phone: None,
            signature: None,
            organization_id: None,
            tags: None,
            suspended: None,
            role: None,
        }
    }
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;

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
            "alias" => FieldValue::text(&self.alias),
            "url" => FieldValue::text(&self.url),
            "externalId" => FieldValue::text(&self.external_id),
            "createdAt" => FieldValue::text(&self.created_at),
            "active" => FieldValue::flag(self.active),
            "verified" => FieldValue::flag(self.verified),
            "shared" => FieldValue::flag(self.shared),
            "locale" => FieldValue::text(&self.locale),
            "timezone" => FieldValue::text(&self.timezone),
            "lastLoginAt" => FieldValue::text(&self.last_login_at),
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "signature" => FieldValue::text(&self.signature),
            "organizationId" => FieldValue::id(&self.organization_id),
            "tags" => FieldValue::list(&self.tags),
            "suspended" => FieldValue::flag(self.suspended),
            "role" => FieldValue::text(&self.role),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_foreign_key_becomes_string() {
        let json = r#"{
            "_id": 1,
            "name": "Francisca Rasmussen",
            "alias": "Miss Coffey",
            "active": true,
            "organization_id": 119,
            "tags": ["Springville", "Sutton"],
            "role": "admin"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.organization_id, Some(RecordId::from("119")));
        assert_eq!(user.field("organizationId"), Some(FieldValue::Text("119")));
        assert_eq!(user.field("active"), Some(FieldValue::Boolean(true)));
        assert_eq!(user.field("signature"), Some(FieldValue::Null));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"_id": 1, "active": "yes"}"#).is_err());
    }
}
