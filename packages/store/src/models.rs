//! # CRM record types
//!
//! Defines the data structures exchanged with the backend REST service. These
//! types are `Serialize + Deserialize` and mirror the server's wire format
//! exactly; the server is the source of truth and the client never enforces
//! invariants beyond what it returns.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Account`] | A company or organization. |
//! | [`Contact`] | An individual person, optionally linked to an account. |
//! | [`Opportunity`] | A sales opportunity with a [`Stage`] and amount. |
//! | [`Note`] | Free-form content linked to zero or more records via [`RecordAssociation`]. |
//! | [`User`] | A signed-in user as returned by the login endpoint. |
//! | [`Page`] | The pagination envelope wrapping every list response. |
//!
//! The `*Create` / `*Update` structs are the request payloads for mutations
//! and carry the acting user's id (`created_by` / `updated_by`).
//!
//! The server serializes unset foreign keys as the nil UUID rather than
//! omitting them, so optional keys round-trip through the [`nil_uuid`]
//! serde helper which maps nil to `None` and back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pagination envelope returned by every list endpoint:
/// `{ "data": [...], "total": n, "limit": n, "offset": n }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// A company or organization in the CRM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub industry: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

/// Payload for `POST /accounts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCreate {
    pub name: String,
    pub industry: String,
    pub website: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub created_by: Uuid,
}

/// Payload for `PUT /accounts/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: String,
    pub industry: String,
    pub website: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub updated_by: Uuid,
}

/// An individual person in the CRM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, with = "nil_uuid")]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Contact {
    /// "First Last" for table rows and related panels.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for `POST /contacts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    #[serde(default, with = "nil_uuid")]
    pub account_id: Option<Uuid>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub created_by: Uuid,
}

/// Payload for `PUT /contacts/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    #[serde(default, with = "nil_uuid")]
    pub account_id: Option<Uuid>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub updated_by: Uuid,
}

/// Pipeline stage of an [`Opportunity`].
///
/// The server stores the stage as a plain string; unknown values are kept in
/// `Other` so a server-side addition does not fail list deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
    Other(String),
}

impl Stage {
    /// The stages offered by the opportunity form, in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Prospecting,
        Stage::Qualification,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Stage::Prospecting => "Prospecting",
            Stage::Qualification => "Qualification",
            Stage::Proposal => "Proposal",
            Stage::Negotiation => "Negotiation",
            Stage::ClosedWon => "Closed Won",
            Stage::ClosedLost => "Closed Lost",
            Stage::Other(s) => s,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Prospecting
    }
}

impl From<String> for Stage {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Prospecting" => Stage::Prospecting,
            "Qualification" => Stage::Qualification,
            "Proposal" => Stage::Proposal,
            "Negotiation" => Stage::Negotiation,
            "Closed Won" => Stage::ClosedWon,
            "Closed Lost" => Stage::ClosedLost,
            _ => Stage::Other(s),
        }
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.as_str().to_string()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sales opportunity in the CRM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    pub opportunity_name: String,
    #[serde(default, with = "nil_uuid")]
    pub account_id: Option<Uuid>,
    #[serde(default, with = "nil_uuid")]
    pub primary_contact_id: Option<Uuid>,
    pub stage: Stage,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub close_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub probability: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

/// Payload for `POST /opportunities`.
///
/// `close_date` travels as a string because the server binds it as one;
/// the form sends RFC 3339 or leaves it empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCreate {
    pub opportunity_name: String,
    pub account_id: Uuid,
    #[serde(default, with = "nil_uuid")]
    pub primary_contact_id: Option<Uuid>,
    pub stage: Stage,
    pub amount: f64,
    pub close_date: String,
    pub probability: f64,
    pub created_by: Uuid,
}

/// Payload for `PUT /opportunities/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunityUpdate {
    pub opportunity_name: String,
    pub account_id: Uuid,
    #[serde(default, with = "nil_uuid")]
    pub primary_contact_id: Option<Uuid>,
    pub stage: Stage,
    pub amount: f64,
    pub close_date: String,
    pub probability: f64,
    pub updated_by: Uuid,
}

/// The kind of record a note can be linked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Account,
    Contact,
    Opportunity,
}

impl RecordType {
    pub const ALL: [RecordType; 3] =
        [RecordType::Account, RecordType::Contact, RecordType::Opportunity];

    /// Wire value, also used as the `:type` path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Account => "account",
            RecordType::Contact => "contact",
            RecordType::Opportunity => "opportunity",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Account => "Account",
            RecordType::Contact => "Contact",
            RecordType::Opportunity => "Opportunity",
        }
    }

    pub fn parse(s: &str) -> Option<RecordType> {
        match s {
            "account" => Some(RecordType::Account),
            "contact" => Some(RecordType::Contact),
            "opportunity" => Some(RecordType::Opportunity),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link between a note and a CRM record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordAssociation {
    pub record_id: Uuid,
    pub record_type: RecordType,
}

/// A note entry, linked to zero or more records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub records: Vec<RecordAssociation>,
}

impl Note {
    /// First line of the content, truncated for table rows.
    pub fn summary(&self, max: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("");
        if first_line.chars().count() > max {
            let truncated: String = first_line.chars().take(max).collect();
            format!("{truncated}...")
        } else {
            first_line.to_string()
        }
    }
}

/// Payload for `POST /notes`. The server requires at least one association.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteCreate {
    pub content: String,
    pub created_by: Uuid,
    pub records: Vec<RecordAssociation>,
}

/// Payload for `PUT /notes/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub content: String,
    pub updated_by: Uuid,
}

/// Payload for `POST /notes/associations` and `DELETE /notes/associations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteAssociation {
    pub note_id: Uuid,
    pub record_id: Uuid,
    pub record_type: RecordType,
    pub created_by: Uuid,
}

/// A user as returned inside the login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`: an opaque bearer token plus the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Serde helper for UUID foreign keys the server never omits: the zero value
/// serializes as the nil UUID, so nil maps to `None` and back.
pub mod nil_uuid {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(value: &Option<Uuid>, ser: S) -> Result<S::Ok, S::Error> {
        value.unwrap_or(Uuid::nil()).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Uuid>, D::Error> {
        let raw = Option::<Uuid>::deserialize(de)?;
        Ok(raw.filter(|id| !id.is_nil()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_round_trip() {
        for stage in Stage::ALL {
            let s = String::from(stage.clone());
            assert_eq!(Stage::from(s), stage);
        }
    }

    #[test]
    fn test_stage_unknown_value_kept() {
        let stage = Stage::from("Discovery".to_string());
        assert_eq!(stage, Stage::Other("Discovery".to_string()));
        assert_eq!(stage.as_str(), "Discovery");
    }

    #[test]
    fn test_opportunity_unknown_stage_deserializes() {
        let json = serde_json::json!({
            "id": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b",
            "opportunity_name": "Renewal",
            "account_id": "00000000-0000-0000-0000-000000000000",
            "primary_contact_id": "00000000-0000-0000-0000-000000000000",
            "stage": "Discovery",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "created_by": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b"
        });
        let opp: Opportunity = serde_json::from_value(json).unwrap();
        assert_eq!(opp.stage, Stage::Other("Discovery".to_string()));
        assert_eq!(opp.account_id, None);
        assert_eq!(opp.close_date, None);
    }

    #[test]
    fn test_nil_uuid_maps_to_none() {
        let json = serde_json::json!({
            "id": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "account_id": "00000000-0000-0000-0000-000000000000",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "created_by": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b"
        });
        let contact: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(contact.account_id, None);
    }

    #[test]
    fn test_none_serializes_as_nil_uuid() {
        let payload = ContactCreate {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["account_id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_absent_foreign_key_defaults_to_none() {
        let json = serde_json::json!({
            "id": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "created_by": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b"
        });
        let contact: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(contact.account_id, None);
        assert_eq!(contact.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_empty_optional_strings_skipped_on_serialize() {
        let json = serde_json::json!({
            "id": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b",
            "name": "Acme",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "created_by": "f0a10b9e-7f24-4b15-9d6e-5f6f3f1f2a3b"
        });
        let account: Account = serde_json::from_value(json).unwrap();
        let out = serde_json::to_value(&account).unwrap();
        assert!(out.get("industry").is_none());
        assert!(out.get("website").is_none());
    }

    #[test]
    fn test_page_envelope_decodes() {
        let json = serde_json::json!({
            "data": [],
            "total": 0,
            "limit": 100,
            "offset": 0
        });
        let page: Page<Account> = serde_json::from_value(json).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_record_type_wire_values() {
        assert_eq!(
            serde_json::to_value(RecordType::Opportunity).unwrap(),
            "opportunity"
        );
        assert_eq!(RecordType::parse("contact"), Some(RecordType::Contact));
        assert_eq!(RecordType::parse("deal"), None);
    }

    #[test]
    fn test_note_summary_truncates() {
        let note = Note {
            id: Uuid::new_v4(),
            content: "A very long first line that should be cut\nsecond line".to_string(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            records: Vec::new(),
        };
        assert_eq!(note.summary(10), "A very lon...");
        assert_eq!(note.summary(100), "A very long first line that should be cut");
    }
}
