//! Business record types held by the data store.
//!
//! Serialisation contract: camelCase JSON, matching both the wire format and
//! the persisted collection blobs. Financial amounts are always stored in
//! the base currency; display conversion happens in [`crate::domain::finance`]
//! and never writes back.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of a client relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// Currently engaged.
    Active,
    /// Dormant or churned.
    Inactive,
}

/// A client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Stable identifier.
    pub id: String,
    /// Contact name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Company the client represents.
    pub company: String,
    /// Whether the relationship is active.
    pub status: ClientStatus,
    /// Date of the most recent contact.
    pub last_contact: NaiveDate,
}

/// Direction of a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money in.
    Revenue,
    /// Money out.
    Expense,
}

/// A single ledger entry. `amount` is always in the base currency (USD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Stable identifier.
    pub id: String,
    /// Date the transaction occurred.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Amount in the base currency.
    pub amount: f64,
    /// Revenue or expense.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Reporting category, e.g. "Consulting".
    pub category: String,
}

/// A calendar appointment.
///
/// `client_id` is a weak reference: deleting the client leaves the
/// appointment in place with a dangling id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Stable identifier.
    pub id: String,
    /// Display time, e.g. "10:00 AM".
    pub time: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Optional reference to a client by id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Client name captured at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

/// An entry in the notification feed. The store keeps only the ten newest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Stable identifier.
    pub id: Uuid,
    /// Short headline.
    pub title: String,
    /// Supporting detail.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Per-role display overrides persisted alongside the collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name override, if the user set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Avatar image URL override, if the user set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn financial_record_uses_wire_field_names() {
        let record = FinancialRecord {
            id: "txn1".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date"),
            description: "Website Redesign Project".into(),
            amount: 7500.0,
            kind: RecordKind::Revenue,
            category: "Web Development".into(),
        };
        let value = serde_json::to_value(&record).expect("serialise");
        assert_eq!(value["type"], "revenue");
        assert_eq!(value["date"], "2024-06-15");
    }

    #[test]
    fn appointment_round_trips_without_client_reference() {
        let raw = r#"{"id":"1","time":"10:00 AM","title":"Kickoff","description":"x"}"#;
        let appointment: Appointment = serde_json::from_str(raw).expect("deserialise");
        assert!(appointment.client_id.is_none());
        let value = serde_json::to_value(&appointment).expect("serialise");
        assert!(value.get("clientId").is_none());
    }
}
