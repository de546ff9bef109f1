use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project as persisted in the store.
///
/// `id` is assigned by the store on creation and `owner_id` is set from the
/// authenticated caller; neither is ever writable through the API. Serialized
/// with camelCase keys to match the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub is_initiated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub stacks: String,
    pub field_of_study: String,
    pub looking_for: String,
    pub idea: String,
    pub created_at: DateTime<Utc>,
}

/// The writable field set of a new project.
///
/// Deserialization silently drops any keys outside this set, so extra fields
/// in a request body are never persisted. Run the payload through
/// [`crate::validation::validate_new_project`] first; deserialization alone
/// does not enforce the link/isInitiated rule or the lookingFor enum.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectData {
    pub name: String,
    pub is_initiated: bool,
    #[serde(default)]
    pub link: Option<String>,
    pub stacks: String,
    pub field_of_study: String,
    pub looking_for: String,
    pub idea: String,
}
