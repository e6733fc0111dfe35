use serde::{Deserialize, Serialize};

/// A registered user identity. Serialized verbatim, password included,
/// to keep the wire contract of the original service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A short text post authored by an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub message_text: String,
    pub posted_by: i64,
    pub time_posted_epoch: i64,
}
