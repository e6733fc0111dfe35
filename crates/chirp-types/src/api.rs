use serde::Deserialize;

// Request payloads. Fields default to None so an absent field reaches the
// service layer as invalid input instead of a deserialization reject.

/// Shared payload for `/register` and `/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    #[serde(default)]
    pub message_text: Option<String>,
    #[serde(default)]
    pub posted_by: Option<i64>,
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessage {
    #[serde(default)]
    pub message_text: Option<String>,
}
