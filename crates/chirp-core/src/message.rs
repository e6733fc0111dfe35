use std::sync::Arc;

use chirp_types::models::Message;

use crate::error::ServiceError;
use crate::store::{AccountStore, MessageStore};

const MAX_TEXT_LEN: usize = 255;

/// Message CRUD rules over a [`MessageStore`], with author existence checked
/// against an [`AccountStore`].
pub struct MessageService {
    accounts: Arc<dyn AccountStore>,
    messages: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(accounts: Arc<dyn AccountStore>, messages: Arc<dyn MessageStore>) -> Self {
        Self { accounts, messages }
    }

    /// Persist a new message. Text length must be in [1, 255] and the author
    /// must be an existing account at creation time.
    pub fn create(
        &self,
        text: &str,
        posted_by: Option<i64>,
        time_posted_epoch: i64,
    ) -> Result<Message, ServiceError> {
        validate_text(text)?;

        let author = posted_by.ok_or(ServiceError::InvalidMessage(
            "postedBy does not match an existing account",
        ))?;
        if self.accounts.find_by_id(author)?.is_none() {
            return Err(ServiceError::InvalidMessage(
                "postedBy does not match an existing account",
            ));
        }

        Ok(self.messages.insert(text, author, time_posted_epoch)?)
    }

    pub fn get_all(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.messages.find_all()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Message, ServiceError> {
        self.messages.find_by_id(id)?.ok_or(ServiceError::NotFound)
    }

    /// Returns rows removed: 1, or 0 when the id is unknown. Absence is a
    /// normal outcome here, not an error.
    pub fn delete_by_id(&self, id: i64) -> Result<u64, ServiceError> {
        Ok(self.messages.delete_by_id(id)? as u64)
    }

    /// Overwrite the text of an existing message. Text validation runs
    /// before the existence check; a bad text masks an unknown id and
    /// callers rely on that ordering.
    pub fn update_text(&self, id: i64, text: &str) -> Result<u64, ServiceError> {
        validate_text(text)?;

        match self.messages.update_text(id, text)? {
            0 => Err(ServiceError::NotFound),
            n => Ok(n as u64),
        }
    }

    /// No account-existence check: an unknown id yields an empty list.
    pub fn get_all_by_account_id(&self, account_id: i64) -> Result<Vec<Message>, ServiceError> {
        Ok(self.messages.find_by_posted_by(account_id)?)
    }
}

fn validate_text(text: &str) -> Result<(), ServiceError> {
    let len = text.chars().count();
    if len < 1 || len > MAX_TEXT_LEN {
        return Err(ServiceError::InvalidMessage(
            "message text must be between 1 and 255 characters",
        ));
    }
    Ok(())
}
