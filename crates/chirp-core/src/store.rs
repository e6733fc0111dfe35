use anyhow::Result;

use chirp_types::models::{Account, Message};

// Narrow capability traits over the relational store. The services depend
// only on these, never on a concrete engine.

pub trait AccountStore: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<Account>>;

    /// Exact-match lookup; the store must not normalize case or whitespace.
    fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Insert a new account and return it with its store-assigned id.
    fn insert(&self, username: &str, password: &str) -> Result<Account>;
}

pub trait MessageStore: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<Message>>;

    /// Every stored message, in insertion order.
    fn find_all(&self) -> Result<Vec<Message>>;

    /// Every message with the given author, in insertion order.
    fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>>;

    /// Insert a new message and return it with its store-assigned id.
    fn insert(&self, text: &str, posted_by: i64, time_posted_epoch: i64) -> Result<Message>;

    /// Overwrite the text of an existing message. Returns rows changed.
    fn update_text(&self, id: i64, text: &str) -> Result<usize>;

    /// Returns rows removed (0 when the id is unknown).
    fn delete_by_id(&self, id: i64) -> Result<usize>;
}
