use anyhow::Result;
use rusqlite::{OptionalExtension, Row, params};

use chirp_core::store::{AccountStore, MessageStore};
use chirp_types::models::{Account, Message};

use crate::Database;

impl AccountStore for Database {
    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM account WHERE id = ?1",
                    [id],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM account WHERE username = ?1",
                    [username],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn insert(&self, username: &str, password: &str) -> Result<Account> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                params![username, password],
            )?;
            Ok(Account {
                id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }
}

impl MessageStore for Database {
    fn find_by_id(&self, id: i64) -> Result<Option<Message>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, message_text, posted_by, time_posted_epoch
                     FROM message WHERE id = ?1",
                    [id],
                    message_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn find_all(&self) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, message_text, posted_by, time_posted_epoch
                 FROM message ORDER BY id",
            )?;
            let rows = stmt
                .query_map([], message_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, message_text, posted_by, time_posted_epoch
                 FROM message WHERE posted_by = ?1 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([account_id], message_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    fn insert(&self, text: &str, posted_by: i64, time_posted_epoch: i64) -> Result<Message> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO message (message_text, posted_by, time_posted_epoch)
                 VALUES (?1, ?2, ?3)",
                params![text, posted_by, time_posted_epoch],
            )?;
            Ok(Message {
                id: conn.last_insert_rowid(),
                message_text: text.to_string(),
                posted_by,
                time_posted_epoch,
            })
        })
    }

    fn update_text(&self, id: i64, text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE message SET message_text = ?1 WHERE id = ?2",
                params![text, id],
            )?;
            Ok(changed)
        })
    }

    fn delete_by_id(&self, id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM message WHERE id = ?1", [id])?;
            Ok(changed)
        })
    }
}

fn account_from_row(row: &Row) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row) -> rusqlite::Result<Message> {
    Ok(Message {
        id: row.get(0)?,
        message_text: row.get(1)?,
        posted_by: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use chirp_core::store::{AccountStore, MessageStore};

    use crate::Database;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn account_ids_start_at_one() {
        let db = db();
        let alice = AccountStore::insert(&db, "alice", "pass1234").unwrap();
        let bob = AccountStore::insert(&db, "bob", "pass1234").unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[test]
    fn username_is_unique_at_store_level() {
        let db = db();
        AccountStore::insert(&db, "alice", "pass1234").unwrap();
        assert!(AccountStore::insert(&db, "alice", "other123").is_err());
    }

    #[test]
    fn find_account_by_username_is_exact_match() {
        let db = db();
        AccountStore::insert(&db, "alice", "pass1234").unwrap();

        let found = db.find_by_username("alice").unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert_eq!(found.password, "pass1234");
        assert!(db.find_by_username("Alice").unwrap().is_none());
    }

    #[test]
    fn message_round_trip() {
        let db = db();
        let alice = AccountStore::insert(&db, "alice", "pass1234").unwrap();

        let created = MessageStore::insert(&db, "hello", alice.id, 1000).unwrap();
        assert_eq!(created.id, 1);

        let fetched = MessageStore::find_by_id(&db, created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn update_and_delete_report_rows_changed() {
        let db = db();
        let alice = AccountStore::insert(&db, "alice", "pass1234").unwrap();
        let msg = MessageStore::insert(&db, "hello", alice.id, 1000).unwrap();

        assert_eq!(db.update_text(msg.id, "updated").unwrap(), 1);
        assert_eq!(db.update_text(99, "updated").unwrap(), 0);

        assert_eq!(db.delete_by_id(msg.id).unwrap(), 1);
        assert_eq!(db.delete_by_id(msg.id).unwrap(), 0);
        assert!(MessageStore::find_by_id(&db, msg.id).unwrap().is_none());
    }

    #[test]
    fn find_all_lists_in_insertion_order() {
        let db = db();
        let alice = AccountStore::insert(&db, "alice", "pass1234").unwrap();
        MessageStore::insert(&db, "first", alice.id, 1).unwrap();
        MessageStore::insert(&db, "second", alice.id, 2).unwrap();

        let all = db.find_all().unwrap();
        let texts: Vec<&str> = all.iter().map(|m| m.message_text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn find_by_posted_by_filters_author() {
        let db = db();
        let alice = AccountStore::insert(&db, "alice", "pass1234").unwrap();
        let bob = AccountStore::insert(&db, "bob", "pass1234").unwrap();
        MessageStore::insert(&db, "from alice", alice.id, 1).unwrap();
        MessageStore::insert(&db, "from bob", bob.id, 2).unwrap();

        let bobs = db.find_by_posted_by(bob.id).unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].message_text, "from bob");
        assert!(db.find_by_posted_by(99).unwrap().is_empty());
    }
}
