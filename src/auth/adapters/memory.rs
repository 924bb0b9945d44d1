use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::auth::domain::{AuthError, AuthResult, NewUserRecord, UserRecord};
use crate::auth::ports::UserStore;

/// In-memory user store keyed by email. Serves as the substitutable
/// fake for tests and as the reference for the store contract: ids are
/// assigned on insert and a taken email fails with `DuplicateEmail`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_one(&self, record: NewUserRecord) -> AuthResult<UserRecord> {
        let key = record.email.to_lowercase();
        let mut users = self.users.write();

        if users.contains_key(&key) {
            return Err(AuthError::DuplicateEmail);
        }

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            avatar: record.avatar,
        };

        users.insert(key, record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserRecord>> {
        Ok(self.users.read().get(&email.to_lowercase()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> NewUserRecord {
        NewUserRecord {
            name: "A".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() -> anyhow::Result<()> {
        let store = InMemoryUserStore::new();

        let first = store.insert_one(record("a@x.com")).await?;
        let second = store.insert_one(record("b@x.com")).await?;

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_email_hit_and_miss() -> anyhow::Result<()> {
        let store = InMemoryUserStore::new();
        let inserted = store.insert_one(record("a@x.com")).await?;

        let found = store.find_by_email("a@x.com").await?;
        assert_eq!(found, Some(inserted));

        let missing = store.find_by_email("nobody@x.com").await?;
        assert_eq!(missing, None);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> anyhow::Result<()> {
        let store = InMemoryUserStore::new();
        store.insert_one(record("a@x.com")).await?;

        let result = store.insert_one(record("A@X.com")).await;
        assert_eq!(result, Err(AuthError::DuplicateEmail));
        assert_eq!(store.len(), 1);

        Ok(())
    }
}
