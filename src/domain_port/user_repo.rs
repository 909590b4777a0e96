use crate::application_port::*;
use crate::domain_model::*;

/// A stored account. The password is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    /// Exact, case-sensitive lookup.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, SignupError>;

    /// Insert a row. Fails with `SignupError::UsernameTaken` when the store
    /// already holds the username.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, SignupError>;
}
