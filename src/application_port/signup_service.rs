use crate::domain_model::PasswordRule;

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("username already taken")]
    UsernameTaken,
    #[error("store error: {0}")]
    Store(String),
}

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The username was already stored. Nothing was written.
    AlreadyRegistered,
    /// The record was written, but the password broke these rules.
    ValidationFailed(Vec<PasswordRule>),
    Success,
}

#[async_trait::async_trait]
pub trait SignupService: Send + Sync {
    async fn register(&self, request: SignupInput) -> Result<SignupOutcome, SignupError>;
}
