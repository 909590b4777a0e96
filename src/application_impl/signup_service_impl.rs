use crate::application_impl::validate_password;
use crate::application_port::{SignupError, SignupInput, SignupOutcome, SignupService};
use crate::domain_port::{NewUser, UserRepo};
use crate::logger::*;
use std::sync::Arc;

pub struct RealSignupService {
    user_repo: Arc<dyn UserRepo>,
}

impl RealSignupService {
    pub fn new(user_repo: Arc<dyn UserRepo>) -> RealSignupService {
        RealSignupService { user_repo }
    }
}

#[async_trait::async_trait]
impl SignupService for RealSignupService {
    async fn register(&self, request: SignupInput) -> Result<SignupOutcome, SignupError> {
        if self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            debug!(username = %request.username, "signup rejected: name taken");
            return Ok(SignupOutcome::AlreadyRegistered);
        }

        // The record is written before the password is checked, so rejected
        // passwords are stored too.
        let new_user = NewUser {
            username: request.username,
            password: request.password,
        };
        let record = match self.user_repo.insert(new_user).await {
            Ok(record) => record,
            Err(SignupError::UsernameTaken) => {
                debug!("signup lost insert race, name taken");
                return Ok(SignupOutcome::AlreadyRegistered);
            }
            Err(e) => return Err(e),
        };

        let broken = validate_password(&record.password);
        if broken.is_empty() {
            info!(user_id = %record.user_id, username = %record.username, "signup succeeded");
            Ok(SignupOutcome::Success)
        } else {
            info!(
                user_id = %record.user_id,
                username = %record.username,
                broken_rules = broken.len(),
                "signup stored with password policy violations"
            );
            Ok(SignupOutcome::ValidationFailed(broken))
        }
    }
}
