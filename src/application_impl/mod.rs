mod password_rules;
mod signup_service_impl;

pub use password_rules::*;
pub use signup_service_impl::*;
