mod password_rule;
mod user;

pub use password_rule::*;
pub use user::*;
