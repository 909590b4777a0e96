mod schema;
mod user_repo_sqlite;

pub use schema::*;
pub use user_repo_sqlite::*;

mod util;
