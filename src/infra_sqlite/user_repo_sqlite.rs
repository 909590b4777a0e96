use super::util::is_dup_key;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteUserRepo { pool }
    }

    fn row_to_record(row: SqliteRow) -> Result<UserRecord, SignupError> {
        let user_id: i64 = row
            .try_get("id")
            .map_err(|e| SignupError::Store(e.to_string()))?;
        let username: String = row
            .try_get("username")
            .map_err(|e| SignupError::Store(e.to_string()))?;
        let password: String = row
            .try_get("password")
            .map_err(|e| SignupError::Store(e.to_string()))?;

        Ok(UserRecord {
            user_id: UserId(user_id),
            username,
            password,
        })
    }
}

#[async_trait::async_trait]
impl UserRepo for SqliteUserRepo {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, SignupError> {
        let row_opt: Option<SqliteRow> = sqlx::query(
            r#"
SELECT id, username, password
FROM user
WHERE username = ?
LIMIT 1
"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SignupError::Store(format!("query user: {e}")))?;

        row_opt.map(Self::row_to_record).transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, SignupError> {
        let result = sqlx::query(
            r#"
INSERT INTO user (username, password)
VALUES (?, ?)
"#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_dup_key(&e) {
                SignupError::UsernameTaken
            } else {
                SignupError::Store(format!("insert user: {e}"))
            }
        })?;

        Ok(UserRecord {
            user_id: UserId(result.last_insert_rowid()),
            username: user.username,
            password: user.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra_sqlite::open_pool;

    async fn repo() -> SqliteUserRepo {
        let pool = open_pool("sqlite::memory:", 1).await.unwrap();
        SqliteUserRepo::new(pool)
    }

    fn new_user(username: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let repo = repo().await;

        let inserted = repo.insert(new_user("alice", "pw")).await.unwrap();
        let found = repo.find_by_username("alice").await.unwrap();

        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn ids_are_generated_in_order() {
        let repo = repo().await;

        let a = repo.insert(new_user("a", "1")).await.unwrap();
        let b = repo.insert(new_user("b", "2")).await.unwrap();

        assert!(b.user_id > a.user_id);
    }

    #[tokio::test]
    async fn missing_name_is_none() {
        let repo = repo().await;
        repo.insert(new_user("alice", "pw")).await.unwrap();

        assert_eq!(repo.find_by_username("ALICE").await.unwrap(), None);
        assert_eq!(repo.find_by_username("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_insert_hits_unique_constraint() {
        let repo = repo().await;
        repo.insert(new_user("alice", "pw")).await.unwrap();

        let err = repo.insert(new_user("alice", "other")).await.unwrap_err();

        assert!(matches!(err, SignupError::UsernameTaken));
    }

    #[tokio::test]
    async fn password_is_stored_verbatim() {
        let repo = repo().await;
        repo.insert(new_user("zoe", "  QQ→α😀 ")).await.unwrap();

        let found = repo.find_by_username("zoe").await.unwrap().unwrap();

        assert_eq!(found.password, "  QQ→α😀 ");
    }
}
