pub fn is_dup_key(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db) = err {
        return db.is_unique_violation();
    }

    false
}
