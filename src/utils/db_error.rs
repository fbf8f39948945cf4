//! Classification of database errors raised by sqlx.

/// Name of the unique constraint on `url.alias`.
pub const ALIAS_CONSTRAINT: &str = "url_alias_key";

/// Returns true if the error is a unique violation on the alias column.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_violation() {
        assert!(!is_unique_violation_on_alias(&sqlx::Error::PoolTimedOut));
        assert!(!is_unique_violation_on_alias(&sqlx::Error::RowNotFound));
    }
}
