use crate::domain::errors::DomainError;

pub(super) const CNT_POST_SLUG: &str = "posts_slug_key";
pub(super) const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
pub(super) const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG | CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_POST_CATEGORY => DomainError::NotFound("category not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// True when `err` was raised by the named constraint.
pub(super) fn violates(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.constraint() == Some(constraint))
}
