//! Classification of PostgreSQL errors.

/// SQLSTATE raised when a numeric value leaves its type's range.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

pub fn is_numeric_overflow(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE)
}
