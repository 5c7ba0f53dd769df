pub mod donation_repository;
pub mod user_repository;

pub use donation_repository::{DonationRepository, SqliteDonationRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
    #[error("Referenced referral code does not exist")]
    ReferralCodeUnknown,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Fold sqlx constraint-violation errors into the typed variants the
/// services branch on; everything else stays a database error.
pub(crate) fn map_constraint_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db) = e {
        match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation => return RepositoryError::AlreadyExists,
            sqlx::error::ErrorKind::ForeignKeyViolation => {
                return RepositoryError::ReferralCodeUnknown
            }
            _ => {}
        }
    }
    RepositoryError::Database(e)
}
