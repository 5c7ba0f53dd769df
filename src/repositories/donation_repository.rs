use crate::models::donation::{Donation, LeaderboardEntry};
use crate::repositories::{map_constraint_error, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait DonationRepository: Send + Sync {
    async fn insert_donation(
        &self,
        name: &str,
        email: &str,
        amount: f64,
        referral_code: &str,
        date: &str,
    ) -> RepositoryResult<Donation>;

    /// Sum of all donations attributed to one referral code (0 when none).
    async fn total_for_referral_code(&self, referral_code: &str) -> RepositoryResult<f64>;

    /// Per-user donation totals, highest first. The outer join keeps users
    /// nobody has donated through yet, with a total of 0.
    async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>>;
}

pub struct SqliteDonationRepository {
    pool: SqlitePool,
}

impl SqliteDonationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationRepository for SqliteDonationRepository {
    async fn insert_donation(
        &self,
        name: &str,
        email: &str,
        amount: f64,
        referral_code: &str,
        date: &str,
    ) -> RepositoryResult<Donation> {
        let result = sqlx::query(
            "INSERT INTO donations (name, email, amount, referral_code, date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(amount)
        .bind(referral_code)
        .bind(date)
        .execute(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        let id = result.last_insert_rowid();
        let donation = sqlx::query_as::<_, Donation>(
            "SELECT id, name, email, amount, referral_code, date \
             FROM donations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(donation)
    }

    async fn total_for_referral_code(&self, referral_code: &str) -> RepositoryResult<f64> {
        let total: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(amount) FROM donations WHERE referral_code = ?",
        )
        .bind(referral_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(total.unwrap_or(0.0))
    }

    async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT u.name, u.referral_code, COALESCE(SUM(d.amount), 0.0) AS total_raised \
             FROM users u \
             LEFT JOIN donations d ON u.referral_code = d.referral_code \
             GROUP BY u.name, u.referral_code \
             ORDER BY total_raised DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
