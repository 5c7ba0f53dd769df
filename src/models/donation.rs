use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub referral_code: String,
    pub date: String,
}

/// One leaderboard row: a user and the sum of donations attributed to their
/// referral code (0 when nobody has donated through them yet).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub referral_code: String,
    pub total_raised: f64,
}
