pub mod donation;
pub mod user;

pub use donation::{Donation, LeaderboardEntry};
pub use user::User;
