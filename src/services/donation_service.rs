use crate::models::donation::{Donation, LeaderboardEntry};
use crate::repositories::donation_repository::DonationRepository;
use crate::repositories::RepositoryError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DonationServiceError {
    #[error("Referral code does not exist.")]
    ReferralCodeUnknown,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct DonateRequest {
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub referral_code: String,
}

pub struct DonationService {
    repository: Arc<dyn DonationRepository>,
}

impl DonationService {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    pub async fn record_donation(
        &self,
        request: DonateRequest,
    ) -> Result<Donation, DonationServiceError> {
        let date = Self::current_timestamp();

        match self
            .repository
            .insert_donation(
                &request.name,
                &request.email,
                request.amount,
                &request.referral_code,
                &date,
            )
            .await
        {
            Ok(donation) => Ok(donation),
            Err(RepositoryError::ReferralCodeUnknown) => {
                Err(DonationServiceError::ReferralCodeUnknown)
            }
            Err(e) => Err(DonationServiceError::RepositoryError(e)),
        }
    }

    pub async fn total_raised_by(&self, referral_code: &str) -> Result<f64, DonationServiceError> {
        Ok(self.repository.total_for_referral_code(referral_code).await?)
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DonationServiceError> {
        Ok(self.repository.leaderboard().await?)
    }

    fn current_timestamp() -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
