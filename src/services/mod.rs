pub mod auth_service;
pub mod donation_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use donation_service::DonationService;
pub use user_service::UserService;
