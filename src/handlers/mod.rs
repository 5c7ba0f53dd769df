pub mod auth_handlers;
pub mod donation_handlers;
pub mod page_handlers;

pub use auth_handlers::{login_handler, logout_handler, register_handler};
pub use donation_handlers::{donate_handler, leaderboard_handler, profile_handler};
pub use page_handlers::{donate_page, home_page, login_page, register_page};
