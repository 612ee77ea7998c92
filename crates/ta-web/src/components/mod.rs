//! Reusable components

mod auth;
mod badges;
mod cards;
mod footer;
mod navbar;
mod toast;
mod upload_card;

pub use auth::RequireAuth;
pub use badges::{RiskBadge, StatusBadge, VerdictBadge};
pub use cards::{CheckList, FeatureCard, NumberedStep, StatFigure};
pub use footer::Footer;
pub use navbar::Navbar;
pub use toast::Toasts;
pub use upload_card::UploadCard;
