//! Site pages

mod about;
mod auth;
mod dashboard;
mod home;
mod how_it_works;
mod not_found;
mod resources;
mod tools;
mod upload;

pub use about::AboutPage;
pub use auth::{LoginPage, RegisterPage};
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
pub use resources::ResourcesPage;
pub use tools::ToolsPage;
pub use upload::UploadPage;
