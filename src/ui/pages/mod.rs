//! Route-level page components.

pub mod blog;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod hero;
pub mod ideas;
pub mod login;
pub mod not_found;
pub mod profile;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use content::ContentPage;
pub use dashboard::DashboardPage;
pub use hero::HeroPage;
pub use ideas::IdeasPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
