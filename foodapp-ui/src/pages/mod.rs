//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod profile;
pub mod restaurant;

pub use auth::Auth;
pub use dashboard::Dashboard;
pub use home::Home;
pub use profile::Profile;
pub use restaurant::RestaurantMenu;
