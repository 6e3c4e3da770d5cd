//! Page View Models
//!
//! Framework-agnostic state for the five pages. Each page owns only its
//! local state; the catalog pages drive a [`ViewState`] machine over a
//! shared [`ProductStore`](crate::catalog::ProductStore).
//!
//! - [`HomeView`]: restaurant listing with search and quick filters
//! - [`MenuView`]: a restaurant's menu with search
//! - [`Dashboard`]: owner menu management and restaurant information
//! - [`ProfileView`]: addresses, favorites and order history
//! - [`AuthForm`]: login / register form

mod auth;
mod dashboard;
mod home;
mod menu;
mod profile;
mod state;

pub use auth::{AuthForm, AuthFormError, AuthMode, AuthPayload};
pub use dashboard::{Dashboard, DashboardTab, InfoStatus};
pub use home::{demo_restaurants, HomeView, QuickFilter, RestaurantCard};
pub use menu::{MenuDisplay, MenuView, RestaurantHeader};
pub use profile::{AddressModal, ProfileTab, ProfileView};
pub use state::{CatalogView, EditSession, ViewError, ViewState};
