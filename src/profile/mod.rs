//! User Profile
//!
//! Client-held profile state for the account page: delivery addresses with
//! exactly one main address, favorite restaurants and past orders.

mod book;
mod types;

pub use book::ProfileBook;
pub use types::{Address, AddressForm, AddressId, FavoriteRestaurant, OrderHistory, OrderStatus};

/// Profile operation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(u64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
