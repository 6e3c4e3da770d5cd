//! Catalog error types
//!
//! Every transport failure collapses to one of four coarse kinds.
//! The carried detail is for logs; views show `user_message()`.

use thiserror::Error;

/// Errors returned by a `ProductStore`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Listing products failed
    #[error("Failed to fetch products: {0}")]
    Fetch(String),

    /// Saving a product or the restaurant profile failed
    #[error("Failed to save: {0}")]
    Save(String),

    /// Deleting a product failed
    #[error("Failed to delete product: {0}")]
    Delete(String),

    /// Uploading an image failed
    #[error("Failed to upload image: {0}")]
    Upload(String),
}

impl CatalogError {
    /// Generic message shown to the user in the error banner
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::Fetch(_) => "Could not load products. Please try again later.",
            CatalogError::Save(_) => "Could not save. Please try again.",
            CatalogError::Delete(_) => "Could not delete the product. Please try again.",
            CatalogError::Upload(_) => "Could not upload the image. Please try again.",
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Fetch("connection refused".to_string());
        assert_eq!(err.to_string(), "Failed to fetch products: connection refused");

        let err = CatalogError::Delete("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Failed to delete product: HTTP 500");
    }

    #[test]
    fn test_user_message_hides_detail() {
        let err = CatalogError::Save("HTTP 502: bad gateway".to_string());
        assert!(!err.user_message().contains("502"));
        assert_eq!(
            CatalogError::Upload(String::new()).user_message(),
            "Could not upload the image. Please try again."
        );
    }
}
