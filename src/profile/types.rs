//! Profile page records

use serde::{Deserialize, Serialize};

use super::ProfileError;

pub type AddressId = u64;

/// A delivery address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub title: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub is_main: bool,
}

impl Address {
    /// Single-line rendering, e.g. "Rua das Flores, 123 - São Paulo, SP"
    pub fn summary(&self) -> String {
        format!("{} - {}, {}", self.street, self.city, self.state)
    }
}

/// Editable address fields; id and main flag are owned by the book
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressForm {
    pub title: String,
    pub street: String,
    pub city: String,
    pub state: String,
}

impl AddressForm {
    pub fn new(
        title: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    /// Prefill from an existing address for editing
    pub fn from_address(address: &Address) -> Self {
        Self::new(
            address.title.clone(),
            address.street.clone(),
            address.city.clone(),
            address.state.clone(),
        )
    }

    /// Every field is required
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fields = [
            ("title", &self.title),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ProfileError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// A restaurant the user marked as favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRestaurant {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub category: String,
    pub delivery_time: String,
    pub distance: String,
    pub is_favorite: bool,
}

/// Order lifecycle as shown in the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Cancelled,
    Processing,
}

impl OrderStatus {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
            OrderStatus::Processing => "Em processamento",
        }
    }

    /// Badge CSS classes
    pub fn badge_style(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "text-green-600 bg-green-50",
            OrderStatus::Cancelled => "text-red-600 bg-red-50",
            OrderStatus::Processing => "text-blue-600 bg-blue-50",
        }
    }
}

/// A past order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    pub id: u64,
    pub restaurant_name: String,
    pub order_number: String,
    pub date: String,
    pub total: String,
    pub status: OrderStatus,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_every_field() {
        let form = AddressForm::new("Casa", "Rua A, 1", "São Paulo", "SP");
        assert!(form.validate().is_ok());

        let missing_city = AddressForm {
            city: "   ".to_string(),
            ..form.clone()
        };
        assert_eq!(
            missing_city.validate(),
            Err(ProfileError::MissingField("city"))
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Delivered.label(), "Entregue");
        assert_eq!(OrderStatus::Cancelled.badge_style(), "text-red-600 bg-red-50");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
    }

    #[test]
    fn test_address_wire_names() {
        let address = Address {
            id: 1,
            title: "Casa".to_string(),
            street: "Rua A, 1".to_string(),
            city: "Recife".to_string(),
            state: "PE".to_string(),
            is_main: true,
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["isMain"], true);
        assert_eq!(address.summary(), "Rua A, 1 - Recife, PE");
    }
}
