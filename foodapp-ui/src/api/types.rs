//! Wire types shared by the HTTP client and the localStorage mock

use serde::{Deserialize, Serialize};

/// Fixed menu categories, as stored by the product API
pub const CATEGORIES: [&str; 3] = ["Pratos Principais", "Bebidas", "Sobremesas"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl Product {
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Modal form state; price is kept as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub prep_time: String,
    pub servings: String,
    pub category: String,
    pub image: Option<String>,
}

impl EditForm {
    pub fn new_product() -> Self {
        Self {
            category: CATEGORIES[0].to_string(),
            ..Default::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            prep_time: product.prep_time.clone(),
            servings: product.servings.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    /// Request body; `id` present only for updates
    pub fn to_payload(&self, id: Option<u64>) -> ProductPayload {
        ProductPayload {
            id,
            name: self.name.clone(),
            price: coerce_price(&self.price),
            description: self.description.clone(),
            prep_time: self.prep_time.clone(),
            servings: self.servings.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub prep_time: String,
    pub servings: String,
    pub category: String,
    pub image: Option<String>,
}

impl ProductPayload {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            prep_time: self.prep_time,
            servings: self.servings,
            image: self.image,
            category: self.category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    pub restaurant_name: String,
    pub category: String,
    pub opening_hours: String,
    pub delivery_time: String,
    pub description: String,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            restaurant_name: "Restaurante do Chef".to_string(),
            category: "Contemporâneo • Brasileiro".to_string(),
            opening_hours: "11:00 - 23:00".to_string(),
            delivery_time: "30-45 minutos".to_string(),
            description: "Restaurante especializado em pratos contemporâneos com um toque da culinária brasileira."
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Leading-number parse; anything unparseable is 0
pub fn coerce_price(input: &str) -> f64 {
    let s = input.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    let value = if seen_digit {
        s[..end].trim_end_matches('.').parse::<f64>().unwrap_or(0.0)
    } else {
        0.0
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `R$ 45,90`
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price("12.5"), 12.5);
        assert_eq!(coerce_price("10abc"), 10.0);
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("abc"), 0.0);
        assert_eq!(coerce_price("9,5"), 9.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(45.9), "R$ 45,90");
    }

    #[test]
    fn test_insert_payload_has_no_id() {
        let form = EditForm {
            name: "Pudim".to_string(),
            price: "9.5".to_string(),
            ..EditForm::new_product()
        };
        let json = serde_json::to_value(form.to_payload(None)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["price"], 9.5);
        assert_eq!(json["category"], "Pratos Principais");
    }
}
