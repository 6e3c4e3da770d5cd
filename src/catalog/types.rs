//! Core data types for the product catalog
//!
//! This module defines the records exchanged with the product API:
//! - `Product`: a menu item as stored by the backing store
//! - `ProductForm`: the editable fields of a product (price still raw input)
//! - `ProductDraft`: an insert or an update, chosen explicitly by the caller
//! - `RestaurantProfile`: the single restaurant record
//! - `ImageUpload`: an image file handed to the store as-is

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier assigned by the backing store
pub type ProductId = u64;

/// A menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub servings: String,
    /// Remote URL or inline `data:` URL
    #[serde(default)]
    pub image: Option<String>,
    pub category: Category,
}

impl Product {
    /// Build a stored record from an identifier and form fields
    pub fn from_form(id: ProductId, form: &ProductForm) -> Self {
        Self {
            id,
            name: form.name.clone(),
            price: form.price.value(),
            description: form.description.clone(),
            prep_time: form.prep_time.clone(),
            servings: form.servings.clone(),
            image: form.image.clone(),
            category: form.category,
        }
    }

    /// Overwrite every editable field with the form values.
    /// The identifier is left untouched.
    pub fn apply(&mut self, form: &ProductForm) {
        self.name = form.name.clone();
        self.price = form.price.value();
        self.description = form.description.clone();
        self.prep_time = form.prep_time.clone();
        self.servings = form.servings.clone();
        self.image = form.image.clone();
        self.category = form.category;
    }

    /// Price formatted for display, e.g. `R$ 45,90`
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Menu category. Serialized with the labels the product API stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Pratos Principais")]
    MainCourse,
    #[serde(rename = "Bebidas")]
    Drinks,
    #[serde(rename = "Sobremesas")]
    Desserts,
}

impl Category {
    /// Get all categories for iteration
    pub fn all() -> &'static [Category] {
        &[Category::MainCourse, Category::Drinks, Category::Desserts]
    }

    /// Label as stored by the API
    pub fn label(&self) -> &'static str {
        match self {
            Category::MainCourse => "Pratos Principais",
            Category::Drinks => "Bebidas",
            Category::Desserts => "Sobremesas",
        }
    }

    /// Parse a stored label or a short alias (`main`, `drinks`, `desserts`)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .or_else(|| match s.to_lowercase().as_str() {
                "main" | "main_course" | "main-course" => Some(Category::MainCourse),
                "drink" | "drinks" => Some(Category::Drinks),
                "dessert" | "desserts" => Some(Category::Desserts),
                _ => None,
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price as entered in a form: either already numeric or raw text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Numeric value; text that does not parse coerces to zero
    pub fn value(&self) -> f64 {
        match self {
            PriceInput::Number(n) if n.is_finite() => *n,
            PriceInput::Number(_) => 0.0,
            PriceInput::Text(s) => coerce_price(s),
        }
    }
}

impl Default for PriceInput {
    fn default() -> Self {
        PriceInput::Text(String::new())
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        PriceInput::Text(value)
    }
}

/// Coerce free-form price text to a number.
///
/// Takes the longest leading decimal literal (`"10abc"` → `10.0`),
/// so `"12.5"` → `12.5` while `""` and `"abc"` → `0.0`.
pub fn coerce_price(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }

    if !has_digits {
        return 0.0;
    }

    // Optional exponent, only consumed when complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Format a price as Brazilian reais, e.g. `45.9` → `R$ 45,90`
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}

/// Editable product fields. Price stays as entered until the store coerces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub price: PriceInput,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductForm {
    pub fn new(name: impl Into<String>, price: impl Into<PriceInput>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set prep time label
    pub fn prep_time(mut self, prep_time: impl Into<String>) -> Self {
        self.prep_time = prep_time.into();
        self
    }

    /// Builder method: set servings label
    pub fn servings(mut self, servings: impl Into<String>) -> Self {
        self.servings = servings.into();
        self
    }

    /// Builder method: set category
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Builder method: set image reference
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Form pre-filled from an existing record
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: PriceInput::Number(product.price),
            description: product.description.clone(),
            prep_time: product.prep_time.clone(),
            servings: product.servings.clone(),
            category: product.category,
            image: product.image.clone(),
        }
    }

    /// Wire body with the price already coerced
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            price: self.price.value(),
            description: self.description.clone(),
            prep_time: self.prep_time.clone(),
            servings: self.servings.clone(),
            category: self.category,
            image: self.image.clone(),
        }
    }
}

/// Request body for `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub prep_time: String,
    pub servings: String,
    pub category: Category,
    pub image: Option<String>,
}

/// A pending save: insert a new record or update an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDraft {
    New(ProductForm),
    Existing { id: ProductId, form: ProductForm },
}

impl ProductDraft {
    pub fn id(&self) -> Option<ProductId> {
        match self {
            ProductDraft::New(_) => None,
            ProductDraft::Existing { id, .. } => Some(*id),
        }
    }

    pub fn form(&self) -> &ProductForm {
        match self {
            ProductDraft::New(form) => form,
            ProductDraft::Existing { form, .. } => form,
        }
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        match self {
            ProductDraft::New(form) => form,
            ProductDraft::Existing { form, .. } => form,
        }
    }
}

/// The restaurant record, overwritten wholesale on each save
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProfile {
    pub restaurant_name: String,
    pub category: String,
    pub opening_hours: String,
    pub delivery_time: String,
    pub description: String,
}

impl Default for RestaurantProfile {
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

/// An image file passed through to the store without validation
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    /// Builder method: set an explicit content type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Explicit content type, else guessed from the file extension
    pub fn mime_type(&self) -> &str {
        if let Some(ct) = self.content_type.as_deref() {
            return ct;
        }
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            "avif" => "image/avif",
            _ => "application/octet-stream",
        }
    }
}

/// Response body of `POST /upload`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub image_url: String,
}
