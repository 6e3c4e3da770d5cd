//! Customer-facing restaurant menu

use std::sync::Arc;

use crate::catalog::{Category, Product, ProductStore};

use super::state::{CatalogView, ViewState};

/// Static restaurant header and sidebar facts
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantHeader {
    pub name: String,
    pub rating: f32,
    pub reviews: String,
    pub delivery_window: String,
    pub delivery_fee: String,
    pub about: String,
    pub opening_hours: String,
    pub distance: String,
}

impl Default for RestaurantHeader {
    fn default() -> Self {
        Self {
            name: "Restaurante do Chef".to_string(),
            rating: 4.8,
            reviews: "500+ avaliações".to_string(),
            delivery_window: "30-45 min".to_string(),
            delivery_fee: "Entrega R$ 5,90".to_string(),
            about: "Contemporâneo • Brasileiro".to_string(),
            opening_hours: "11:00 - 23:00".to_string(),
            distance: "2.5 km de distância".to_string(),
        }
    }
}

/// What the menu area shows
#[derive(Debug, PartialEq)]
pub enum MenuDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Products(Vec<&'a Product>),
}

/// Read-only menu page: load once, filter locally
pub struct MenuView {
    store: Arc<dyn ProductStore>,
    header: RestaurantHeader,
    catalog: CatalogView,
    search: String,
}

impl MenuView {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            header: RestaurantHeader::default(),
            catalog: CatalogView::new(),
            search: String::new(),
        }
    }

    pub fn header(&self) -> &RestaurantHeader {
        &self.header
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub async fn load(&mut self) {
        self.catalog.begin_load();
        let result = self.store.list().await;
        self.catalog.finish_load(result);
    }

    /// Products whose name or description contains the search text,
    /// ignoring case
    pub fn visible_products(&self) -> Vec<&Product> {
        let needle = self.search.trim().to_lowercase();
        self.catalog
            .products()
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Visible products grouped by category, empty groups omitted
    pub fn sections(&self) -> Vec<(Category, Vec<&Product>)> {
        let visible = self.visible_products();
        Category::all()
            .iter()
            .filter_map(|category| {
                let items: Vec<&Product> = visible
                    .iter()
                    .copied()
                    .filter(|p| p.category == *category)
                    .collect();
                (!items.is_empty()).then_some((*category, items))
            })
            .collect()
    }

    pub fn display(&self) -> MenuDisplay<'_> {
        match self.catalog.state() {
            ViewState::Loading => MenuDisplay::Loading,
            ViewState::Error(message) => MenuDisplay::Error(message),
            _ => {
                let visible = self.visible_products();
                if visible.is_empty() {
                    MenuDisplay::Empty
                } else {
                    MenuDisplay::Products(visible)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocalProductStore, MockLatency, PRODUCTS_KEY};
    use crate::storage::{KeyValueStore, MemoryStore};

    fn menu_with(kv: MemoryStore) -> MenuView {
        MenuView::new(Arc::new(LocalProductStore::new(kv, MockLatency::none())))
    }

    #[tokio::test]
    async fn test_loading_then_products() {
        let mut menu = menu_with(MemoryStore::new());
        assert_eq!(menu.display(), MenuDisplay::Loading);

        menu.load().await;
        match menu.display() {
            MenuDisplay::Products(products) => {
                assert_eq!(products.len(), 2);
                assert_eq!(products[0].display_price(), "R$ 45,90");
            }
            other => panic!("unexpected display {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let mut menu = menu_with(MemoryStore::new());
        menu.load().await;

        menu.set_search("SUCO");
        let names: Vec<_> = menu.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Suco Natural"]);

        menu.set_search("pizza");
        assert_eq!(menu.display(), MenuDisplay::Empty);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let kv = MemoryStore::new();
        kv.set_item(PRODUCTS_KEY, "[]").unwrap();
        let mut menu = menu_with(kv);
        menu.load().await;

        assert_eq!(menu.display(), MenuDisplay::Empty);
    }

    #[tokio::test]
    async fn test_sections_by_category() {
        let mut menu = menu_with(MemoryStore::new());
        menu.load().await;

        let sections = menu.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, Category::MainCourse);
        assert_eq!(sections[1].0, Category::Drinks);
    }
}
