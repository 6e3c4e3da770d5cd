//! Home page restaurant listing

use serde::{Deserialize, Serialize};

/// A restaurant card on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCard {
    pub id: u64,
    pub name: String,
    pub rating: f32,
    pub review_count: u32,
    /// Lower bound of the delivery window, in minutes
    pub delivery_min: u32,
    pub delivery_max: u32,
    pub distance_km: f32,
    pub cuisines: Vec<String>,
}

impl RestaurantCard {
    /// e.g. "30-45 min"
    pub fn delivery_window(&self) -> String {
        format!("{}-{} min", self.delivery_min, self.delivery_max)
    }

    /// e.g. "Hambúrguer • Pizza"
    pub fn cuisine_line(&self) -> String {
        self.cuisines.join(" • ")
    }
}

/// Quick-filter shortcuts above the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    MostPopular,
    FastDelivery,
    BestRated,
    Nearby,
}

impl QuickFilter {
    pub fn all() -> &'static [QuickFilter] {
        &[
            QuickFilter::MostPopular,
            QuickFilter::FastDelivery,
            QuickFilter::BestRated,
            QuickFilter::Nearby,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::MostPopular => "Mais Populares",
            QuickFilter::FastDelivery => "Entrega Rápida",
            QuickFilter::BestRated => "Melhor Avaliados",
            QuickFilter::Nearby => "Perto de Você",
        }
    }
}

/// Home listing state
#[derive(Debug, Clone)]
pub struct HomeView {
    restaurants: Vec<RestaurantCard>,
    search: String,
    filter: Option<QuickFilter>,
}

impl HomeView {
    pub fn new(restaurants: Vec<RestaurantCard>) -> Self {
        Self {
            restaurants,
            search: String::new(),
            filter: None,
        }
    }

    /// Listing with the sample restaurants
    pub fn demo() -> Self {
        Self::new(demo_restaurants())
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Select a shortcut; selecting the active one clears it
    pub fn toggle_filter(&mut self, filter: QuickFilter) {
        self.filter = if self.filter == Some(filter) {
            None
        } else {
            Some(filter)
        };
    }

    pub fn filter(&self) -> Option<QuickFilter> {
        self.filter
    }

    /// Cards matching the search by name or cuisine tag, ordered by the
    /// active shortcut
    pub fn visible(&self) -> Vec<&RestaurantCard> {
        let needle = self.search.trim().to_lowercase();
        let mut cards: Vec<&RestaurantCard> = self
            .restaurants
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.cuisines.iter().any(|c| c.to_lowercase().contains(&needle))
            })
            .collect();

        match self.filter {
            Some(QuickFilter::MostPopular) => {
                cards.sort_by(|a, b| b.review_count.cmp(&a.review_count))
            }
            Some(QuickFilter::FastDelivery) => cards.sort_by_key(|r| r.delivery_min),
            Some(QuickFilter::BestRated) => cards.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Some(QuickFilter::Nearby) => {
                cards.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
            }
            None => {}
        }
        cards
    }
}

fn card(
    id: u64,
    name: &str,
    rating: f32,
    review_count: u32,
    delivery: (u32, u32),
    distance_km: f32,
    cuisines: &[&str],
) -> RestaurantCard {
    RestaurantCard {
        id,
        name: name.to_string(),
        rating,
        review_count,
        delivery_min: delivery.0,
        delivery_max: delivery.1,
        distance_km,
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn demo_restaurants() -> Vec<RestaurantCard> {
    vec![
        card(
            1,
            "Restaurante do Chef",
            4.8,
            500,
            (30, 45),
            2.5,
            &["Contemporâneo", "Brasileira"],
        ),
        card(
            2,
            "Pizza Delícia",
            4.6,
            320,
            (40, 55),
            3.2,
            &["Pizza", "Italiana"],
        ),
        card(
            3,
            "Sushi Express",
            4.5,
            210,
            (35, 50),
            4.1,
            &["Japonesa", "Sushi"],
        ),
        card(
            4,
            "Burger House",
            4.3,
            780,
            (20, 35),
            1.8,
            &["Hambúrguer", "Lanches"],
        ),
        card(
            5,
            "Cantina da Nonna",
            4.9,
            150,
            (45, 60),
            5.6,
            &["Italiana", "Massas"],
        ),
        card(
            6,
            "Tempero Caseiro",
            4.4,
            95,
            (25, 40),
            0.9,
            &["Brasileira", "Marmita"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(view: &HomeView) -> Vec<u64> {
        view.visible().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_by_name_or_cuisine() {
        let mut view = HomeView::demo();
        view.set_search("italiana");
        assert_eq!(ids(&view), vec![2, 5]);

        view.set_search("SUSHI");
        assert_eq!(ids(&view), vec![3]);

        view.set_search("   ");
        assert_eq!(ids(&view).len(), 6);
    }

    #[test]
    fn test_quick_filters_order() {
        let mut view = HomeView::demo();

        view.toggle_filter(QuickFilter::BestRated);
        assert_eq!(ids(&view)[0], 5);

        view.toggle_filter(QuickFilter::Nearby);
        assert_eq!(ids(&view)[0], 6);

        view.toggle_filter(QuickFilter::FastDelivery);
        assert_eq!(ids(&view)[0], 4);

        view.toggle_filter(QuickFilter::MostPopular);
        assert_eq!(ids(&view)[0], 4);

        view.toggle_filter(QuickFilter::MostPopular);
        assert_eq!(view.filter(), None);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_card_labels() {
        let cards = demo_restaurants();
        assert_eq!(cards[1].delivery_window(), "40-55 min");
        assert_eq!(cards[1].cuisine_line(), "Pizza • Italiana");
    }
}
