//! Home Page
//!
//! Restaurant listing with search and quick filters.

use leptos::*;
use leptos_router::*;

#[derive(Clone, PartialEq)]
struct Listing {
    id: u64,
    name: &'static str,
    rating: f32,
    reviews: u32,
    delivery: (u32, u32),
    distance_km: f32,
    cuisines: &'static [&'static str],
}

const RESTAURANTS: [Listing; 6] = [
    Listing {
        id: 1,
        name: "Restaurante do Chef",
        rating: 4.8,
        reviews: 500,
        delivery: (30, 45),
        distance_km: 2.5,
        cuisines: &["Contemporâneo", "Brasileira"],
    },
    Listing {
        id: 2,
        name: "Pizza Delícia",
        rating: 4.6,
        reviews: 320,
        delivery: (40, 55),
        distance_km: 3.2,
        cuisines: &["Pizza", "Italiana"],
    },
    Listing {
        id: 3,
        name: "Sushi Express",
        rating: 4.5,
        reviews: 210,
        delivery: (35, 50),
        distance_km: 4.1,
        cuisines: &["Japonesa", "Sushi"],
    },
    Listing {
        id: 4,
        name: "Burger House",
        rating: 4.3,
        reviews: 780,
        delivery: (20, 35),
        distance_km: 1.8,
        cuisines: &["Hambúrguer", "Lanches"],
    },
    Listing {
        id: 5,
        name: "Cantina da Nonna",
        rating: 4.9,
        reviews: 150,
        delivery: (45, 60),
        distance_km: 5.6,
        cuisines: &["Italiana", "Massas"],
    },
    Listing {
        id: 6,
        name: "Tempero Caseiro",
        rating: 4.4,
        reviews: 95,
        delivery: (25, 40),
        distance_km: 0.9,
        cuisines: &["Brasileira", "Marmita"],
    },
];

#[derive(Clone, Copy, PartialEq)]
enum QuickFilter {
    MostPopular,
    FastDelivery,
    BestRated,
    Nearby,
}

impl QuickFilter {
    const ALL: [QuickFilter; 4] = [
        QuickFilter::MostPopular,
        QuickFilter::FastDelivery,
        QuickFilter::BestRated,
        QuickFilter::Nearby,
    ];

    fn label(self) -> &'static str {
        match self {
            QuickFilter::MostPopular => "Mais Populares",
            QuickFilter::FastDelivery => "Entrega Rápida",
            QuickFilter::BestRated => "Melhor Avaliados",
            QuickFilter::Nearby => "Perto de Você",
        }
    }
}

fn visible(search: &str, filter: Option<QuickFilter>) -> Vec<Listing> {
    let needle = search.trim().to_lowercase();
    let mut cards: Vec<Listing> = RESTAURANTS
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.cuisines.iter().any(|c| c.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    match filter {
        Some(QuickFilter::MostPopular) => cards.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        Some(QuickFilter::FastDelivery) => cards.sort_by_key(|r| r.delivery.0),
        Some(QuickFilter::BestRated) => cards.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        Some(QuickFilter::Nearby) => cards.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
        None => {}
    }
    cards
}

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let (search, set_search) = create_signal(String::new());
    let (filter, set_filter) = create_signal(None::<QuickFilter>);

    let toggle = move |f: QuickFilter| {
        set_filter.update(|current| {
            *current = if *current == Some(f) { None } else { Some(f) };
        });
    };

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <section class="text-center space-y-4">
                <h1 class="text-4xl font-bold">"Peça comida dos melhores restaurantes"</h1>
                <input
                    type="search"
                    placeholder="Buscar restaurantes ou culinárias"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    class="w-full max-w-xl border border-gray-300 rounded-full px-6 py-3 focus:border-red-500 focus:outline-none"
                />
            </section>

            <div class="flex flex-wrap gap-2 justify-center">
                {QuickFilter::ALL.into_iter().map(|f| view! {
                    <button
                        on:click=move |_| toggle(f)
                        class=move || {
                            let base = "px-4 py-2 rounded-full text-sm font-medium transition-colors";
                            if filter.get() == Some(f) {
                                format!("{} bg-red-600 text-white", base)
                            } else {
                                format!("{} bg-white text-gray-700 hover:bg-red-50", base)
                            }
                        }
                    >
                        {f.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {move || {
                    let cards = visible(&search.get(), filter.get());
                    if cards.is_empty() {
                        view! {
                            <p class="col-span-full text-center text-gray-500 py-12">"Nenhum restaurante encontrado."</p>
                        }.into_view()
                    } else {
                        cards.into_iter().map(|r| view! { <RestaurantCard listing=r /> }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn RestaurantCard(listing: Listing) -> impl IntoView {
    let href = if listing.id == 1 { "/restaurante" } else { "#" };

    view! {
        <A href=href class="bg-white rounded-xl shadow hover:shadow-md transition-shadow p-5 block">
            <div class="flex items-center justify-between mb-2">
                <h3 class="font-semibold text-lg">{listing.name}</h3>
                <span class="text-yellow-500 text-sm">"★ " {format!("{:.1}", listing.rating)}</span>
            </div>
            <p class="text-sm text-gray-600">{listing.cuisines.join(" • ")}</p>
            <div class="flex items-center space-x-4 text-xs text-gray-500 mt-3">
                <span>{format!("{}-{} min", listing.delivery.0, listing.delivery.1)}</span>
                <span>{format!("{:.1} km", listing.distance_km)}</span>
                <span>{format!("{} avaliações", listing.reviews)}</span>
            </div>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[Listing]) -> Vec<u64> {
        cards.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_matches_cuisine() {
        assert_eq!(ids(&visible("massas", None)), vec![5]);
        assert_eq!(visible("", None).len(), 6);
    }

    #[test]
    fn test_nearby_first() {
        assert_eq!(visible("", Some(QuickFilter::Nearby))[0].id, 6);
    }
}
