//! In-memory profile state: addresses, favorites and order history
//!
//! Nothing here is persisted. Address ids come from a counter that only moves
//! forward, so an id is never reused after a delete.

use super::{
    Address, AddressForm, AddressId, FavoriteRestaurant, OrderHistory, OrderStatus, ProfileError,
    ProfileResult,
};

/// The user's profile data
#[derive(Debug, Clone, Default)]
pub struct ProfileBook {
    addresses: Vec<Address>,
    favorites: Vec<FavoriteRestaurant>,
    orders: Vec<OrderHistory>,
    next_address_id: AddressId,
}

impl ProfileBook {
    /// An empty profile
    pub fn new() -> Self {
        Self {
            next_address_id: 1,
            ..Default::default()
        }
    }

    /// Sample profile shown until an account backend exists
    pub fn demo() -> Self {
        let mut book = Self::new();
        book.addresses.push(Address {
            id: 1,
            title: "Endereço Principal".to_string(),
            street: "Rua das Flores, 123 - Jardim América".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            is_main: true,
        });
        book.next_address_id = 2;

        book.favorites = vec![
            favorite(
                1,
                "Restaurante do Chef",
                "restaurant1.jpg",
                4.8,
                "Contemporâneo • Brasileiro",
                "30-45 min",
                "2.5 km",
            ),
            favorite(
                2,
                "Pizza Delícia",
                "restaurant2.jpg",
                4.6,
                "Pizza • Italiana",
                "40-55 min",
                "3.2 km",
            ),
        ];

        book.orders = vec![
            order(
                1,
                "Restaurante do Chef",
                "#12345",
                "20/02/2025",
                "R$ 89,90",
                OrderStatus::Delivered,
                &["1x Filé à Parmegiana", "1x Arroz", "1x Coca-Cola 350ml"],
            ),
            order(
                2,
                "Pizza Delícia",
                "#12344",
                "15/02/2025",
                "R$ 75,50",
                OrderStatus::Delivered,
                &["1x Pizza Grande Margherita", "1x Guaraná 2L"],
            ),
            order(
                3,
                "Sushi Express",
                "#12343",
                "10/02/2025",
                "R$ 132,00",
                OrderStatus::Cancelled,
                &["2x Combo 20 Peças", "1x Temaki Salmão"],
            ),
        ];

        book
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn favorites(&self) -> &[FavoriteRestaurant] {
        &self.favorites
    }

    pub fn orders(&self) -> &[OrderHistory] {
        &self.orders
    }

    pub fn address(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    pub fn main_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_main)
    }

    /// Favorites still flagged as favorite
    pub fn active_favorites(&self) -> impl Iterator<Item = &FavoriteRestaurant> {
        self.favorites.iter().filter(|f| f.is_favorite)
    }

    /// Append a new address. The first address of an empty book becomes main.
    pub fn add_address(&mut self, form: AddressForm) -> ProfileResult<&Address> {
        form.validate()?;

        let id = self.next_address_id;
        self.next_address_id += 1;

        let is_main = self.addresses.is_empty();
        self.addresses.push(Address {
            id,
            title: form.title,
            street: form.street,
            city: form.city,
            state: form.state,
            is_main,
        });

        tracing::debug!(address_id = id, is_main, "Address added");
        Ok(&self.addresses[self.addresses.len() - 1])
    }

    /// Overwrite the editable fields of an address; id and main flag are kept
    pub fn update_address(&mut self, id: AddressId, form: AddressForm) -> ProfileResult<&Address> {
        form.validate()?;

        let address = self
            .addresses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ProfileError::AddressNotFound(id))?;

        address.title = form.title;
        address.street = form.street;
        address.city = form.city;
        address.state = form.state;
        Ok(address)
    }

    /// Flag one address as main and clear the flag everywhere else.
    /// An unknown id changes nothing.
    pub fn set_main_address(&mut self, id: AddressId) -> ProfileResult<()> {
        if self.address(id).is_none() {
            return Err(ProfileError::AddressNotFound(id));
        }

        for address in &mut self.addresses {
            address.is_main = address.id == id;
        }
        Ok(())
    }

    /// Remove an address. Removing the main address promotes the first
    /// remaining one. Unknown ids are a no-op.
    pub fn delete_address(&mut self, id: AddressId) -> Option<Address> {
        let index = self.addresses.iter().position(|a| a.id == id)?;
        let removed = self.addresses.remove(index);

        if removed.is_main {
            if let Some(first) = self.addresses.first_mut() {
                first.is_main = true;
            }
        }

        tracing::debug!(address_id = id, "Address deleted");
        Some(removed)
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, restaurant_id: u64) -> ProfileResult<bool> {
        let restaurant = self
            .favorites
            .iter_mut()
            .find(|f| f.id == restaurant_id)
            .ok_or(ProfileError::RestaurantNotFound(restaurant_id))?;

        restaurant.is_favorite = !restaurant.is_favorite;
        Ok(restaurant.is_favorite)
    }
}

fn favorite(
    id: u64,
    name: &str,
    image: &str,
    rating: f32,
    category: &str,
    delivery_time: &str,
    distance: &str,
) -> FavoriteRestaurant {
    FavoriteRestaurant {
        id,
        name: name.to_string(),
        image: image.to_string(),
        rating,
        category: category.to_string(),
        delivery_time: delivery_time.to_string(),
        distance: distance.to_string(),
        is_favorite: true,
    }
}

fn order(
    id: u64,
    restaurant_name: &str,
    order_number: &str,
    date: &str,
    total: &str,
    status: OrderStatus,
    items: &[&str],
) -> OrderHistory {
    OrderHistory {
        id,
        restaurant_name: restaurant_name.to_string(),
        order_number: order_number.to_string(),
        date: date.to_string(),
        total: total.to_string(),
        status,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str) -> AddressForm {
        AddressForm::new(title, "Rua B, 45", "Campinas", "SP")
    }

    fn main_count(book: &ProfileBook) -> usize {
        book.addresses().iter().filter(|a| a.is_main).count()
    }

    #[test]
    fn test_demo_profile() {
        let book = ProfileBook::demo();
        assert_eq!(book.addresses().len(), 1);
        assert_eq!(main_count(&book), 1);
        assert_eq!(book.favorites().len(), 2);
        assert_eq!(book.orders().len(), 3);
        assert_eq!(book.orders()[2].status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_first_address_becomes_main() {
        let mut book = ProfileBook::new();
        let first = book.add_address(form("Casa")).unwrap().clone();
        let second = book.add_address(form("Trabalho")).unwrap().clone();

        assert!(first.is_main);
        assert!(!second.is_main);
        assert_eq!((first.id, second.id), (1, 2));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut book = ProfileBook::demo();
        let id = book.add_address(form("Casa")).unwrap().id;
        book.delete_address(id);

        let next = book.add_address(form("Outra")).unwrap().id;
        assert!(next > id);
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let mut book = ProfileBook::new();
        let result = book.add_address(AddressForm::new("", "Rua", "Cidade", "UF"));
        assert_eq!(result.unwrap_err(), ProfileError::MissingField("title"));
        assert!(book.addresses().is_empty());
    }

    #[test]
    fn test_update_keeps_id_and_main_flag() {
        let mut book = ProfileBook::demo();
        let updated = book
            .update_address(
                1,
                AddressForm::new("Casa Nova", "Av. Paulista, 1000", "São Paulo", "SP"),
            )
            .unwrap();

        assert_eq!(updated.id, 1);
        assert!(updated.is_main);
        assert_eq!(updated.title, "Casa Nova");
        assert_eq!(
            book.update_address(99, form("x")).unwrap_err(),
            ProfileError::AddressNotFound(99)
        );
    }

    #[test]
    fn test_set_main_leaves_exactly_one() {
        let mut book = ProfileBook::demo();
        book.add_address(form("A")).unwrap();
        book.add_address(form("B")).unwrap();

        for id in [3, 2, 1, 3] {
            book.set_main_address(id).unwrap();
            assert_eq!(main_count(&book), 1);
            assert_eq!(book.main_address().unwrap().id, id);
        }
    }

    #[test]
    fn test_set_main_repairs_bad_prior_state() {
        let mut book = ProfileBook::new();
        book.add_address(form("A")).unwrap();
        book.add_address(form("B")).unwrap();
        book.addresses.iter_mut().for_each(|a| a.is_main = true);

        book.set_main_address(2).unwrap();
        assert_eq!(main_count(&book), 1);
    }

    #[test]
    fn test_set_main_unknown_id_changes_nothing() {
        let mut book = ProfileBook::demo();
        let before = book.addresses().to_vec();

        assert_eq!(
            book.set_main_address(42),
            Err(ProfileError::AddressNotFound(42))
        );
        assert_eq!(book.addresses(), before.as_slice());
    }

    #[test]
    fn test_delete_main_promotes_first_remaining() {
        let mut book = ProfileBook::demo();
        book.add_address(form("A")).unwrap();
        book.add_address(form("B")).unwrap();

        let removed = book.delete_address(1).unwrap();
        assert!(removed.is_main);
        assert_eq!(book.main_address().unwrap().id, 2);
        assert_eq!(main_count(&book), 1);

        assert!(book.delete_address(1).is_none());
        assert_eq!(book.addresses().len(), 2);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut book = ProfileBook::demo();
        assert!(!book.toggle_favorite(2).unwrap());
        assert_eq!(book.active_favorites().count(), 1);
        assert!(book.toggle_favorite(2).unwrap());
        assert_eq!(
            book.toggle_favorite(9),
            Err(ProfileError::RestaurantNotFound(9))
        );
    }
}
