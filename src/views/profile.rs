//! Account page: tabs over a [`ProfileBook`] plus the address modal

use crate::profile::{AddressForm, AddressId, ProfileBook, ProfileError, ProfileResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Favorites,
    Addresses,
    Orders,
    Settings,
}

impl ProfileTab {
    pub fn all() -> &'static [ProfileTab] {
        &[
            ProfileTab::Favorites,
            ProfileTab::Addresses,
            ProfileTab::Orders,
            ProfileTab::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Favorites => "Restaurantes Favoritos",
            ProfileTab::Addresses => "Endereços",
            ProfileTab::Orders => "Histórico de Pedidos",
            ProfileTab::Settings => "Configurações",
        }
    }
}

/// Open add/edit address modal
#[derive(Debug, Clone, PartialEq)]
pub struct AddressModal {
    /// `None` when adding
    pub editing: Option<AddressId>,
    pub form: AddressForm,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    book: ProfileBook,
    tab: ProfileTab,
    modal: Option<AddressModal>,
}

impl ProfileView {
    pub fn new(book: ProfileBook) -> Self {
        Self {
            book,
            tab: ProfileTab::default(),
            modal: None,
        }
    }

    pub fn book(&self) -> &ProfileBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut ProfileBook {
        &mut self.book
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn modal(&self) -> Option<&AddressModal> {
        self.modal.as_ref()
    }

    pub fn modal_form_mut(&mut self) -> Option<&mut AddressForm> {
        self.modal.as_mut().map(|m| &mut m.form)
    }

    pub fn open_new_address(&mut self) {
        self.modal = Some(AddressModal {
            editing: None,
            form: AddressForm::default(),
        });
    }

    pub fn open_edit_address(&mut self, id: AddressId) -> ProfileResult<()> {
        let address = self
            .book
            .address(id)
            .ok_or(ProfileError::AddressNotFound(id))?;
        self.modal = Some(AddressModal {
            editing: Some(id),
            form: AddressForm::from_address(address),
        });
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Add or update from the modal. The modal stays open on failure.
    pub fn submit_address(&mut self) -> ProfileResult<()> {
        let Some(modal) = self.modal.as_ref() else {
            return Ok(());
        };

        let form = modal.form.clone();
        match modal.editing {
            Some(id) => self.book.update_address(id, form).map(|_| ())?,
            None => self.book.add_address(form).map(|_| ())?,
        }
        self.modal = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_address_through_modal() {
        let mut view = ProfileView::new(ProfileBook::demo());
        view.select_tab(ProfileTab::Addresses);
        view.open_new_address();
        *view.modal_form_mut().unwrap() =
            AddressForm::new("Trabalho", "Av. Brasil, 500", "Rio de Janeiro", "RJ");

        view.submit_address().unwrap();
        assert!(view.modal().is_none());
        assert_eq!(view.book().addresses().len(), 2);
        assert!(!view.book().addresses()[1].is_main);
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let mut view = ProfileView::new(ProfileBook::demo());
        view.open_edit_address(1).unwrap();
        assert_eq!(view.modal().unwrap().form.city, "São Paulo");

        view.modal_form_mut().unwrap().city = "Santos".to_string();
        view.submit_address().unwrap();
        assert_eq!(view.book().address(1).unwrap().city, "Santos");
    }

    #[test]
    fn test_invalid_form_keeps_modal_open() {
        let mut view = ProfileView::new(ProfileBook::demo());
        view.open_new_address();

        assert_eq!(
            view.submit_address(),
            Err(ProfileError::MissingField("title"))
        );
        assert!(view.modal().is_some());
    }

    #[test]
    fn test_edit_unknown_address() {
        let mut view = ProfileView::new(ProfileBook::new());
        assert_eq!(
            view.open_edit_address(7),
            Err(ProfileError::AddressNotFound(7))
        );
        assert_eq!(view.tab(), ProfileTab::Favorites);
    }
}
