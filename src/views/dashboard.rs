//! Owner dashboard
//!
//! Menu management over a [`ProductStore`] plus the restaurant information
//! form submitted through the relay. Store calls are awaited one at a time;
//! each transition goes through [`CatalogView`].

use std::sync::Arc;

use crate::catalog::{ProductStore, RestaurantProfile};
use crate::relay::RelayClient;

use super::state::{CatalogView, ViewError};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Menu,
    Info,
    Settings,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[DashboardTab::Menu, DashboardTab::Info, DashboardTab::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Menu => "Cardápio",
            DashboardTab::Info => "Informações",
            DashboardTab::Settings => "Configurações",
        }
    }
}

/// Outcome of the last restaurant information submission
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InfoStatus {
    #[default]
    Unsaved,
    Saved(String),
    Failed(String),
}

/// State and store wiring for the owner dashboard
pub struct Dashboard {
    store: Arc<dyn ProductStore>,
    relay: RelayClient,
    tab: DashboardTab,
    menu: CatalogView,
    restaurant: RestaurantProfile,
    info_status: InfoStatus,
}

impl Dashboard {
    pub fn new(store: Arc<dyn ProductStore>, relay: RelayClient) -> Self {
        Self {
            store,
            relay,
            tab: DashboardTab::default(),
            menu: CatalogView::new(),
            restaurant: RestaurantProfile::default(),
            info_status: InfoStatus::default(),
        }
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn menu(&self) -> &CatalogView {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut CatalogView {
        &mut self.menu
    }

    pub fn restaurant(&self) -> &RestaurantProfile {
        &self.restaurant
    }

    pub fn restaurant_mut(&mut self) -> &mut RestaurantProfile {
        &mut self.restaurant
    }

    pub fn info_status(&self) -> &InfoStatus {
        &self.info_status
    }

    /// Fetch the product list
    pub async fn load(&mut self) {
        self.menu.begin_load();
        let result = self.store.list().await;
        self.menu.finish_load(result);
    }

    /// Save the open modal. A picked image is uploaded first and its
    /// reference replaces the form's image. If either call fails the modal
    /// reopens with the typed form, the picked image and an error message.
    pub async fn submit_edit(&mut self) -> Result<(), ViewError> {
        let mut session = self.menu.submit_edit()?;

        if let Some(file) = session.image.take() {
            match self.store.upload_image(file).await {
                Ok(url) => session.form_mut().image = Some(url),
                Err(e) => {
                    self.menu.finish_save(Err(e));
                    return Ok(());
                }
            }
        }

        let result = self.store.save(session.draft).await;
        self.menu.finish_save(result);
        Ok(())
    }

    /// Delete the product awaiting confirmation, if any
    pub async fn confirm_delete(&mut self) {
        if let Some(id) = self.menu.confirm_delete() {
            let result = self.store.delete(id).await;
            self.menu.finish_delete(id, result);
        }
    }

    /// Submit the restaurant information form through the relay
    pub async fn save_restaurant(&mut self) {
        self.info_status = match self.relay.save_restaurant(&self.restaurant).await {
            Ok(message) => InfoStatus::Saved(message),
            Err(e) => {
                tracing::warn!(error = %e, "Saving restaurant information failed");
                InfoStatus::Failed(e.user_message().to_string())
            }
        };
    }
}
