//! View state machine shared by the catalog pages
//!
//! ```text
//!            begin_load / submit / confirm_delete
//!   Idle ─────────────────────────────────────────▶ Loading
//!    ▲ │ open_new / open_edit                         │
//!    │ ▼                                              │ finish_*
//!   Editing(session) ── cancel_edit ──▶ Idle ◀────────┤ Ok
//!    ▲                                                │ Err
//!    └──── failed save ──────────────── Error(msg) ◀──┘
//! ```
//!
//! Products survive every failed transition. A failed save reopens the
//! submitted session with the error attached instead of discarding the form.
//! The delete confirmation slot can only be filled while the view is
//! interactive and is cleared by any other transition.

use crate::catalog::{
    CatalogError, CatalogResult, Category, ImageUpload, Product, ProductDraft, ProductForm,
    ProductId,
};

/// An open add/edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub draft: ProductDraft,
    /// Image picked in the modal, uploaded before the product is saved
    pub image: Option<ImageUpload>,
    /// Message from the last failed submission of this form
    pub error: Option<String>,
}

impl EditSession {
    /// Empty form for a new product
    pub fn new_product() -> Self {
        Self {
            draft: ProductDraft::New(ProductForm::default()),
            image: None,
            error: None,
        }
    }

    /// Form prefilled from a stored product
    pub fn edit(product: &Product) -> Self {
        Self {
            draft: ProductDraft::Existing {
                id: product.id,
                form: ProductForm::from_product(product),
            },
            image: None,
            error: None,
        }
    }

    pub fn form(&self) -> &ProductForm {
        self.draft.form()
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        self.draft.form_mut()
    }

    pub fn select_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    pub fn is_new(&self) -> bool {
        self.draft.id().is_none()
    }

    /// Name is the only required field; price falls back to zero
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.form().name.trim().is_empty() {
            Some("name")
        } else {
            None
        }
    }
}

/// UI state of a catalog page
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Editing(EditSession),
    Error(String),
}

impl ViewState {
    /// Whether the user can start something new
    pub fn is_interactive(&self) -> bool {
        matches!(self, ViewState::Idle | ViewState::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Rejected view transition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("Another operation is in progress")]
    Busy,

    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),

    #[error("No product form is open")]
    NotEditing,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Products plus the state machine driving a catalog page
#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Vec<Product>,
    state: ViewState,
    pending_delete: Option<ProductId>,
    /// Copy of the session being saved, restored if the save fails
    submitted: Option<EditSession>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    /// A freshly mounted view starts loading
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            state: ViewState::Loading,
            pending_delete: None,
            submitted: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn pending_delete(&self) -> Option<ProductId> {
        self.pending_delete
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn set_state(&mut self, state: ViewState) {
        self.pending_delete = None;
        self.state = state;
    }

    fn fail(&mut self, error: &CatalogError) {
        tracing::warn!(error = %error, "Catalog operation failed");
        self.set_state(ViewState::Error(error.user_message().to_string()));
    }

    // ========================================================================
    // Loading
    // ========================================================================

    pub fn begin_load(&mut self) {
        self.set_state(ViewState::Loading);
    }

    /// Apply a list result. A failure keeps the products already shown.
    pub fn finish_load(&mut self, result: CatalogResult<Vec<Product>>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.set_state(ViewState::Idle);
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Clear an error banner
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, ViewState::Error(_)) {
            self.set_state(ViewState::Idle);
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    pub fn open_new(&mut self) -> Result<(), ViewError> {
        if !self.state.is_interactive() {
            return Err(ViewError::Busy);
        }
        self.set_state(ViewState::Editing(EditSession::new_product()));
        Ok(())
    }

    pub fn open_edit(&mut self, id: ProductId) -> Result<(), ViewError> {
        if !self.state.is_interactive() {
            return Err(ViewError::Busy);
        }
        let session = self
            .product(id)
            .map(EditSession::edit)
            .ok_or(ViewError::UnknownProduct(id))?;
        self.set_state(ViewState::Editing(session));
        Ok(())
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.state {
            ViewState::Editing(session) => Some(session),
            _ => None,
        }
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.state, ViewState::Editing(_)) {
            self.set_state(ViewState::Idle);
        }
    }

    /// Close the modal for submission and hand back its contents.
    /// A form missing a required field stays open.
    pub fn submit_edit(&mut self) -> Result<EditSession, ViewError> {
        let missing = match &self.state {
            ViewState::Editing(session) => session.missing_field(),
            _ => return Err(ViewError::NotEditing),
        };
        if let Some(field) = missing {
            return Err(ViewError::MissingField(field));
        }

        match std::mem::replace(&mut self.state, ViewState::Loading) {
            ViewState::Editing(mut session) => {
                session.error = None;
                self.submitted = Some(session.clone());
                Ok(session)
            }
            _ => Err(ViewError::NotEditing),
        }
    }

    /// Apply a save result: replace the record in place, or append it.
    /// On failure the submitted form is reopened with the error message.
    pub fn finish_save(&mut self, result: CatalogResult<Product>) {
        let submitted = self.submitted.take();
        match result {
            Ok(saved) => {
                match self.products.iter_mut().find(|p| p.id == saved.id) {
                    Some(existing) => *existing = saved,
                    None => self.products.push(saved),
                }
                self.set_state(ViewState::Idle);
            }
            Err(e) => match submitted {
                Some(mut session) => {
                    tracing::warn!(error = %e, "Saving product failed");
                    session.error = Some(e.user_message().to_string());
                    self.set_state(ViewState::Editing(session));
                }
                None => self.fail(&e),
            },
        }
    }

    // ========================================================================
    // Deleting
    // ========================================================================

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, id: ProductId) -> Result<(), ViewError> {
        if !self.state.is_interactive() {
            return Err(ViewError::Busy);
        }
        if self.product(id).is_none() {
            return Err(ViewError::UnknownProduct(id));
        }
        self.set_state(ViewState::Idle);
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the confirmation and start deleting
    pub fn confirm_delete(&mut self) -> Option<ProductId> {
        let id = self.pending_delete.take()?;
        self.set_state(ViewState::Loading);
        Some(id)
    }

    pub fn finish_delete(&mut self, id: ProductId, result: CatalogResult<bool>) {
        match result {
            Ok(_) => {
                self.products.retain(|p| p.id != id);
                self.set_state(ViewState::Idle);
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Product count for each of the fixed categories
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|category| {
                let count = self
                    .products
                    .iter()
                    .filter(|p| p.category == *category)
                    .count();
                (*category, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, name: &str, category: Category) -> Product {
        Product::from_form(id, &ProductForm::new(name, 10.0).category(category))
    }

    fn loaded() -> CatalogView {
        let mut view = CatalogView::new();
        view.finish_load(Ok(vec![
            product(1, "Prato", Category::MainCourse),
            product(2, "Suco", Category::Drinks),
        ]));
        view
    }

    #[test]
    fn test_starts_loading() {
        let view = CatalogView::new();
        assert!(view.state().is_loading());
        assert!(view.products().is_empty());
    }

    #[test]
    fn test_load_failure_keeps_products() {
        let mut view = loaded();
        view.begin_load();
        view.finish_load(Err(CatalogError::Fetch("down".to_string())));

        assert_eq!(
            view.state().error(),
            Some(CatalogError::Fetch(String::new()).user_message())
        );
        assert_eq!(view.products().len(), 2);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut view = loaded();
        view.open_edit(1).unwrap();
        view.session_mut().unwrap().form_mut().name = "Prato do Dia".to_string();

        let session = view.submit_edit().unwrap();
        assert!(view.state().is_loading());
        assert_eq!(session.draft.id(), Some(1));

        let saved = Product::from_form(1, session.form());
        view.finish_save(Ok(saved));

        assert_eq!(view.state(), &ViewState::Idle);
        assert_eq!(view.products()[0].name, "Prato do Dia");
        assert_eq!(view.products().len(), 2);
    }

    #[test]
    fn test_new_product_appends() {
        let mut view = loaded();
        view.open_new().unwrap();
        view.session_mut().unwrap().form_mut().name = "Pudim".to_string();
        let session = view.submit_edit().unwrap();
        assert!(session.is_new());

        view.finish_save(Ok(Product::from_form(3, session.form())));
        assert_eq!(view.products().last().unwrap().id, 3);
    }

    #[test]
    fn test_submit_requires_name() {
        let mut view = loaded();
        view.open_new().unwrap();

        assert_eq!(view.submit_edit(), Err(ViewError::MissingField("name")));
        assert!(matches!(view.state(), ViewState::Editing(_)));
    }

    #[test]
    fn test_save_failure_reopens_form() {
        let mut view = loaded();
        view.open_edit(2).unwrap();
        view.session_mut().unwrap().form_mut().name = "Suco de Caju".to_string();
        view.submit_edit().unwrap();
        view.finish_save(Err(CatalogError::Save("HTTP 503".to_string())));

        let session = view.session_mut().expect("form should stay open");
        assert_eq!(session.form().name, "Suco de Caju");
        assert_eq!(
            session.error.as_deref(),
            Some(CatalogError::Save(String::new()).user_message())
        );
        assert_eq!(view.products()[1].name, "Suco");

        // A retry starts without the stale message
        let retry = view.submit_edit().unwrap();
        assert_eq!(retry.error, None);
        view.finish_save(Ok(Product::from_form(2, retry.form())));
        assert_eq!(view.state(), &ViewState::Idle);
        assert_eq!(view.products()[1].name, "Suco de Caju");
    }

    #[test]
    fn test_save_failure_without_submission_shows_error() {
        let mut view = loaded();
        view.finish_save(Err(CatalogError::Save("500".to_string())));
        assert!(view.state().error().is_some());
    }

    #[test]
    fn test_busy_rejects_new_work() {
        let mut view = CatalogView::new();
        assert_eq!(view.open_new(), Err(ViewError::Busy));
        assert_eq!(view.request_delete(1), Err(ViewError::Busy));
    }

    #[test]
    fn test_unknown_product() {
        let mut view = loaded();
        assert_eq!(view.open_edit(9), Err(ViewError::UnknownProduct(9)));
        assert_eq!(view.request_delete(9), Err(ViewError::UnknownProduct(9)));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut view = loaded();
        assert_eq!(view.confirm_delete(), None);

        view.request_delete(1).unwrap();
        assert_eq!(view.pending_delete(), Some(1));
        view.cancel_delete();
        assert_eq!(view.confirm_delete(), None);
        assert_eq!(view.products().len(), 2);

        view.request_delete(1).unwrap();
        let id = view.confirm_delete().unwrap();
        assert!(view.state().is_loading());
        assert_eq!(view.pending_delete(), None);

        view.finish_delete(id, Ok(true));
        assert_eq!(view.products().len(), 1);
        assert_eq!(view.products()[0].id, 2);
    }

    #[test]
    fn test_pending_delete_cleared_by_other_transitions() {
        let mut view = loaded();
        view.request_delete(2).unwrap();
        view.open_edit(1).unwrap();
        assert_eq!(view.pending_delete(), None);
    }

    #[test]
    fn test_delete_failure_keeps_product() {
        let mut view = loaded();
        view.request_delete(2).unwrap();
        let id = view.confirm_delete().unwrap();
        view.finish_delete(id, Err(CatalogError::Delete("timeout".to_string())));

        assert!(view.state().error().is_some());
        assert!(view.product(2).is_some());

        view.dismiss_error();
        assert_eq!(view.state(), &ViewState::Idle);
    }

    #[test]
    fn test_category_counts() {
        let view = loaded();
        assert_eq!(
            view.category_counts(),
            vec![
                (Category::MainCourse, 1),
                (Category::Drinks, 1),
                (Category::Desserts, 0)
            ]
        );
    }
}
