use serde::{Deserialize, Serialize};

/// A purchasable item on the studio menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_mins: Option<u32>,
    pub sort_order: u32,
    pub is_active: bool,
}

/// A named group of services, orderable and toggleable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub sort_order: u32,
    pub is_active: bool,
    pub services: Vec<Service>,
}

/// The full pricing document: studio metadata plus ordered categories.
///
/// This is the shape persisted locally, fetched as the bundled default and
/// produced by the export operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Informational last-modification stamp; never interpreted.
    pub updated_at: String,
    pub currency_symbol: String,
    pub location: String,
    pub phone: String,
    pub note: String,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Active categories in display order, each holding only its active
    /// services in display order. This is the public-menu view; inactive
    /// entries stay in the document for the admin editor.
    pub fn public_view(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.sort_order);
        for category in &mut categories {
            category.services.retain(|s| s.is_active);
            category.services.sort_by_key(|s| s.sort_order);
        }
        categories
    }

    /// Bounded preview of the public menu: the first `max_categories`
    /// categories with at most `max_services` services each.
    pub fn highlights(&self, max_categories: usize, max_services: usize) -> Vec<Category> {
        let mut categories = self.public_view();
        categories.truncate(max_categories);
        for category in &mut categories {
            category.services.truncate(max_services);
        }
        categories
    }
}

/// Partial update for a category; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Partial update for a service; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub duration_mins: Option<u32>,
    pub is_active: Option<bool>,
}

/// Partial update for the studio-level metadata on the catalog.
#[derive(Debug, Clone, Default)]
pub struct DetailsPatch {
    pub currency_symbol: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
}

/// Neighbor to swap with in a move operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Transient save lifecycle surfaced to the presentation layer.
/// `Saved` resets to `Idle` after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

/// Editorial gate state. Not a security boundary: the gate exists so the
/// pricing editor is not stumbled into, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// What a visitor types into the contact form. Kept intact on a failed
/// submission so it can be resent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub message: String,
}
