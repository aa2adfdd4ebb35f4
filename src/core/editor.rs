//! Pure catalog transformations. Every operation takes the current catalog
//! by reference and returns a fresh one, so the presentation layer can keep
//! a working copy apart from the committed original and diff or discard it.
//!
//! Sort-order policy, kept as observed in production: add assigns the next
//! slot, deletion leaves gaps, and only the move operations renumber a list
//! back to a dense 1..N.

use crate::domain::model::{
    Catalog, Category, CategoryPatch, DetailsPatch, MoveDirection, Service, ServicePatch,
};
use crate::utils::ids;

const DEFAULT_CATEGORY_NAME: &str = "New Category";
const DEFAULT_SERVICE_NAME: &str = "New Service";

/// Appends an empty category with a fresh id at the end of the menu.
pub fn add_category(catalog: &Catalog) -> Catalog {
    let mut next = catalog.clone();
    let sort_order = next.categories.len() as u32 + 1;
    next.categories.push(Category {
        id: ids::category_id(),
        name: DEFAULT_CATEGORY_NAME.to_string(),
        sort_order,
        is_active: true,
        services: Vec::new(),
    });
    next
}

/// Removes the category and everything in it. Absent id is a no-op; the
/// remaining sort orders are not renumbered.
pub fn delete_category(catalog: &Catalog, category_id: &str) -> Catalog {
    let mut next = catalog.clone();
    next.categories.retain(|c| c.id != category_id);
    next
}

/// Merges the supplied fields into the matching category. Absent id is a
/// no-op.
pub fn update_category(catalog: &Catalog, category_id: &str, patch: &CategoryPatch) -> Catalog {
    let mut next = catalog.clone();
    if let Some(category) = next.categories.iter_mut().find(|c| c.id == category_id) {
        if let Some(name) = &patch.name {
            category.name = name.clone();
        }
        if let Some(is_active) = patch.is_active {
            category.is_active = is_active;
        }
    }
    next
}

/// Appends a blank service to the named category. No-op if the category id
/// is absent.
pub fn add_service(catalog: &Catalog, category_id: &str) -> Catalog {
    let mut next = catalog.clone();
    if let Some(category) = next.categories.iter_mut().find(|c| c.id == category_id) {
        let sort_order = category.services.len() as u32 + 1;
        category.services.push(Service {
            id: ids::service_id(),
            name: DEFAULT_SERVICE_NAME.to_string(),
            price: 0.0,
            description: None,
            duration_mins: None,
            sort_order,
            is_active: true,
        });
    }
    next
}

/// Merges the supplied fields into the matching service. No-op if either id
/// is absent. Price values are expected to have passed through
/// [`parse_price`] already.
pub fn update_service(
    catalog: &Catalog,
    category_id: &str,
    service_id: &str,
    patch: &ServicePatch,
) -> Catalog {
    let mut next = catalog.clone();
    let Some(category) = next.categories.iter_mut().find(|c| c.id == category_id) else {
        return next;
    };
    if let Some(service) = category.services.iter_mut().find(|s| s.id == service_id) {
        if let Some(name) = &patch.name {
            service.name = name.clone();
        }
        if let Some(price) = patch.price {
            service.price = price;
        }
        if let Some(description) = &patch.description {
            service.description = Some(description.clone());
        }
        if let Some(duration_mins) = patch.duration_mins {
            service.duration_mins = Some(duration_mins);
        }
        if let Some(is_active) = patch.is_active {
            service.is_active = is_active;
        }
    }
    next
}

/// Removes the matching service. Same deletion policy as categories: absent
/// ids are a no-op and nothing is renumbered.
pub fn delete_service(catalog: &Catalog, category_id: &str, service_id: &str) -> Catalog {
    let mut next = catalog.clone();
    if let Some(category) = next.categories.iter_mut().find(|c| c.id == category_id) {
        category.services.retain(|s| s.id != service_id);
    }
    next
}

/// Updates the studio-level display metadata.
pub fn update_details(catalog: &Catalog, patch: &DetailsPatch) -> Catalog {
    let mut next = catalog.clone();
    if let Some(currency_symbol) = &patch.currency_symbol {
        next.currency_symbol = currency_symbol.clone();
    }
    if let Some(location) = &patch.location {
        next.location = location.clone();
    }
    if let Some(phone) = &patch.phone {
        next.phone = phone.clone();
    }
    if let Some(note) = &patch.note {
        next.note = note.clone();
    }
    next
}

/// Swaps the category at `index` with its neighbor, then renumbers every
/// category to a dense 1..N by position. A move at the boundary (first with
/// `Up`, last with `Down`) returns the input unchanged.
pub fn move_category(catalog: &Catalog, index: usize, direction: MoveDirection) -> Catalog {
    let mut next = catalog.clone();
    let Some(target) = neighbor_index(index, direction, next.categories.len()) else {
        return next;
    };
    next.categories.swap(index, target);
    renumber_categories(&mut next.categories);
    next
}

/// Same swap-and-renumber contract, scoped to one category's services.
/// No-op if the category id is absent or the neighbor is out of bounds.
pub fn move_service(
    catalog: &Catalog,
    category_id: &str,
    index: usize,
    direction: MoveDirection,
) -> Catalog {
    let mut next = catalog.clone();
    if let Some(category) = next.categories.iter_mut().find(|c| c.id == category_id) {
        if let Some(target) = neighbor_index(index, direction, category.services.len()) {
            category.services.swap(index, target);
            renumber_services(&mut category.services);
        }
    }
    next
}

/// Price parsing for raw editor input: anything that is not a finite
/// non-negative number coerces to 0.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

fn neighbor_index(index: usize, direction: MoveDirection, len: usize) -> Option<usize> {
    if index >= len {
        return None;
    }
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => index + 1,
    };
    if target >= len {
        return None;
    }
    Some(target)
}

fn renumber_categories(categories: &mut [Category]) {
    for (position, category) in categories.iter_mut().enumerate() {
        category.sort_order = position as u32 + 1;
    }
}

fn renumber_services(services: &mut [Service]) {
    for (position, service) in services.iter_mut().enumerate() {
        service.sort_order = position as u32 + 1;
    }
}
