//! # Menu Commands
//!
//! Commands for the category bar and the menu grid.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User taps "汤品" on the category bar                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  select_category("汤品")                                                 │
//! │       │   CategoryFilter::from_label ──► ViewState::select              │
//! │       ▼                                                                 │
//! │  Catalog::filter(selected) ──► Vec<MenuCardDto> (catalog order)         │
//! │                                                                         │
//! │  "全部" shows every dish; a label naming no section shows none.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use weidao_core::{effective_image_or, Catalog, Category, CategoryFilter, MenuEntry, MenuItemId, Money};

use crate::state::{ConfigState, ViewState};

/// Menu card DTO for the grid.
///
/// `image` is already resolved against the configured placeholder.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuCardDto {
    pub id: MenuItemId,
    pub name: String,
    pub name_zh: String,
    pub price: Money,
    pub category: Category,
    pub image: String,
    pub description: String,
}

impl MenuCardDto {
    fn from_entry(entry: &MenuEntry, config: &ConfigState) -> Self {
        MenuCardDto {
            id: entry.id,
            name: entry.name.clone(),
            name_zh: entry.name_zh.clone(),
            price: entry.price,
            category: entry.category,
            image: effective_image_or(entry.image.as_deref(), &config.placeholder_image)
                .to_string(),
            description: entry.description.clone(),
        }
    }
}

/// The menu grid as currently filtered.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub selected: String,
    pub items: Vec<MenuCardDto>,
}

/// One button on the category bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub label: String,
    pub selected: bool,
}

/// Lists the dishes passing the current filter.
pub fn list_menu(catalog: &Catalog, view: &ViewState, config: &ConfigState) -> MenuResponse {
    let selected = view.selected();
    debug!(category = %selected.label(), "list_menu command");

    MenuResponse {
        selected: selected.label().to_string(),
        items: catalog
            .filter(selected)
            .into_iter()
            .map(|entry| MenuCardDto::from_entry(entry, config))
            .collect(),
    }
}

/// Selects a category bar label and returns the refreshed grid.
pub fn select_category(
    catalog: &Catalog,
    view: &mut ViewState,
    config: &ConfigState,
    label: &str,
) -> MenuResponse {
    debug!(label = %label, "select_category command");

    view.select(CategoryFilter::from_label(label));
    list_menu(catalog, view, config)
}

/// The category bar, with the current selection marked.
pub fn get_categories(catalog: &Catalog, view: &ViewState) -> Vec<CategoryOption> {
    let selected = view.selected().label();

    catalog
        .filter_options()
        .into_iter()
        .map(|label| CategoryOption {
            label: label.to_string(),
            selected: label == selected,
        })
        .collect()
}
