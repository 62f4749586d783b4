//! # Domain Types
//!
//! Menu types shared by the catalog, the cart and the kiosk.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   MenuEntry     │   │    Category     │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  主菜 MainCourse │   │  All ("全部")    │       │
//! │  │  name / name_zh │   │  主食 Staple     │   │  Only(Category) │       │
//! │  │  price (Money)  │   │  汤品 Soup       │   │  Unmatched(..)  │       │
//! │  │  category       │   │  小食 Snack      │   └─────────────────┘       │
//! │  │  image / desc   │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::{ALL_CATEGORIES_LABEL, PLACEHOLDER_IMAGE};

// =============================================================================
// Menu Item Id
// =============================================================================

/// Identifier of a menu entry, stable for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItemId(u32);

impl MenuItemId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        MenuItemId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        MenuItemId(id)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of menu sections.
///
/// Serialized with the label shown on the category bar, so JSON carries
/// `"主菜"` rather than `"MainCourse"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "主菜")]
    MainCourse,
    #[serde(rename = "主食")]
    Staple,
    #[serde(rename = "汤品")]
    Soup,
    #[serde(rename = "小食")]
    Snack,
}

impl Category {
    /// Every category in category bar order.
    pub const ALL: [Category; 4] = [
        Category::MainCourse,
        Category::Staple,
        Category::Soup,
        Category::Snack,
    ];

    /// Label shown on the category bar and on each menu card badge.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::MainCourse => "主菜",
            Category::Staple => "主食",
            Category::Soup => "汤品",
            Category::Snack => "小食",
        }
    }

    /// Looks a category up by its label. Exact match only.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// What the menu grid is currently restricted to.
///
/// ## Label Mapping
/// ```text
/// "全部"      ──► All
/// "主菜"      ──► Only(MainCourse)
/// "甜品"      ──► Unmatched("甜品")   (no such section: empty grid)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CategoryFilter {
    /// No restriction (the "全部" sentinel).
    #[default]
    All,
    /// A single known section.
    Only(Category),
    /// A label that names no section.
    Unmatched(String),
}

impl CategoryFilter {
    /// Parses a category bar label. Never fails.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            return CategoryFilter::All;
        }

        match Category::from_label(label) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unmatched(label.to_string()),
        }
    }

    /// The label this filter was selected with.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unmatched(label) => label,
        }
    }

    /// Whether an entry of `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Unmatched(_) => false,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

// =============================================================================
// Menu Entry
// =============================================================================

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuEntry {
    /// Unique identifier.
    pub id: MenuItemId,

    /// Display name, e.g. "Kung Pao Chicken".
    pub name: String,

    /// Localized name shown as the card title, e.g. "宫保鸡丁".
    pub name_zh: String,

    /// Unit price in whole yuan.
    pub price: Money,

    pub category: Category,

    /// Opaque image reference. `None` or empty falls back to the placeholder.
    pub image: Option<String>,

    pub description: String,
}

impl MenuEntry {
    /// Image reference to render, substituting the placeholder when the
    /// entry has none.
    ///
    /// ## Example
    /// ```rust
    /// use weidao_core::{Catalog, MenuItemId, PLACEHOLDER_IMAGE};
    ///
    /// let catalog = Catalog::reference();
    /// let mut fish = catalog.get(MenuItemId::new(8)).unwrap().clone();
    /// assert_eq!(fish.effective_image(), "/steamed-fish-chinese.jpg");
    ///
    /// fish.image = Some(String::new());
    /// assert_eq!(fish.effective_image(), PLACEHOLDER_IMAGE);
    /// ```
    pub fn effective_image(&self) -> &str {
        effective_image(self.image.as_deref())
    }
}

/// Resolves an optional image reference against [`PLACEHOLDER_IMAGE`].
pub fn effective_image(image: Option<&str>) -> &str {
    effective_image_or(image, PLACEHOLDER_IMAGE)
}

/// Resolves an optional image reference against a caller-chosen fallback.
pub fn effective_image_or<'a>(image: Option<&'a str>, fallback: &'a str) -> &'a str {
    match image {
        Some(image) if !image.is_empty() => image,
        _ => fallback,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
