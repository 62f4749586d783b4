//! # Catalog
//!
//! The fixed, read-only set of orderable dishes.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process start                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::reference() / Catalog::new(entries)                           │
//! │       │   validates every entry, rejects duplicate ids                  │
//! │       ▼                                                                 │
//! │  immutable for the rest of the session                                  │
//! │       │                                                                 │
//! │       ├──► filter(label)  ──► menu grid                                 │
//! │       └──► get(id)        ──► Cart::add (first add of a dish only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, CategoryFilter, MenuEntry, MenuItemId};
use crate::validation::validate_menu_entry;
use crate::ALL_CATEGORIES_LABEL;

/// Immutable list of menu entries in display order.
///
/// Entries cannot be added, removed or edited once the catalog exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    /// Builds a catalog, validating every entry.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if an entry breaks a field rule
    /// - [`CoreError::DuplicateMenuItem`] if two entries share an id
    pub fn new(entries: Vec<MenuEntry>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            validate_menu_entry(entry)?;

            if !seen.insert(entry.id) {
                return Err(CoreError::DuplicateMenuItem(entry.id));
            }
        }

        Ok(Catalog { entries })
    }

    /// The restaurant's built-in eight-dish menu.
    pub fn reference() -> Self {
        Catalog {
            entries: reference_entries(),
        }
    }

    /// Every entry in catalog order.
    pub fn list_all(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Entries passing `filter`, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&MenuEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry.category))
            .collect()
    }

    /// Entries for a category bar label.
    ///
    /// "全部" returns everything; a label naming no section returns nothing.
    ///
    /// ## Example
    /// ```rust
    /// use weidao_core::Catalog;
    ///
    /// let catalog = Catalog::reference();
    /// assert_eq!(catalog.filter_by_label("全部").len(), 8);
    /// assert_eq!(catalog.filter_by_label("汤品").len(), 1);
    /// assert!(catalog.filter_by_label("甜品").is_empty());
    /// ```
    pub fn filter_by_label(&self, label: &str) -> Vec<&MenuEntry> {
        self.filter(&CategoryFilter::from_label(label))
    }

    /// Looks an entry up by id.
    pub fn get(&self, id: MenuItemId) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: MenuItemId) -> CoreResult<&MenuEntry> {
        self.get(id).ok_or(CoreError::MenuItemNotFound(id))
    }

    /// Labels for the category bar: the "全部" sentinel, then every section.
    pub fn filter_options(&self) -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES_LABEL)
            .chain(Category::ALL.iter().map(Category::label))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::reference()
    }
}

// =============================================================================
// Reference Menu
// =============================================================================

/// (id, name, name_zh, price, category, image, description)
type DishRow = (
    u32,
    &'static str,
    &'static str,
    i64,
    Category,
    &'static str,
    &'static str,
);

const REFERENCE_DISHES: &[DishRow] = &[
    (
        1,
        "Kung Pao Chicken",
        "宫保鸡丁",
        68,
        Category::MainCourse,
        "/kung-pao-chicken.png",
        "经典川菜，鸡肉配花生米",
    ),
    (
        2,
        "Mapo Tofu",
        "麻婆豆腐",
        48,
        Category::MainCourse,
        "/mapo-tofu-dish.jpg",
        "麻辣豆腐，香气扑鼻",
    ),
    (
        3,
        "Sweet and Sour Pork",
        "糖醋里脊",
        58,
        Category::MainCourse,
        "/sweet-sour-pork.jpg",
        "酸甜可口，老少皆宜",
    ),
    (
        4,
        "Fried Rice",
        "扬州炒饭",
        38,
        Category::Staple,
        "/yangzhou-fried-rice.jpg",
        "粒粒分明的炒饭",
    ),
    (
        5,
        "Hot and Sour Soup",
        "酸辣汤",
        28,
        Category::Soup,
        "/hot-sour-soup.jpg",
        "开胃暖心的汤品",
    ),
    (
        6,
        "Spring Rolls",
        "春卷",
        32,
        Category::Snack,
        "/crispy-spring-rolls.jpg",
        "酥脆可口的春卷",
    ),
    (
        7,
        "Dumplings",
        "水饺",
        36,
        Category::Snack,
        "/chinese-dumplings.jpg",
        "手工现包饺子",
    ),
    (
        8,
        "Steamed Fish",
        "清蒸鲈鱼",
        88,
        Category::MainCourse,
        "/steamed-fish-chinese.jpg",
        "新鲜鲈鱼清蒸",
    ),
];

fn reference_entries() -> Vec<MenuEntry> {
    REFERENCE_DISHES
        .iter()
        .map(
            |&(id, name, name_zh, price, category, image, description)| MenuEntry {
                id: MenuItemId::new(id),
                name: name.to_string(),
                name_zh: name_zh.to_string(),
                price: Money::from_units(price),
                category,
                image: Some(image.to_string()),
                description: description.to_string(),
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn names(entries: &[&MenuEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    fn dish(id: u32, name: &str, price: i64) -> MenuEntry {
        MenuEntry {
            id: MenuItemId::new(id),
            name: name.to_string(),
            name_zh: "菜".to_string(),
            price: Money::from_units(price),
            category: Category::Snack,
            image: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_reference_catalog_passes_validation() {
        let catalog = Catalog::new(reference_entries()).unwrap();
        assert_eq!(catalog, Catalog::reference());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let catalog = Catalog::reference();
        let all = catalog.filter_by_label("全部");

        assert_eq!(all.len(), 8);
        let ids: Vec<u32> = all.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            all.iter().map(|e| e.id).collect::<Vec<_>>(),
            catalog.list_all().iter().map(|e| e.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_filter_main_course_preserves_catalog_order() {
        let catalog = Catalog::reference();
        let mains = catalog.filter_by_label("主菜");

        assert_eq!(
            names(&mains),
            vec![
                "Kung Pao Chicken",
                "Mapo Tofu",
                "Sweet and Sour Pork",
                "Steamed Fish",
            ]
        );
        assert!(mains.iter().all(|e| e.category == Category::MainCourse));
    }

    #[test]
    fn test_filter_snack_and_soup() {
        let catalog = Catalog::reference();

        assert_eq!(
            names(&catalog.filter_by_label("小食")),
            vec!["Spring Rolls", "Dumplings"]
        );
        assert_eq!(
            names(&catalog.filter(&CategoryFilter::Only(Category::Soup))),
            vec!["Hot and Sour Soup"]
        );
    }

    #[test]
    fn test_filter_unknown_label_is_empty() {
        let catalog = Catalog::reference();
        assert!(catalog.filter_by_label("甜品").is_empty());
        assert!(catalog.filter_by_label("").is_empty());
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::reference();

        let fish = catalog.get(MenuItemId::new(8)).unwrap();
        assert_eq!(fish.name_zh, "清蒸鲈鱼");
        assert_eq!(fish.price.units(), 88);

        assert!(catalog.get(MenuItemId::new(99)).is_none());
        assert!(matches!(
            catalog.require(MenuItemId::new(99)),
            Err(CoreError::MenuItemNotFound(id)) if id.get() == 99
        ));
    }

    #[test]
    fn test_filter_options() {
        let catalog = Catalog::reference();
        assert_eq!(
            catalog.filter_options(),
            vec!["全部", "主菜", "主食", "汤品", "小食"]
        );
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![dish(1, "A", 10), dish(1, "B", 20)]);
        assert!(matches!(result, Err(CoreError::DuplicateMenuItem(id)) if id.get() == 1));
    }

    #[test]
    fn test_new_rejects_invalid_entry() {
        let result = Catalog::new(vec![dish(1, "A", -10)]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_oversized_price() {
        let result = Catalog::new(vec![dish(1, "A", i64::MAX / 2 + 1)]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::TooLarge { .. }))
        ));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.filter_by_label("全部").is_empty());
    }
}
