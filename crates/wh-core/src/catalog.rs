//! Static, read-only menu catalog.

use crate::{CoreError, MenuCategory, MenuItem, Result as CoreErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const EMBEDDED_MENU: &str = include_str!("../assets/menu.json");

/// The menu: categories in display order, each holding its items.
///
/// Item ids are unique across the whole catalog and prices are never
/// negative; both are checked when the catalog is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    categories: Vec<MenuCategory>,
}

impl MenuCatalog {
    /// Parse and check a catalog document.
    #[track_caller]
    pub fn from_json(contents: &str) -> CoreErrorResult<Self> {
        let catalog: MenuCatalog = serde_json::from_str(contents)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// The menu bundled with the application.
    pub fn embedded() -> CoreErrorResult<Self> {
        Self::from_json(EMBEDDED_MENU)
    }

    pub fn from_categories(categories: Vec<MenuCategory>) -> CoreErrorResult<Self> {
        let catalog = Self { categories };
        catalog.check()?;
        Ok(catalog)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn find(&self, id: i64) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    #[track_caller]
    fn check(&self) -> CoreErrorResult<()> {
        let mut seen = HashSet::new();
        for item in self.items() {
            if !seen.insert(item.id) {
                return Err(CoreError::DuplicateMenuItem {
                    id: item.id,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if !item.has_valid_price() {
                return Err(CoreError::NegativePrice {
                    id: item.id,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
        Ok(())
    }
}
