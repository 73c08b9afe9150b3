use crate::MenuItem;

use serde::{Deserialize, Serialize};

/// A titled group of menu items, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
