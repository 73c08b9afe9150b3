//! The cart: an ordered list of menu items, duplicates allowed.

use crate::{OrderError, Result as OrderResult};

use wh_core::{MenuItem, Money};

/// Line entries in the order they were added.
///
/// Adding the same item twice yields two entries; there is no quantity merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<MenuItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Removes the entry at `index`; later entries shift down.
    /// Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<MenuItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the item prices, recomputed on every call.
    pub fn total(&self) -> Money {
        Money::total_of(&self.items)
    }

    /// JSON array form used in the `cart` navigation parameter.
    pub fn to_json(&self) -> OrderResult<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Parses the `cart` parameter. Rejects items with a negative price and
    /// carts whose total does not fit in a [`Money`].
    pub fn from_json(json: &str) -> OrderResult<Self> {
        let items: Vec<MenuItem> =
            serde_json::from_str(json).map_err(|e| OrderError::invalid_cart(e.to_string()))?;

        if let Some(item) = items.iter().find(|item| !item.has_valid_price()) {
            return Err(OrderError::invalid_cart(format!(
                "item {} has a negative price",
                item.id
            )));
        }
        if Money::checked_total_of(&items).is_none() {
            return Err(OrderError::invalid_cart("total out of range"));
        }

        Ok(Self { items })
    }
}

impl From<Vec<MenuItem>> for Cart {
    fn from(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<MenuItem> for Cart {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
