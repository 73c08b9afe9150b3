use crate::{Cart, CheckoutPayload, Navigation, OrderError, Result as OrderResult};

use log::info;
use wh_core::{MenuCatalog, MenuItem, Money, Notice};

/// Menu screen: builds the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Browsing {
    cart: Cart,
}

impl Browsing {
    /// Starts with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Appends unconditionally.
    pub fn add_item(&mut self, item: MenuItem) {
        self.cart.add(item);
    }

    /// Looks `id` up in the catalog and appends it. An unknown id leaves the
    /// cart untouched and returns a warning notice instead.
    pub fn add_from_catalog(&mut self, catalog: &MenuCatalog, id: i64) -> Notice {
        match catalog.find(id) {
            Some(item) => {
                let notice = Notice::info(
                    "🍣 Added!",
                    format!("{} was added to the cart.", item.name),
                );
                self.add_item(item.clone());
                notice
            }
            None => OrderError::item_not_found(id).notice(),
        }
    }

    pub fn remove_item(&mut self, index: usize) -> Option<MenuItem> {
        self.cart.remove(index)
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn can_checkout(&self) -> bool {
        !self.cart.is_empty()
    }

    /// Serializes `{cart, total}` for the payment screen.
    pub fn checkout(&self) -> OrderResult<Navigation> {
        if self.cart.is_empty() {
            return Err(OrderError::empty_cart());
        }

        let params = CheckoutPayload::from_cart(self.cart.clone()).encode()?;
        info!(
            "Checkout started with {} items, total {}",
            self.cart.len(),
            self.total()
        );
        Ok(Navigation::ToCheckout(params))
    }
}
