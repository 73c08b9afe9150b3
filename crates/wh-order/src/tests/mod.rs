mod checkout;
mod payload;

use crate::Cart;

use std::str::FromStr;

use wh_core::{Decimal, MenuItem};

pub(crate) fn item(id: i64, price: &str) -> MenuItem {
    MenuItem::new(id, format!("item-{id}"), Decimal::from_str(price).unwrap())
}

pub(crate) fn cart_of(prices: &[&str]) -> Cart {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| item(i as i64 + 1, price))
        .collect()
}
