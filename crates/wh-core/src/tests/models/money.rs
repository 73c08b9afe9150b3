use crate::{MenuItem, Money};

use std::str::FromStr;

use googletest::prelude::*;
use rust_decimal::Decimal;

fn item(id: i64, price: &str) -> MenuItem {
    MenuItem::new(id, format!("item-{id}"), Decimal::from_str(price).unwrap())
}

#[test]
fn given_two_items_when_totaled_then_exact_sum() {
    let items = [item(1, "10.00"), item(2, "5.50")];

    let total = Money::total_of(&items);

    assert_that!(total.to_display_string(), eq("15.50"));
}

#[test]
fn given_no_items_when_totaled_then_zero() {
    let total = Money::total_of(std::iter::empty::<&MenuItem>());

    assert_eq!(total, Money::ZERO);
    assert_that!(total.to_display_string(), eq("0.00"));
}

#[test]
fn given_float_prone_prices_when_totaled_then_no_drift() {
    let items = [item(1, "0.1"), item(2, "0.2")];

    assert_that!(Money::total_of(&items).to_display_string(), eq("0.30"));
}

#[test]
fn given_midpoint_when_displayed_then_rounds_away_from_zero() {
    let money = Money::from_str("2.345").unwrap();
    assert_that!(money.to_string(), eq("2.35"));
}

#[test]
fn given_garbage_when_parsed_then_error() {
    assert_that!(Money::from_str("abc"), err(anything()));
    assert_that!(Money::from_str(""), err(anything()));
}

#[test]
fn given_padded_decimal_when_parsed_then_ok() {
    let money = Money::from_str(" 15.5 ").unwrap();
    assert_that!(money.to_display_string(), eq("15.50"));
}

#[test]
fn given_prices_summing_past_decimal_max_when_checked_total_then_none() {
    let items = [item(1, "70000000000000000000000000000"), item(2, "70000000000000000000000000000")];

    assert_eq!(Money::checked_total_of(&items), None);
}

#[test]
fn given_prices_summing_past_decimal_max_when_totaled_then_saturates() {
    let items = [item(1, "70000000000000000000000000000"), item(2, "70000000000000000000000000000")];

    assert_eq!(Money::total_of(&items).amount(), Decimal::MAX);
}

#[test]
fn given_ordinary_prices_when_checked_total_then_same_as_total() {
    let items = [item(1, "10.00"), item(2, "5.50")];

    assert_eq!(Money::checked_total_of(&items), Some(Money::total_of(&items)));
}
