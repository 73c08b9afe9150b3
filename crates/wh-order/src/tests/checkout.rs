use super::{cart_of, item};
use crate::params::{CART_KEY, PAYMENT_METHOD_KEY, TOTAL_KEY};
use crate::{Browsing, Checkout, CheckoutAction, Navigation, OrderError, TransitionParams};

use googletest::prelude::*;
use wh_core::{NoticeLevel, PaymentMethod};

fn checkout_for(prices: &[&str]) -> Checkout {
    let mut browsing = Browsing::new();
    for item in cart_of(prices).items() {
        browsing.add_item(item.clone());
    }
    match browsing.checkout().unwrap() {
        Navigation::ToCheckout(params) => Checkout::from_params(&params),
        other => panic!("expected checkout navigation, got {other:?}"),
    }
}

#[test]
fn given_unparseable_cart_when_opened_then_only_back_to_menu_and_no_total() {
    // Given
    let params = TransitionParams::new()
        .with(CART_KEY, "not a cart")
        .with(TOTAL_KEY, "99.00");

    // When
    let checkout = Checkout::from_params(&params);

    // Then
    assert_that!(checkout.is_available(), eq(false));
    assert_eq!(checkout.total(), None);
    assert_eq!(checkout.actions(), vec![CheckoutAction::BackToMenu]);
    let notice = checkout.notice().unwrap();
    assert_that!(notice.level, eq(NoticeLevel::Error));
    assert_eq!(checkout.back_to_menu(), Navigation::ToMenu);
}

#[test]
fn given_empty_cart_when_opened_then_unavailable_without_notice() {
    let params = TransitionParams::new().with(CART_KEY, "[]");

    let checkout = Checkout::from_params(&params);

    assert_that!(checkout.is_available(), eq(false));
    assert_eq!(checkout.notice(), None);
    assert_eq!(checkout.actions(), vec![CheckoutAction::BackToMenu]);
}

#[test]
fn given_unavailable_checkout_when_selecting_then_rejected() {
    let mut checkout = Checkout::from_params(&TransitionParams::new());

    let result = checkout.select(PaymentMethod::Pix);

    assert!(matches!(result, Err(OrderError::CheckoutUnavailable { .. })));
    assert_eq!(checkout.selected(), None);
}

#[test]
fn given_inflated_incoming_total_when_opened_then_total_recomputed() {
    let params = TransitionParams::new()
        .with(CART_KEY, crate::Cart::from(vec![item(1, "10.00")]).to_json().unwrap())
        .with(TOTAL_KEY, "1000.00");

    let checkout = Checkout::from_params(&params);

    assert_that!(checkout.total().unwrap().to_display_string(), eq("10.00"));
}

#[test]
fn given_no_method_when_finalizing_then_rejected() {
    let checkout = checkout_for(&["10.00"]);

    assert_that!(checkout.can_finalize(), eq(false));
    let result = checkout.finalize();

    assert!(matches!(result, Err(OrderError::NoPaymentMethod { .. })));
    assert!(!checkout.actions().contains(&CheckoutAction::Finalize));
}

#[test]
fn given_reselection_when_finalizing_then_last_choice_wins() {
    // Given
    let mut checkout = checkout_for(&["10.00", "5.50"]);
    checkout.select(PaymentMethod::Pix).unwrap();
    checkout.select(PaymentMethod::CreditCard).unwrap();

    // When
    let navigation = checkout.finalize().unwrap();

    // Then
    assert_eq!(checkout.selected(), Some(PaymentMethod::CreditCard));
    let params = navigation.params().unwrap();
    assert_eq!(params.get(PAYMENT_METHOD_KEY), Some("Cartão Crédito"));
    assert_eq!(params.get(TOTAL_KEY), Some("15.50"));
    assert!(matches!(navigation, Navigation::ToReceipt(_)));
}

#[test]
fn given_available_checkout_when_listing_actions_then_all_methods_offered() {
    let mut checkout = checkout_for(&["1.00"]);

    let before = checkout.actions();
    checkout.select(PaymentMethod::DebitCard).unwrap();
    let after = checkout.actions();

    assert_that!(before.len(), eq(4));
    assert!(before.contains(&CheckoutAction::SelectPayment(PaymentMethod::Pix)));
    assert!(after.contains(&CheckoutAction::Finalize));
    assert_eq!(after.last(), Some(&CheckoutAction::BackToMenu));
}
