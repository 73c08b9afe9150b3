use super::cart_of;
use crate::params::{CART_KEY, PAYMENT_METHOD_KEY, TOTAL_KEY};
use crate::{Cart, CheckoutPayload, ReceiptMethod, ReceiptPayload, TransitionParams};

use std::str::FromStr;

use googletest::prelude::*;
use wh_core::{Money, NoticeLevel, PaymentMethod};

#[test]
fn given_checkout_payload_when_encoded_and_decoded_then_cart_equal() {
    let payload = CheckoutPayload::from_cart(cart_of(&["10.00", "5.50"]));

    let decoded = CheckoutPayload::decode(&payload.encode().unwrap());

    assert_eq!(decoded.value.cart, payload.cart);
    assert_eq!(decoded.value.declared_total, Some(Money::from_str("15.50").unwrap()));
    assert_eq!(decoded.notice, None);
}

#[test]
fn given_unparseable_cart_when_decoded_then_empty_with_error_notice() {
    let params = TransitionParams::new().with(CART_KEY, "{not json");

    let decoded = CheckoutPayload::decode(&params);

    assert_that!(decoded.value.cart.is_empty(), eq(true));
    let notice = decoded.notice.unwrap();
    assert_that!(notice.level, eq(NoticeLevel::Error));
}

#[test]
fn given_no_params_when_decoded_then_empty_without_notice() {
    let decoded = CheckoutPayload::decode(&TransitionParams::new());

    assert_that!(decoded.value.cart.is_empty(), eq(true));
    assert_eq!(decoded.notice, None);
    assert_eq!(decoded.value.declared_total, None);
}

#[test]
fn given_receipt_payload_when_encoded_then_all_three_keys() {
    let payload = ReceiptPayload {
        cart: cart_of(&["3.25"]),
        total: Money::from_str("3.25").unwrap(),
        method: ReceiptMethod::Method(PaymentMethod::DebitCard),
    };

    let params = payload.encode().unwrap();

    assert_eq!(params.get(TOTAL_KEY), Some("3.25"));
    assert_eq!(params.get(PAYMENT_METHOD_KEY), Some("Cartão Débito"));
    assert_eq!(ReceiptPayload::decode(&params).value, payload);
}

#[test]
fn given_missing_total_and_method_when_receipt_decoded_then_defaults() {
    let params = TransitionParams::new().with(CART_KEY, "[]");

    let decoded = ReceiptPayload::decode(&params).value;

    assert_that!(decoded.total.to_display_string(), eq("0.00"));
    assert_eq!(decoded.method, ReceiptMethod::NotInformed);
    assert_that!(decoded.method.as_str(), eq("Not informed"));
}

#[test]
fn given_garbage_total_when_receipt_decoded_then_zero() {
    let params = TransitionParams::new().with(TOTAL_KEY, "quinze");

    let decoded = ReceiptPayload::decode(&params).value;

    assert_eq!(decoded.total, Money::ZERO);
}

#[test]
fn given_total_when_receipt_decoded_then_taken_as_given() {
    // The receipt trusts the payment screen's total, even if the cart disagrees
    let params = TransitionParams::new()
        .with(CART_KEY, Cart::new().to_json().unwrap())
        .with(TOTAL_KEY, "42.00");

    let decoded = ReceiptPayload::decode(&params).value;

    assert_that!(decoded.total.to_display_string(), eq("42.00"));
}

#[test]
fn given_unknown_method_when_receipt_decoded_then_shown_verbatim() {
    let params = TransitionParams::new().with(PAYMENT_METHOD_KEY, "Vale Refeição");

    let decoded = ReceiptPayload::decode(&params).value;

    assert_eq!(decoded.method, ReceiptMethod::Unrecognized("Vale Refeição".to_string()));
    assert_that!(decoded.method.to_string(), eq("Vale Refeição"));
}

#[test]
fn given_cart_total_beyond_decimal_range_when_decoded_then_empty_with_error_notice() {
    // Given: Each price is a valid decimal, their sum is not
    let params = TransitionParams::new().with(
        CART_KEY,
        r#"[{"id":1,"name":"a","price":7e28},{"id":2,"name":"b","price":7e28}]"#,
    );

    // When
    let decoded = CheckoutPayload::decode(&params);

    // Then
    assert_that!(decoded.value.cart.is_empty(), eq(true));
    assert_that!(decoded.notice.unwrap().level, eq(NoticeLevel::Error));
}

#[test]
fn given_cart_total_beyond_decimal_range_when_checkout_opened_then_unavailable() {
    let params = TransitionParams::new().with(
        CART_KEY,
        r#"[{"id":1,"name":"a","price":7e28},{"id":2,"name":"b","price":7e28}]"#,
    );

    let checkout = crate::Checkout::from_params(&params);

    assert_that!(checkout.is_available(), eq(false));
    assert_eq!(checkout.total(), None);
    assert_that!(checkout.finalize(), err(anything()));
}

#[test]
fn given_negative_price_when_receipt_decoded_then_empty_cart_with_notice() {
    let params = TransitionParams::new()
        .with(CART_KEY, r#"[{"id":1,"name":"x","price":-50}]"#)
        .with(TOTAL_KEY, "10.00");

    let decoded = ReceiptPayload::decode(&params);

    assert_that!(decoded.value.cart.is_empty(), eq(true));
    assert!(decoded.notice.is_some());
    assert_that!(decoded.value.total.to_display_string(), eq("10.00"));
}
