use crate::PaymentMethod;

use std::str::FromStr;

#[test]
fn test_payment_method_as_str() {
    assert_eq!(PaymentMethod::Pix.as_str(), "PIX");
    assert_eq!(PaymentMethod::DebitCard.as_str(), "Cartão Débito");
    assert_eq!(PaymentMethod::CreditCard.as_str(), "Cartão Crédito");
}

#[test]
fn test_payment_method_from_str() {
    for method in PaymentMethod::ALL {
        assert_eq!(PaymentMethod::from_str(method.as_str()).unwrap(), method);
    }
    assert!(PaymentMethod::from_str("pix").is_err());
    assert!(PaymentMethod::from_str("Boleto").is_err());
}

#[test]
fn test_payment_method_serializes_as_wire_string() {
    let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
    assert_eq!(json, "\"Cartão Crédito\"");

    let parsed: PaymentMethod = serde_json::from_str("\"Cartão Débito\"").unwrap();
    assert_eq!(parsed, PaymentMethod::DebitCard);
}
