use crate::User;

#[test]
fn given_exact_credentials_when_matches_then_true() {
    let user = User::new("admin", "123");
    assert!(user.matches("admin", "123"));
}

#[test]
fn given_different_case_when_matches_then_false() {
    let user = User::new("admin", "123");
    assert!(!user.matches("Admin", "123"));
    assert!(!user.matches("admin", "1234"));
}

#[test]
fn given_seed_when_listed_then_admin_and_cliente_in_order() {
    let seed = User::seed();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0], User::new("admin", "123"));
    assert_eq!(seed[1], User::new("cliente", "abc"));
}

#[test]
fn given_user_when_debug_formatted_then_password_is_redacted() {
    let rendered = format!("{:?}", User::new("admin", "s3cret"));
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("s3cret"));
}

#[test]
fn given_user_when_serialized_then_uses_backing_file_field_names() {
    let json = serde_json::to_value(User::new("admin", "123")).unwrap();
    assert_eq!(json, serde_json::json!({"username": "admin", "password": "123"}));
}
