use super::*;

#[test]
fn greeting_names_signed_in_user() {
    assert_eq!(greeting(Some(&UserId::new("abc"))), "Welcome back, abc.");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(None), "Welcome.");
}
