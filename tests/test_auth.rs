use needledrop_be::auth::{AuthClaims, generate_jwt};

fn set_test_secret() {
    // SAFETY: tests in this file run in one process; no other thread reads the
    // var before it is set.
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
}

#[test]
fn test_jwt_roundtrip() {
    set_test_secret();

    let token = generate_jwt("user-1", false).expect("token should encode");
    let AuthClaims(claims) = AuthClaims::from_token(&token).expect("token should decode");

    assert_eq!(claims.sub, "user-1");
    assert!(!claims.moderator);
}

#[test]
fn test_moderator_claim_survives_roundtrip() {
    set_test_secret();

    let token = generate_jwt("mod-1", true).expect("token should encode");
    let AuthClaims(claims) = AuthClaims::from_token(&token).expect("token should decode");

    assert!(claims.moderator);
}

#[test]
fn test_garbage_token_is_rejected() {
    set_test_secret();

    assert!(AuthClaims::from_token("not-a-token").is_err());
}
