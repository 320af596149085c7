use std::collections::HashSet;
use tencentcloud_vpc::constants::DEFAULT_SESSION_NAME_PREFIX;
use tencentcloud_vpc::utils::id::{default_role_session_name, random_client_token, random_nonce};

#[test]
fn test_client_token_layout() {
    let token = random_client_token();
    let groups: Vec<&str> = token.split('-').collect();
    let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
}

#[test]
fn test_client_token_is_upper_hex() {
    let token = random_client_token();
    for c in token.chars().filter(|c| *c != '-') {
        assert!(
            c.is_ascii_digit() || ('A'..='F').contains(&c),
            "Invalid character: {}",
            c
        );
    }
}

#[test]
fn test_client_token_uniqueness() {
    let tokens: HashSet<String> = (0..100).map(|_| random_client_token()).collect();
    assert_eq!(tokens.len(), 100);
}

#[test]
fn test_nonce_is_positive() {
    for _ in 0..100 {
        assert!(random_nonce() > 0);
    }
}

#[test]
fn test_default_role_session_name() {
    let name = default_role_session_name();
    let suffix = name
        .strip_prefix(DEFAULT_SESSION_NAME_PREFIX)
        .expect("prefix should be present");
    assert!(suffix.parse::<i64>().is_ok());
}
