// ABOUTME: Tests for ReqwestTransport request construction.
// ABOUTME: Checks which requests carry the service token and headers.

use reqwest::header::{ACCEPT, AUTHORIZATION};

use super::*;

fn transport(token: Option<&str>) -> ReqwestTransport {
    let config = GistConfig {
        token: token.map(str::to_string),
        ..Default::default()
    };
    ReqwestTransport::new(&config).unwrap()
}

#[test]
fn test_api_get_sends_token_and_accept() {
    let request = transport(Some("secret"))
        .api_get("https://api.github.com/gists/abc123")
        .build()
        .unwrap();

    assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret");
    assert_eq!(request.headers()[ACCEPT], "application/vnd.github+json");
}

#[test]
fn test_api_get_without_token() {
    let request = transport(None)
        .api_get("https://api.github.com/gists/abc123")
        .build()
        .unwrap();

    assert!(request.headers().get(AUTHORIZATION).is_none());
    assert_eq!(request.headers()[ACCEPT], "application/vnd.github+json");
}

#[test]
fn test_raw_get_sends_no_credentials() {
    let request = transport(Some("secret"))
        .raw_get("https://gist.githubusercontent.com/u/abc123/raw/luckperms-data.json")
        .build()
        .unwrap();

    assert!(request.headers().get(AUTHORIZATION).is_none());
    assert!(request.headers().get(ACCEPT).is_none());
    assert_eq!(request.method(), reqwest::Method::GET);
}
