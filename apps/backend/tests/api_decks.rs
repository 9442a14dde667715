//! Deck parsing API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::fixtures;
use common::TestContext;
use reading_drill_backend::config::Config;

fn encoded_text_request(text: &str) -> Value {
    json!({ "text": text, "decode_entities": true })
}

#[tokio::test]
async fn test_parse_plain_text() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request("Just a passage."))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["len"], 1);
    assert_eq!(body["cards"][0]["sub_text"], "Just a passage.");
    assert!(body["cards"][0].get("main_text").is_none());
}

#[tokio::test]
async fn test_parse_main_with_runs() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request(">>A<<|x|x|y"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);

    assert_eq!(cards[0]["sub_progress"]["index"], 0);
    assert_eq!(cards[0]["sub_progress"]["count"], 2);
    assert_eq!(cards[1]["sub_progress"]["index"], 1);
    assert_eq!(cards[2]["sub_progress"]["count"], 1);
    for card in cards {
        assert_eq!(card["main_text"], "A");
        assert_eq!(card["secondary_progress"]["count"], 3);
    }
}

#[tokio::test]
async fn test_parse_full_passage() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request(fixtures::PRAYER))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    // 2 repetitions of 4 subs, then the closing block.
    assert_eq!(body["len"], 9);
    assert_eq!(body["cards"][8]["main_text"], "Closing");
    assert_eq!(body["cards"][7]["secondary_progress"]["index"], 7);
    assert_eq!(body["cards"][7]["secondary_progress"]["count"], 8);
}

#[tokio::test]
async fn test_parse_decodes_entities_on_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&encoded_text_request("&gt;&gt;Title&lt;&lt;|line"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["len"], 1);
    assert_eq!(body["cards"][0]["main_text"], "Title");
    assert_eq!(body["cards"][0]["sub_text"], "line");
}

#[tokio::test]
async fn test_parse_rejects_oversized_text() {
    let ctx = TestContext::with_config(Config {
        max_text_bytes: 8,
        ..Config::default()
    });

    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request(">>longer than eight<<"))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn test_parse_rejects_oversized_expansion() {
    let ctx = TestContext::with_config(Config {
        max_cards: 1000,
        ..Config::default()
    });

    // 24 bytes of text, two million cards once expanded.
    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request(">>1000^A<<|1000^x|1000^y"))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert_eq!(body["error"], "payload_too_large");
    assert_eq!(
        body["message"],
        "Payload too large: text expands to 2000000 cards, limit is 1000"
    );
}

#[tokio::test]
async fn test_parse_accepts_expansion_at_limit() {
    let ctx = TestContext::with_config(Config {
        max_cards: 1000,
        ..Config::default()
    });

    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request(">>1000^A<<"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["len"], 1000);
}

#[tokio::test]
async fn test_session_rejects_oversized_expansion() {
    let ctx = TestContext::with_config(Config {
        max_cards: 10,
        ..Config::default()
    });

    let response = ctx
        .server
        .post("/api/sessions")
        .json(&fixtures::text_request(">>2^A<<|3^x|3^y"))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(ctx.state.sessions.is_empty().await);
}

#[tokio::test]
async fn test_text_limit_above_default_body_limit() {
    let ctx = TestContext::with_config(Config {
        max_text_bytes: 3 * 1024 * 1024,
        ..Config::default()
    });

    // Larger than axum's default 2 MB body limit, within the configured one.
    let text = "a".repeat(2_500_000);
    let response = ctx
        .server
        .post("/api/decks/parse")
        .json(&fixtures::text_request(&text))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["len"], 1);
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
