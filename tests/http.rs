//! HTTP service over a real socket.

use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use word_finder::core::LetterPoints;
use word_finder::finder::{FinderType, SharedFinder};
use word_finder::server::{AppState, build_router};
use word_finder::wordlists::load_from_slice;

mod common;

/// Serve `state` on an ephemeral port and return its address.
async fn start_server(state: AppState) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    addr
}

async fn http_get(addr: std::net::SocketAddr, path: &str) -> (String, String) {
    let mut socket = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    socket.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    socket.read_to_string(&mut response).await.unwrap();

    let (head, body) = response.split_once("\r\n\r\n").unwrap();
    (head.to_string(), body.to_string())
}

fn loaded_state(engine: &str, words: &[&str]) -> AppState {
    let mut finder = FinderType::from_name(engine, LetterPoints::standard());
    load_from_slice(&mut finder, words);
    AppState::new(SharedFinder::new(finder))
}

#[tokio::test]
async fn serves_ranked_words_as_json() {
    let addr = start_server(loaded_state("trie", common::BASIC)).await;

    let (head, body) = http_get(addr, "/words/tha").await;

    assert!(head.starts_with("HTTP/1.1 200"), "{head}");
    assert!(head.to_lowercase().contains("content-type: application/json"));
    let words: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(words, ["hat", "ah", "ha", "at", "a"]);
}

#[tokio::test]
async fn serves_empty_array_without_letters() {
    let addr = start_server(loaded_state("profile", common::BASIC)).await;

    for path in ["/words", "/words/"] {
        let (head, body) = http_get(addr, path).await;
        assert!(head.starts_with("HTTP/1.1 200"), "{path}: {head}");
        assert_eq!(body, "[]");
    }
}

#[tokio::test]
async fn percent_encoded_letters_are_decoded() {
    let addr = start_server(loaded_state("trie", common::BASIC)).await;

    let (_, body) = http_get(addr, "/words/T%20H%20A").await;
    let words: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(words, ["hat", "ah", "ha", "at", "a"]);
}

#[tokio::test]
async fn swapped_index_is_served_immediately() {
    let state = loaded_state("trie", &["hat"]);
    let shared = Arc::clone(&state.finder);
    let addr = start_server(state).await;

    let (_, body) = http_get(addr, "/words/tha").await;
    assert_eq!(body, r#"["hat"]"#);

    let mut rebuilt = FinderType::from_name("profile", LetterPoints::standard());
    load_from_slice(&mut rebuilt, common::REPEATS);
    shared.replace(rebuilt);

    let (_, body) = http_get(addr, "/words/olleh").await;
    assert_eq!(body, r#"["hello","hell","he"]"#);

    let (_, body) = http_get(addr, "/health").await;
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["engine"], "profile");
    assert_eq!(health["words"], 6);
}
