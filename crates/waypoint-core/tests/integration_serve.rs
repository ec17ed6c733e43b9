//! Integration test: bind a real listener, serve the redirect page and talk
//! raw HTTP/1.1 to it.

mod common;

use common::raw_http;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use waypoint_core::config::WaypointConfig;
use waypoint_core::server::{self, RedirectPage};

struct Running {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

async fn start(cfg: WaypointConfig) -> Running {
    let validated = cfg.validate().expect("valid config");
    let page = RedirectPage::new(&validated).expect("page");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::serve_on(listener, page, async move {
        let _ = rx.await;
    }));
    Running {
        addr,
        shutdown,
        handle,
    }
}

async fn get(addr: SocketAddr, method: &'static str, path: &'static str) -> raw_http::RawResponse {
    tokio::task::spawn_blocking(move || raw_http::request(addr, method, path))
        .await
        .unwrap()
}

fn config(target: &str) -> WaypointConfig {
    WaypointConfig {
        target_url: Some(target.to_string()),
        ..WaypointConfig::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn localhost_target_scenario() {
    let running = start(config("http://localhost:8080")).await;

    let resp = get(running.addr, "GET", "/").await;
    assert_eq!(resp.status, 302);
    assert_eq!(resp.header("location"), Some("http://localhost:8080"));
    assert_eq!(resp.header("content-type"), Some("text/html; charset=utf-8"));
    let html = resp.body_str();
    assert!(html.contains(r#"href="http://localhost:8080""#));
    assert!(html.contains(r#"window.location.href = "http://localhost:8080";"#));
    assert!(html.contains("}, 3000);"));

    running.shutdown.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn repeated_requests_return_identical_bodies() {
    let running = start(config("https://office.example.com/login")).await;

    let first = get(running.addr, "GET", "/").await;
    let second = get(running.addr, "GET", "/").await;
    let deep = get(running.addr, "GET", "/index.php").await;
    assert_eq!(first.body, second.body);
    assert_eq!(first.body, deep.body);
    assert_eq!(deep.header("location"), Some("https://office.example.com/login"));

    running.shutdown.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn static_mode_responds_ok_with_fallbacks() {
    let mut cfg = config("app_for_hosting.py");
    cfg.server_redirect = false;
    let running = start(cfg).await;

    let resp = get(running.addr, "GET", "/").await;
    assert_eq!(resp.status, 200);
    assert!(resp.header("location").is_none());
    let html = resp.body_str();
    assert!(html.contains(r#"href="app_for_hosting.py""#));
    assert!(html.contains(r#"window.location.href = "app_for_hosting.py";"#));

    running.shutdown.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn head_request_carries_location_only() {
    let running = start(config("http://localhost:8080")).await;

    let resp = get(running.addr, "HEAD", "/").await;
    assert_eq!(resp.status, 302);
    assert_eq!(resp.header("location"), Some("http://localhost:8080"));
    assert!(resp.body.is_empty());

    running.shutdown.send(()).unwrap();
    running.handle.await.unwrap().unwrap();
}

#[test]
fn malformed_target_never_reaches_the_server() {
    assert!(config("").validate().is_err());
    assert!(config("not a url").validate().is_err());
    assert!(config("javascript:alert(1)").validate().is_err());
}
