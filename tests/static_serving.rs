use http_body_util::BodyExt;
use hyper::{Method, Request};
use spa_server::config::{AppState, AssetsConfig, Config, LoggingConfig, ServerConfig};
use spa_server::handler::handle_request;
use std::sync::Arc;
use tempfile::TempDir;

fn app_state(root: &std::path::Path) -> Arc<AppState> {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        },
        assets: AssetsConfig {
            root: root.to_str().unwrap().to_string(),
            index: "index.html".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            access_log: false,
        },
    };
    Arc::new(AppState::new(&config).unwrap())
}

fn dist_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        b"<!DOCTYPE html><div id=\"app\"></div>",
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/main.css"), b".app{color:red}").unwrap();
    std::fs::write(dir.path().join("assets/main.js"), b"export {};").unwrap();
    dir
}

fn request(method: Method, path: &str) -> Request<()> {
    Request::builder().method(method).uri(path).body(()).unwrap()
}

async fn body(resp: hyper::Response<http_body_util::Full<hyper::body::Bytes>>) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn serves_real_files_with_their_bytes() {
    let dist = dist_dir();
    let state = app_state(dist.path());

    let resp = handle_request(request(Method::GET, "/assets/main.css"), Arc::clone(&state))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("content-type").unwrap(), "text/css");
    assert_eq!(body(resp).await, b".app{color:red}");

    let resp = handle_request(request(Method::GET, "/assets/main.js"), state)
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/javascript"
    );
    assert_eq!(body(resp).await, b"export {};");
}

#[tokio::test]
async fn client_routes_get_the_entry_document() {
    let dist = dist_dir();
    let state = app_state(dist.path());
    let index = std::fs::read(dist.path().join("index.html")).unwrap();

    for path in ["/dashboard/42", "/login", "/deeply/nested/route?tab=2"] {
        let resp = handle_request(request(Method::GET, path), Arc::clone(&state))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "path {path}");
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body(resp).await, index, "path {path}");
    }
}

#[tokio::test]
async fn root_path_serves_the_entry_document() {
    let dist = dist_dir();
    let state = app_state(dist.path());
    let index = std::fs::read(dist.path().join("index.html")).unwrap();

    let resp = handle_request(request(Method::GET, "/"), state).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body(resp).await, index);
}

#[tokio::test]
async fn traversal_paths_stay_inside_the_root() {
    let dist = dist_dir();
    let state = app_state(dist.path());
    let index = std::fs::read(dist.path().join("index.html")).unwrap();

    for path in ["/../../etc/passwd", "/assets/../../secret", "/..%2f..%2fetc"] {
        let resp = handle_request(request(Method::GET, path), Arc::clone(&state))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "path {path}");
        assert_eq!(body(resp).await, index, "path {path}");
    }
}

#[tokio::test]
async fn head_requests_carry_no_body() {
    let dist = dist_dir();
    let state = app_state(dist.path());

    let resp = handle_request(request(Method::HEAD, "/assets/main.css"), state)
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("content-length").unwrap(), "15");
    assert!(body(resp).await.is_empty());
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let dist = dist_dir();
    let state = app_state(dist.path());

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS] {
        let resp = handle_request(request(method.clone(), "/"), Arc::clone(&state))
            .await
            .unwrap();
        assert_eq!(resp.status(), 405, "method {method}");
        assert_eq!(resp.headers().get("allow").unwrap(), "GET, HEAD");
    }
}
