//! End-to-end tests: assemble a real app over a temporary database, serve it
//! on an ephemeral port, and drive it over HTTP.

use std::net::SocketAddr;

use sitekit::application::{create_app, DashboardKind, SiteConfig};
use sitekit::domain::ModuleId;

struct TestServer {
    addr: SocketAddr,
    // Held so the database directory outlives the server
    _dir: tempfile::TempDir,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn spawn_app(modules: &[&str], mut config: SiteConfig) -> TestServer {
    let dir = tempfile::tempdir().expect("tempdir");
    config.database_path = Some(dir.path().join("app.db"));

    let modules: Vec<ModuleId> = modules.iter().map(|m| ModuleId::from(*m)).collect();
    let app = create_app(&modules, config).expect("app assembles");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app.router).await.expect("server");
    });

    TestServer { addr, _dir: dir }
}

fn session_cookie(response: &reqwest::Response) -> String {
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("set-cookie present")
        .to_str()
        .expect("valid header");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

#[tokio::test]
async fn debug_endpoint_reflects_assembly() {
    let server = spawn_app(
        &["blog", "dashboard", "auth"],
        SiteConfig {
            site_name: Some("Tech Community".to_string()),
            theme: "dark-modern".to_string(),
            dashboard: DashboardKind::Blog,
            ..SiteConfig::default()
        },
    )
    .await;

    let body: serde_json::Value = reqwest::get(server.url("/debug"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    assert_eq!(body["site_name"], "Tech Community");
    assert_eq!(body["theme"], "dark-modern");
    assert_eq!(body["dashboard"], "blog");

    let modules: Vec<&str> = body["modules"]
        .as_array()
        .expect("modules array")
        .iter()
        .filter_map(|m| m.as_str())
        .collect();
    // database was auto-added and initialized before its dependents
    assert!(modules.contains(&"database"));
    assert_eq!(body["database"]["users"], 0);
}

#[tokio::test]
async fn dashboard_serves_configured_variant_at_root() {
    let server = spawn_app(
        &["dashboard"],
        SiteConfig {
            dashboard: DashboardKind::Chat,
            ..SiteConfig::default()
        },
    )
    .await;

    let body: serde_json::Value = reqwest::get(server.url("/"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    assert_eq!(body["kind"], "chat");
    assert_eq!(body["stats"]["total_messages"], 247);
    assert_eq!(body["context"]["current_user"]["username"], "Guest");
    // Disabled modules keep dead links
    assert_eq!(body["context"]["links"]["blog"], "#");
}

#[tokio::test]
async fn register_login_and_act_as_user() {
    let server = spawn_app(
        &["blog", "chat", "dashboard", "auth"],
        SiteConfig::default(),
    )
    .await;
    let client = reqwest::Client::new();

    // Register
    let body: serde_json::Value = client
        .post(server.url("/register"))
        .json(&serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "Sup3rSecret",
            "confirm_password": "Sup3rSecret",
        }))
        .send()
        .await
        .expect("register request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["success"], true);

    // Login and capture the session cookie
    let response = client
        .post(server.url("/login"))
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": "Sup3rSecret",
        }))
        .send()
        .await
        .expect("login request");
    let cookie = session_cookie(&response);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], true);

    // A chat message sent with the cookie is echoed under the user's name
    let body: serde_json::Value = client
        .post(server.url("/chat/api/send"))
        .header("cookie", &cookie)
        .json(&serde_json::json!({ "message": "hello", "room_id": 2 }))
        .send()
        .await
        .expect("send request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["message"], "hello");

    // Write a post, then read it back through the listing
    let body: serde_json::Value = client
        .post(server.url("/blog/write"))
        .header("cookie", &cookie)
        .json(&serde_json::json!({
            "title": "First post",
            "content": "Hello from the integration test",
            "tags": "intro, meta",
        }))
        .send()
        .await
        .expect("write request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["success"], true);
    let post_id = body["post_id"].as_str().expect("post id").to_string();

    let body: serde_json::Value = client
        .get(server.url("/blog"))
        .send()
        .await
        .expect("blog request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["posts"][0]["title"], "First post");
    assert_eq!(body["posts"][0]["author"], "alice");

    let body: serde_json::Value = client
        .get(server.url(&format!("/blog/post/{post_id}")))
        .send()
        .await
        .expect("post request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["post"]["title"], "First post");

    // Logout kills the session; the next message falls back to "You"
    let response = client
        .get(server.url("/logout"))
        .header("cookie", &cookie)
        .send()
        .await
        .expect("logout request");
    assert!(response.status().is_success());

    let body: serde_json::Value = client
        .post(server.url("/chat/api/send"))
        .header("cookie", &cookie)
        .json(&serde_json::json!({ "message": "still here?" }))
        .send()
        .await
        .expect("send request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["username"], "You");
}

#[tokio::test]
async fn missing_post_is_404() {
    let server = spawn_app(&["blog"], SiteConfig::default()).await;

    let response = reqwest::get(server.url(&format!(
        "/blog/post/{}",
        uuid::Uuid::new_v4()
    )))
    .await
    .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
