//! Liveness probe integration test

use std::net::TcpListener;
use tokengate::auth::AuthService;
use tokengate::configuration::JwtSettings;
use tokengate::startup::run;

fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let auth = AuthService::new(JwtSettings {
        access_secret: "health-access-secret-32-characters!".to_string(),
        refresh_secret: "health-refresh-secret-32-characters".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604_800,
        issuer: "tokengate-test".to_string(),
    });
    let server = run(listener, auth).expect("Failed to create server");

    let _ = tokio::spawn(async move {
        let _ = server.await;
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn health_check_works() {
    let addr = spawn_app();

    let response = reqwest::Client::new()
        .get(&format!("{}/health_check", addr))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.content_length(), Some(0));
}
