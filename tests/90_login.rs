mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn login_returns_bearer_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::register_and_login(server, &client, "login").await?;

    // The token opens the protected routes
    let res = client
        .get(format!("{}/api/pokemon", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let username = common::unique_username("wrongpw");

    client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": username, "password": "pikachu" }))
        .send()
        .await?;

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": username, "password": "raichu" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], true);
    Ok(())
}

#[tokio::test]
async fn login_without_body_is_client_error() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .send()
        .await?;

    assert!(res.status().is_client_error(), "got {}", res.status());
    Ok(())
}
