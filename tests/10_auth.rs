mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn pokemon_requires_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/pokemon", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/api/pokemon/1/reviews", server.base_url))
        .bearer_auth("forged.token.value")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn register_rejects_duplicate_username() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let payload = json!({ "username": common::unique_username("dup"), "password": "pw" });

    let first = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(first.status(), StatusCode::OK);

    let second = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
