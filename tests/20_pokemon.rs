mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn pokemon_crud_with_reviews() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::register_and_login(server, &client, "crud").await?;
    let base = &server.base_url;

    let res = client
        .post(format!("{}/api/pokemon", base))
        .bearer_auth(&token)
        .json(&json!({ "name": "pikachu", "type": "electric" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let pokemon = res.json::<Value>().await?;
    let id = pokemon["id"].as_i64().context("missing id")?;
    assert_eq!(pokemon["name"], "pikachu");

    let res = client
        .get(format!("{}/api/pokemon/{}", base, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["type"], "electric");

    let res = client
        .post(format!("{}/api/pokemon/{}/review", base, id))
        .bearer_auth(&token)
        .json(&json!({ "title": "title", "content": "content", "stars": 5 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let review = res.json::<Value>().await?;
    assert_eq!(review["pokemonId"], id);

    let res = client
        .get(format!("{}/api/pokemon/{}/reviews", base, id))
        .bearer_auth(&token)
        .send()
        .await?;
    let reviews = res.json::<Value>().await?;
    assert_eq!(reviews.as_array().map(Vec::len), Some(1));

    let res = client
        .delete(format!("{}/api/pokemon/{}", base, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/pokemon/{}", base, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Reviews went with the pokemon
    let res = client
        .get(format!("{}/api/pokemon/{}/reviews", base, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn review_for_missing_pokemon_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::register_and_login(server, &client, "missing").await?;

    let res = client
        .post(format!("{}/api/pokemon/{}/review", server.base_url, i32::MAX))
        .bearer_auth(&token)
        .json(&json!({ "title": "title", "content": "content", "stars": 5 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
