mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

use common::{build_test_app, create, create_campaign, delete, get, login, post, put};

fn fields(body: &Value) -> Vec<&str> {
    body["details"]
        .as_array()
        .map(|details| details.iter().filter_map(|d| d["field"].as_str()).collect())
        .unwrap_or_default()
}

#[sqlx::test(migrations = "./migrations")]
async fn created_expense_appears_in_list(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;

    let created = create(
        &app,
        "/api/expenses",
        &token,
        json!({ "description": "Food", "amount": 500, "category": "Food" }),
    )
    .await?;
    assert_eq!(created["description"], "Food");
    assert_eq!(created["amount"], 500.0);
    assert_eq!(created["category"], "Food");
    assert!(created["campaignId"].is_null());
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());

    let list = get(&app, "/api/expenses", &token).await?;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.json();
    let items = items.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], created["id"]);
    assert!(items[0]["campaign"].is_null());
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn list_is_newest_first_with_campaign_joined(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;
    let campaign = create_campaign(&app, &token, "Winter Relief").await?;

    create(
        &app,
        "/api/expenses",
        &token,
        json!({ "description": "Blankets", "amount": 120.5, "category": "Supplies", "campaignId": campaign["id"] }),
    )
    .await?;
    create(
        &app,
        "/api/expenses",
        &token,
        json!({ "description": "Bus fare", "amount": 40, "category": "Transport" }),
    )
    .await?;

    let items = get(&app, "/api/expenses", &token).await?.json();
    let items = items.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["description"], "Bus fare");
    assert_eq!(items[1]["description"], "Blankets");
    assert_eq!(items[1]["campaign"]["name"], "Winter Relief");
    assert_eq!(items[1]["campaignId"], campaign["id"]);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn non_positive_amount_is_rejected_and_not_stored(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;

    for amount in [json!(0), json!(-5), json!("500")] {
        let res = post(
            &app,
            "/api/expenses",
            &token,
            json!({ "description": "Food", "amount": amount, "category": "Food" }),
        )
        .await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "amount {amount}");
    }

    let items = get(&app, "/api/expenses", &token).await?.json();
    assert_eq!(items, json!([]));
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn every_missing_field_is_reported(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;

    let res = post(&app, "/api/expenses", &token, json!({ "description": "" })).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let body = res.json();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(fields(&body), vec!["amount", "category", "description"]);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn submitted_text_is_stored_verbatim(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;

    let created = create(
        &app,
        "/api/expenses",
        &token,
        json!({ "description": " Food ", "amount": 12, "category": " Food " }),
    )
    .await?;
    assert_eq!(created["description"], " Food ");

    let items = get(&app, "/api/expenses", &token).await?.json();
    assert_eq!(items[0]["description"], " Food ");
    assert_eq!(items[0]["category"], " Food ");
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn update_overwrites_every_field(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;
    let campaign = create_campaign(&app, &token, "School Kits").await?;

    let created = create(
        &app,
        "/api/expenses",
        &token,
        json!({ "description": "Pens", "amount": 10, "category": "Supplies", "campaignId": campaign["id"] }),
    )
    .await?;
    let id = created["id"].as_str().expect("id");

    let res = put(
        &app,
        &format!("/api/expenses/{id}"),
        &token,
        json!({ "description": "Pens and paper", "amount": 25.75, "category": "Stationery" }),
    )
    .await?;
    assert_eq!(res.status, StatusCode::OK);

    let updated = res.json();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["description"], "Pens and paper");
    assert_eq!(updated["amount"], 25.75);
    assert_eq!(updated["category"], "Stationery");
    assert!(updated["campaignId"].is_null(), "omitted campaignId detaches the expense");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn update_validates_before_lookup(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;

    let res = put(
        &app,
        "/api/expenses/00000000-0000-0000-0000-000000000001",
        &token,
        json!({ "description": "x", "amount": -1, "category": "y" }),
    )
    .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(fields(&res.json()), vec!["amount"]);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_ids_are_not_found(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;
    let body = json!({ "description": "Food", "amount": 1, "category": "Food" });

    for id in ["7f1c3a52-8c59-4a4e-9a38-0b0a5f8f2b11", "not-a-uuid"] {
        let res = put(&app, &format!("/api/expenses/{id}"), &token, body.clone()).await?;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "PUT {id}");
        assert_eq!(res.json()["error"], "Expense not found");

        let res = delete(&app, &format!("/api/expenses/{id}"), &token).await?;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "DELETE {id}");
    }
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_the_expense_once(pool: PgPool) -> Result<()> {
    let app = build_test_app(pool);
    let token = login(&app).await?;

    let created = create(
        &app,
        "/api/expenses",
        &token,
        json!({ "description": "Rent", "amount": 800, "category": "Facilities" }),
    )
    .await?;
    let id = created["id"].as_str().expect("id");

    let res = delete(&app, &format!("/api/expenses/{id}"), &token).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["message"], "Expense deleted");
    assert_eq!(res.json()["id"], created["id"]);

    let again = delete(&app, &format!("/api/expenses/{id}"), &token).await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    assert_eq!(get(&app, "/api/expenses", &token).await?.json(), json!([]));
    Ok(())
}
