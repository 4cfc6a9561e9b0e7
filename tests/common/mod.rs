#![allow(dead_code)]

use std::io::Read;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use rayhope_api::config::AppConfig;
use rayhope_api::state::AppState;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_KEY: &str = "ray-hope-2024";

/// Router wired against the per-test database with development defaults
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, AppConfig::development())
}

pub fn build_app_with_config(pool: PgPool, config: AppConfig) -> Router {
    rayhope_api::app(AppState::new(pool, config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }
}

/// Send one request through the router in-process
pub async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await.context("router failed")?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await?.to_bytes().to_vec();

    Ok(TestResponse { status, headers, bytes })
}

pub async fn get(app: &Router, uri: &str, token: &str) -> Result<TestResponse> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> Result<TestResponse> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put(app: &Router, uri: &str, token: &str, body: Value) -> Result<TestResponse> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: &str) -> Result<TestResponse> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Log in as the default admin and return the bearer token
pub async fn login(app: &Router) -> Result<String> {
    let res = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": ADMIN_USER, "accessKey": ADMIN_KEY })),
    )
    .await?;
    anyhow::ensure!(res.status == StatusCode::OK, "login failed with {}", res.status);

    res.json()["token"]
        .as_str()
        .map(str::to_string)
        .context("login response had no token")
}

/// POST and return the created record, failing unless the server answered 201
pub async fn create(app: &Router, uri: &str, token: &str, body: Value) -> Result<Value> {
    let res = post(app, uri, token, body).await?;
    anyhow::ensure!(
        res.status == StatusCode::CREATED,
        "POST {} returned {}: {}",
        uri,
        res.status,
        String::from_utf8_lossy(&res.bytes)
    );
    Ok(res.json())
}

pub async fn create_donor(app: &Router, token: &str, name: &str) -> Result<Value> {
    create(app, "/api/donors", token, json!({ "name": name })).await
}

pub async fn create_campaign(app: &Router, token: &str, name: &str) -> Result<Value> {
    create(app, "/api/campaigns", token, json!({ "name": name })).await
}

/// Raw text of one part of an xlsx archive
pub fn xlsx_part(bytes: &[u8], name: &str) -> Result<String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))?;
    let mut file = archive.by_name(name)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}
