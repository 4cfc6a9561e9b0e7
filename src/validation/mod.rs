//! Request body validation.
//!
//! [`ValidatedJson`] reads the raw JSON body, deserializes it into one of the
//! schemas in [`schemas`] and runs its `validator` rules. Every violated field
//! ends up in the 400 response, not just the first one.

pub mod schemas;

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::error::{ApiError, FieldViolation};

pub use schemas::{
    BeneficiarySchema, CampaignSchema, DonationSchema, DonorSchema, ExpenseSchema, LoginSchema,
};

/// JSON body that has passed its schema.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;

        parse(value).map(ValidatedJson)
    }
}

/// Deserialize and validate an untyped record against schema `T`.
pub fn parse<T>(value: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if !value.is_object() {
        return Err(ApiError::invalid_body("expected a JSON object"));
    }

    let input: T = serde_json::from_value(value).map_err(|e| ApiError::invalid_body(e.to_string()))?;
    input.validate()?;
    Ok(input)
}

/// Flatten `validator` output into a stable, sorted list.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = camel_case(&field);
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Treat `""` as an absent optional field. Anything else is kept as sent.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Optional number that never fails the parse. A value of the wrong JSON type
/// becomes NaN so the field's own `range` rule reports it.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        _ => Some(f64::NAN),
    })
}

/// Required amount; absent or null reads as zero and fails the positive rule.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_number(deserializer).map(|n| n.unwrap_or_default())
}
