use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{blank_as_none, lenient_amount, lenient_number};
use crate::database::models::CampaignStatus;

/// Login body. Field content is not constrained here; a wrong pair of any
/// length is a credentials failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginSchema {
    pub username: String,
    pub access_key: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSchema {
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    #[validate(range(exclusive_min = 0.0, message = "amount must be a positive number"))]
    pub amount: f64,
    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "valid_id", message = "campaignId must be a valid id"))]
    pub campaign_id: Option<String>,
}

impl ExpenseSchema {
    pub fn campaign_uuid(&self) -> Option<Uuid> {
        parse_id(self.campaign_id.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonationSchema {
    #[serde(default, deserialize_with = "lenient_amount")]
    #[validate(range(exclusive_min = 0.0, message = "amount must be a positive number"))]
    pub amount: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "donorId is required"),
        custom(function = "valid_id", message = "donorId must be a valid id")
    )]
    pub donor_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "valid_id", message = "campaignId must be a valid id"))]
    pub campaign_id: Option<String>,
}

impl DonationSchema {
    /// Nil only if called on an unvalidated record.
    pub fn donor_uuid(&self) -> Uuid {
        parse_id(self.donor_id.as_deref()).unwrap_or_default()
    }

    pub fn campaign_uuid(&self) -> Option<Uuid> {
        parse_id(self.campaign_id.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSchema {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[validate(range(exclusive_min = 0.0, message = "targetAmount must be a positive number"))]
    pub target_amount: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "known_status", message = "status must be ACTIVE, COMPLETED or PAUSED"))]
    pub status: Option<String>,
}

impl CampaignSchema {
    pub fn status_or_default(&self) -> CampaignStatus {
        self.status
            .as_deref()
            .and_then(CampaignStatus::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonorSchema {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiarySchema {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact_info: Option<String>,
}

fn valid_id(id: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_id"))
}

fn known_status(status: &str) -> Result<(), ValidationError> {
    match CampaignStatus::parse(status) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("unknown_status")),
    }
}

fn parse_id(id: Option<&str>) -> Option<Uuid> {
    id.and_then(|s| Uuid::parse_str(s).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::validation::parse;

    fn violated_fields(err: ApiError) -> Vec<String> {
        match err {
            ApiError::Validation { details } => details.into_iter().map(|d| d.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_expense() {
        let expense: ExpenseSchema =
            parse(json!({"description": "Food", "amount": 500, "category": "Food"})).unwrap();
        assert_eq!(expense.description, "Food");
        assert_eq!(expense.amount, 500.0);
        assert_eq!(expense.campaign_uuid(), None);
    }

    #[test]
    fn text_is_kept_as_submitted() {
        let expense: ExpenseSchema =
            parse(json!({"description": " Food ", "amount": 5, "category": "  Food"})).unwrap();
        assert_eq!(expense.description, " Food ");
        assert_eq!(expense.category, "  Food");

        let donor: DonorSchema = parse(json!({"name": "Asha ", "phone": " "})).unwrap();
        assert_eq!(donor.name, "Asha ");
        assert_eq!(donor.phone.as_deref(), Some(" "));
    }

    #[test]
    fn expense_reports_every_violation() {
        let err = parse::<ExpenseSchema>(json!({"description": "", "amount": -3})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["amount", "category", "description"]);
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        for amount in [0.0, -0.01, -500.0] {
            let err = parse::<DonationSchema>(json!({"amount": amount, "donorId": Uuid::new_v4()})).unwrap_err();
            assert_eq!(violated_fields(err), vec!["amount"]);
        }
    }

    #[test]
    fn donation_requires_donor() {
        let err = parse::<DonationSchema>(json!({"amount": 10, "donorId": ""})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["donorId"]);
    }

    #[test]
    fn blank_campaign_id_means_none() {
        let donation: DonationSchema =
            parse(json!({"amount": 10, "donorId": Uuid::new_v4(), "campaignId": ""})).unwrap();
        assert_eq!(donation.campaign_uuid(), None);
    }

    #[test]
    fn malformed_ids_are_reported_on_their_fields() {
        let err = parse::<DonationSchema>(json!({"amount": -1, "donorId": "abc"})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["amount", "donorId"]);

        let err = parse::<ExpenseSchema>(
            json!({"description": "Food", "amount": 1, "category": "Food", "campaignId": "nope"}),
        )
        .unwrap_err();
        assert_eq!(violated_fields(err), vec!["campaignId"]);
    }

    #[test]
    fn wrongly_typed_numbers_are_reported_on_their_fields() {
        let err = parse::<DonationSchema>(json!({"amount": "500", "donorId": Uuid::new_v4()})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["amount"]);

        let err = parse::<CampaignSchema>(json!({"name": "X", "targetAmount": "lots"})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["targetAmount"]);
    }

    #[test]
    fn valid_ids_are_exposed_as_uuids() {
        let donor = Uuid::new_v4();
        let donation: DonationSchema = parse(json!({"amount": 10, "donorId": donor})).unwrap();
        assert_eq!(donation.donor_uuid(), donor);
    }

    #[test]
    fn campaign_status_defaults_to_active() {
        let campaign: CampaignSchema = parse(json!({"name": "Winter Relief"})).unwrap();
        assert_eq!(campaign.status_or_default(), CampaignStatus::Active);

        let paused: CampaignSchema = parse(json!({"name": "Winter Relief", "status": "PAUSED"})).unwrap();
        assert_eq!(paused.status_or_default(), CampaignStatus::Paused);
    }

    #[test]
    fn campaign_rejects_unknown_status_and_bad_target() {
        let err = parse::<CampaignSchema>(json!({"name": "X", "status": "ARCHIVED"})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["status"]);

        let err = parse::<CampaignSchema>(json!({"name": "", "targetAmount": 0})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["name", "targetAmount"]);
    }

    #[test]
    fn donor_email_must_be_valid_when_present() {
        let err = parse::<DonorSchema>(json!({"name": "Asha", "email": "not-an-email"})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["email"]);

        let donor: DonorSchema = parse(json!({"name": "Asha", "email": ""})).unwrap();
        assert_eq!(donor.email, None);
    }

    #[test]
    fn beneficiary_requires_name() {
        let err = parse::<BeneficiarySchema>(json!({"contactInfo": "555-0100"})).unwrap_err();
        assert_eq!(violated_fields(err), vec!["name"]);
    }

    #[test]
    fn login_shape_requires_both_fields() {
        assert!(parse::<LoginSchema>(json!({"username": "admin"})).is_err());
        assert!(parse::<LoginSchema>(json!({"username": "", "accessKey": ""})).is_ok());
    }

    #[test]
    fn login_shape_does_not_cap_length() {
        let long = "a".repeat(200);
        let login: LoginSchema = parse(json!({"username": long, "accessKey": "key"})).unwrap();
        assert_eq!(login.username.len(), 200);
    }
}
