// Create-only entities: donations, campaigns, donors, beneficiaries

use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::commands::{after_mutation, CommandContext};
use crate::cli::utils::compact;
use crate::cli::view::View;

#[derive(Debug, Subcommand)]
pub enum DonationCommands {
    #[command(about = "Record a donation from an existing donor")]
    Add {
        #[arg(long, allow_negative_numbers = true, help = "Amount, must be positive")]
        amount: f64,
        #[arg(long, help = "Donor id")]
        donor: String,
        #[arg(long, help = "Campaign id")]
        campaign: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CampaignCommands {
    #[command(about = "Create a campaign")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true, help = "Fundraising target")]
        target: Option<f64>,
        #[arg(long, help = "ACTIVE, COMPLETED or PAUSED (default ACTIVE)")]
        status: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DonorCommands {
    #[command(about = "Register a donor")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum BeneficiaryCommands {
    #[command(about = "Register a beneficiary")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "Phone, address or other contact details")]
        contact: Option<String>,
    },
}

impl DonationCommands {
    fn body(&self) -> Value {
        let DonationCommands::Add { amount, donor, campaign } = self;
        compact(json!({ "amount": amount, "donorId": donor, "campaignId": campaign }))
    }
}

impl CampaignCommands {
    fn body(&self) -> Value {
        let CampaignCommands::Add {
            name,
            description,
            target,
            status,
        } = self;
        compact(json!({
            "name": name,
            "description": description,
            "targetAmount": target,
            "status": status.as_ref().map(|s| s.to_uppercase()),
        }))
    }
}

impl DonorCommands {
    fn body(&self) -> Value {
        let DonorCommands::Add {
            name,
            email,
            phone,
            address,
        } = self;
        compact(json!({ "name": name, "email": email, "phone": phone, "address": address }))
    }
}

impl BeneficiaryCommands {
    fn body(&self) -> Value {
        let BeneficiaryCommands::Add {
            name,
            description,
            contact,
        } = self;
        compact(json!({ "name": name, "description": description, "contactInfo": contact }))
    }
}

pub async fn handle_donation(cmd: DonationCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    create(ctx, "/api/donations", cmd.body(), "Donation recorded", View::Donations).await
}

pub async fn handle_campaign(cmd: CampaignCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    create(ctx, "/api/campaigns", cmd.body(), "Campaign created", View::Campaigns).await
}

pub async fn handle_donor(cmd: DonorCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    create(ctx, "/api/donors", cmd.body(), "Donor registered", View::Donors).await
}

pub async fn handle_beneficiary(cmd: BeneficiaryCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    create(ctx, "/api/beneficiaries", cmd.body(), "Beneficiary registered", View::Beneficiaries).await
}

async fn create(ctx: &CommandContext, path: &str, body: Value, message: &str, view: View) -> anyhow::Result<()> {
    let record = ctx.client()?.post(path, &body).await?;
    after_mutation(ctx, message, record, view).await
}
