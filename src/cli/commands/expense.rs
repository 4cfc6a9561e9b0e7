use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::cli::commands::{after_mutation, CommandContext};
use crate::cli::utils::compact;
use crate::cli::view::View;

#[derive(Debug, Args)]
pub struct ExpenseFields {
    #[arg(long, help = "What the money was spent on")]
    pub description: String,
    #[arg(long, allow_negative_numbers = true, help = "Amount, must be positive")]
    pub amount: f64,
    #[arg(long, help = "Spending category")]
    pub category: String,
    #[arg(long, help = "Campaign id to charge the expense to")]
    pub campaign: Option<String>,
}

impl ExpenseFields {
    pub fn to_body(&self) -> Value {
        compact(json!({
            "description": self.description,
            "amount": self.amount,
            "category": self.category,
            "campaignId": self.campaign,
        }))
    }
}

#[derive(Debug, Subcommand)]
pub enum ExpenseCommands {
    #[command(about = "Record a new expense")]
    Add {
        #[command(flatten)]
        fields: ExpenseFields,
    },

    #[command(about = "Replace every field of an existing expense")]
    Update {
        #[arg(help = "Expense id")]
        id: String,
        #[command(flatten)]
        fields: ExpenseFields,
    },

    #[command(about = "Delete an expense")]
    Delete {
        #[arg(help = "Expense id")]
        id: String,
    },
}

impl ExpenseCommands {
    /// The list a successful run has changed
    pub fn affected_view(&self) -> View {
        View::Expenses
    }
}

pub async fn handle(cmd: ExpenseCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    let view = cmd.affected_view();
    let client = ctx.client()?;

    let (message, record) = match cmd {
        ExpenseCommands::Add { fields } => {
            let record = client.post("/api/expenses", &fields.to_body()).await?;
            ("Expense recorded".to_string(), record)
        }
        ExpenseCommands::Update { id, fields } => {
            let record = client.put(&format!("/api/expenses/{}", id), &fields.to_body()).await?;
            (format!("Expense {} updated", id), record)
        }
        ExpenseCommands::Delete { id } => {
            let record = client.delete(&format!("/api/expenses/{}", id)).await?;
            (format!("Expense {} deleted", id), record)
        }
    };

    after_mutation(ctx, &message, record, view).await
}
