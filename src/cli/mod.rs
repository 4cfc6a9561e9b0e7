pub mod client;
pub mod commands;
pub mod config;
pub mod utils;
pub mod view;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::cli::config::SessionStore;
use crate::cli::view::View;

pub const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "rayhope")]
#[command(about = "Ray of Hope CLI - staff client for the charity administration API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "RAYHOPE_SERVER", help = "API base URL (defaults to the logged-in server)")]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Log in and store the session token")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Access key (will prompt if not provided)")]
        access_key: Option<String>,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Show the stored session and verify it against the server")]
    Status,

    #[command(about = "Load and display one view")]
    View {
        #[arg(value_enum)]
        view: View,
    },

    #[command(about = "Record, correct or remove expenses")]
    Expense {
        #[command(subcommand)]
        cmd: commands::expense::ExpenseCommands,
    },

    #[command(about = "Record donations")]
    Donation {
        #[command(subcommand)]
        cmd: commands::records::DonationCommands,
    },

    #[command(about = "Create campaigns")]
    Campaign {
        #[command(subcommand)]
        cmd: commands::records::CampaignCommands,
    },

    #[command(about = "Register donors")]
    Donor {
        #[command(subcommand)]
        cmd: commands::records::DonorCommands,
    },

    #[command(about = "Register beneficiaries")]
    Beneficiary {
        #[command(subcommand)]
        cmd: commands::records::BeneficiaryCommands,
    },

    #[command(about = "Download spreadsheet exports")]
    Export {
        #[command(subcommand)]
        cmd: commands::export::ExportCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let ctx = commands::CommandContext::new(cli.server, output_format, SessionStore::from_env()?)?;

    match cli.command {
        Commands::Login { username, access_key } => commands::auth::login(&ctx, username, access_key).await,
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Status => commands::auth::status(&ctx).await,
        Commands::View { view } => commands::show_view(&ctx, view).await,
        Commands::Expense { cmd } => commands::expense::handle(cmd, &ctx).await,
        Commands::Donation { cmd } => commands::records::handle_donation(cmd, &ctx).await,
        Commands::Campaign { cmd } => commands::records::handle_campaign(cmd, &ctx).await,
        Commands::Donor { cmd } => commands::records::handle_donor(cmd, &ctx).await,
        Commands::Beneficiary { cmd } => commands::records::handle_beneficiary(cmd, &ctx).await,
        Commands::Export { cmd } => commands::export::handle(cmd, &ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expense_add() {
        let cli = Cli::try_parse_from([
            "rayhope", "--json", "expense", "add", "--description", "Food", "--amount", "500", "--category", "Food",
        ])
        .expect("parse");

        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Expense { .. }));
    }

    #[test]
    fn negative_amounts_reach_the_server_check() {
        let cli = Cli::try_parse_from([
            "rayhope", "expense", "add", "--description", "Food", "--amount", "-5", "--category", "Food",
        ])
        .expect("parse");
        match cli.command {
            Commands::Expense {
                cmd: commands::expense::ExpenseCommands::Add { fields },
            } => assert_eq!(fields.amount, -5.0),
            _ => panic!("expected expense add"),
        }

        let cli = Cli::try_parse_from(["rayhope", "donation", "add", "--amount", "-1", "--donor", "d1"]).expect("parse");
        assert!(matches!(cli.command, Commands::Donation { .. }));

        let cli = Cli::try_parse_from(["rayhope", "campaign", "add", "--name", "X", "--target", "-10"]).expect("parse");
        assert!(matches!(cli.command, Commands::Campaign { .. }));
    }

    #[test]
    fn parses_view_names() {
        let cli = Cli::try_parse_from(["rayhope", "view", "beneficiaries"]).expect("parse");
        match cli.command {
            Commands::View { view } => assert_eq!(view, View::Beneficiaries),
            _ => panic!("expected view command"),
        }

        assert!(Cli::try_parse_from(["rayhope", "view", "tenants"]).is_err());
    }
}
