use std::path::PathBuf;

use clap::Subcommand;
use serde_json::json;

use crate::cli::commands::CommandContext;
use crate::cli::utils;

#[derive(Debug, Subcommand)]
pub enum ExportCommands {
    #[command(about = "Download every expense as an .xlsx workbook")]
    Expenses {
        #[arg(long, short, default_value = "expenses.xlsx", help = "Where to write the workbook")]
        output: PathBuf,
    },
}

pub async fn handle(cmd: ExportCommands, ctx: &CommandContext) -> anyhow::Result<()> {
    match cmd {
        ExportCommands::Expenses { output } => {
            let bytes = ctx.client()?.download("/api/export/expenses").await?;
            std::fs::write(&output, &bytes)?;

            utils::output_success(
                ctx.output_format,
                &format!("Saved {} ({} bytes)", output.display(), bytes.len()),
                Some(json!({ "path": output, "bytes": bytes.len() })),
            )
        }
    }
}
