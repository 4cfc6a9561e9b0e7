use serde_json::json;

use crate::cli::commands::CommandContext;
use crate::cli::config::Session;
use crate::cli::{utils, OutputFormat};

/// `rayhope login <username>` - exchange credentials for a token and remember it
pub async fn login(ctx: &CommandContext, username: String, access_key: Option<String>) -> anyhow::Result<()> {
    let access_key = match access_key {
        Some(key) => key,
        None => utils::prompt("Access key")?,
    };

    let response = ctx
        .anonymous_client()?
        .post("/api/auth/login", &json!({ "username": username, "accessKey": access_key }))
        .await?;

    let token = response
        .get("token")
        .and_then(|t| t.as_str())
        .ok_or_else(|| anyhow::anyhow!("Login response did not contain a token"))?;

    let session = Session::new(&ctx.server, &username, token);
    ctx.store.save(&session)?;
    tracing::debug!(dir = %ctx.store.dir().display(), "Saved session");

    utils::output_success(
        ctx.output_format,
        &format!("Logged in to {} as {}", ctx.server, username),
        Some(json!({ "server": ctx.server, "username": username })),
    )
}

/// `rayhope logout`
pub fn logout(ctx: &CommandContext) -> anyhow::Result<()> {
    let message = if ctx.store.clear()? {
        "Logged out"
    } else {
        "No stored session"
    };
    utils::output_success(ctx.output_format, message, None)
}

/// `rayhope status` - stored session plus what the server thinks of its token
pub async fn status(ctx: &CommandContext) -> anyhow::Result<()> {
    let Some(session) = ctx.session() else {
        return utils::output_success(ctx.output_format, "Not logged in", Some(json!({ "loggedIn": false })));
    };

    let whoami = ctx.client()?.get("/api/auth/whoami").await;

    match ctx.output_format {
        OutputFormat::Json => utils::output_json(&json!({
            "loggedIn": true,
            "server": ctx.server,
            "username": session.username,
            "loggedInAt": session.logged_in_at,
            "tokenValid": whoami.is_ok(),
            "expiresAt": whoami.as_ref().ok().and_then(|w| w.get("expiresAt").cloned()),
        })),
        OutputFormat::Text => {
            println!("Server:    {}", ctx.server);
            println!("Username:  {}", session.username);
            println!("Logged in: {}", session.logged_in_at.format("%Y-%m-%d %H:%M UTC"));
            match whoami {
                Ok(info) => println!(
                    "Token:     valid until {}",
                    info.get("expiresAt").and_then(|e| e.as_str()).unwrap_or("?")
                ),
                Err(e) => println!("Token:     rejected ({})", e),
            }
            Ok(())
        }
    }
}
