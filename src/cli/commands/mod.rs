pub mod auth;
pub mod expense;
pub mod export;
pub mod records;

use std::io::Write;

use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::{Session, SessionStore};
use crate::cli::view::View;
use crate::cli::{utils, OutputFormat, DEFAULT_SERVER};

/// Everything a command needs: where the server is, how to print, where the session lives
pub struct CommandContext {
    pub server: String,
    pub output_format: OutputFormat,
    pub store: SessionStore,
    session: Option<Session>,
}

impl CommandContext {
    /// An explicit `--server` wins, then the server of the stored session, then localhost
    pub fn new(server: Option<String>, output_format: OutputFormat, store: SessionStore) -> anyhow::Result<Self> {
        let session = store.load()?;
        let server = server
            .or_else(|| session.as_ref().map(|s| s.server.clone()))
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());

        Ok(Self {
            server,
            output_format,
            store,
            session,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Client without credentials, for login
    pub fn anonymous_client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::new(&self.server, None)
    }

    /// Client carrying the stored bearer token
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Not logged in; run `rayhope login <username>` first"))?;
        ApiClient::new(&self.server, Some(session.token.clone()))
    }
}

/// Fetch one view and print it
pub async fn show_view(ctx: &CommandContext, view: View) -> anyhow::Result<()> {
    let client = ctx.client()?;
    let data = view.fetch(&client).await?;

    match ctx.output_format {
        OutputFormat::Json => utils::output_json(&data),
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            view.render(&data, &mut stdout.lock())?;
            Ok(())
        }
    }
}

/// Report a successful mutation, then reload the view it changed.
/// The mutation is reported even when the reload fails; the failure is only a warning.
pub async fn after_mutation(
    ctx: &CommandContext,
    message: &str,
    record: Value,
    view: View,
) -> anyhow::Result<()> {
    if ctx.output_format == OutputFormat::Text {
        utils::output_success(ctx.output_format, message, None)?;
    }

    let reload = match ctx.client() {
        Ok(client) => view.fetch(&client).await,
        Err(e) => Err(e),
    };
    if let Err(e) = &reload {
        tracing::warn!(view = view.title(), error = %e, "Reload after mutation failed");
    }

    let stdout = std::io::stdout();
    report_reload(ctx.output_format, message, record, view, reload, &mut stdout.lock())
}

/// JSON output is a single document holding the record and the reloaded view,
/// with `reloadError` in place of the view when it could not be fetched.
/// Text output assumes the success line is already printed.
fn report_reload(
    output_format: OutputFormat,
    message: &str,
    record: Value,
    view: View,
    reload: anyhow::Result<Value>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match (output_format, reload) {
        (OutputFormat::Json, Ok(data)) => {
            let doc = json!({ "message": message, "record": record, "view": data });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        (OutputFormat::Json, Err(e)) => {
            let doc = json!({ "message": message, "record": record, "view": null, "reloadError": e.to_string() });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        (OutputFormat::Text, Ok(data)) => view.render(&data, out)?,
        (OutputFormat::Text, Err(e)) => {
            writeln!(out, "! {} recorded, but reload failed: {}", view.title(), e)?;
        }
    }
    Ok(())
}
