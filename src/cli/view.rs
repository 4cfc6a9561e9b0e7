use std::io::{self, Write};

use clap::ValueEnum;
use serde_json::Value;

use crate::cli::client::ApiClient;

/// One screen of the client. Each variant knows where its data lives and how
/// to print it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Dashboard,
    Expenses,
    Donations,
    Campaigns,
    Donors,
    Beneficiaries,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::Dashboard => "/api/dashboard/stats",
            View::Expenses => "/api/expenses",
            View::Donations => "/api/donations",
            View::Campaigns => "/api/campaigns",
            View::Donors => "/api/donors",
            View::Beneficiaries => "/api/beneficiaries",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Expenses => "Expenses",
            View::Donations => "Donations",
            View::Campaigns => "Campaigns",
            View::Donors => "Donors",
            View::Beneficiaries => "Beneficiaries",
        }
    }

    pub async fn fetch(self, client: &ApiClient) -> anyhow::Result<Value> {
        client.get(self.path()).await
    }

    pub fn render(self, data: &Value, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "== {} ==", self.title())?;

        if self == View::Dashboard {
            return render_dashboard(data, out);
        }

        let items = data.as_array().map(Vec::as_slice).unwrap_or_default();
        if items.is_empty() {
            return writeln!(out, "No {} found", self.title().to_lowercase());
        }

        for item in items {
            let line = match self {
                View::Expenses => expense_line(item),
                View::Donations => donation_line(item),
                View::Campaigns => campaign_line(item),
                View::Donors => donor_line(item),
                View::Beneficiaries => beneficiary_line(item),
                View::Dashboard => unreachable!("dashboard rendered above"),
            };
            writeln!(out, "{}", line)?;
        }

        writeln!(out, "{} total", items.len())
    }
}

fn render_dashboard(data: &Value, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Total donations:  {}", money(data.get("totalDonations")))?;
    writeln!(out, "Total expenses:   {}", money(data.get("totalExpenses")))?;
    writeln!(
        out,
        "Active campaigns: {}",
        data.get("activeCampaigns").and_then(Value::as_i64).unwrap_or(0)
    )?;
    writeln!(out, "Recent donations:")?;

    let recent = data
        .get("recentDonations")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    if recent.is_empty() {
        return writeln!(out, "  (none)");
    }
    for donation in recent {
        writeln!(out, "  {}", donation_line(donation))?;
    }
    Ok(())
}

fn expense_line(item: &Value) -> String {
    format!(
        "{}  {:>12}  {:<16}  {}  [{}]  {}",
        date(item),
        money(item.get("amount")),
        text(item, "category"),
        text(item, "description"),
        nested_name(item, "campaign").unwrap_or("no campaign"),
        text(item, "id"),
    )
}

fn donation_line(item: &Value) -> String {
    format!(
        "{}  {:>12}  {}  [{}]",
        date(item),
        money(item.get("amount")),
        nested_name(item, "donor").unwrap_or("unknown donor"),
        nested_name(item, "campaign").unwrap_or("no campaign"),
    )
}

fn campaign_line(item: &Value) -> String {
    let target = match item.get("targetAmount") {
        Some(Value::Null) | None => "no target".to_string(),
        amount => format!("target {}", money(amount)),
    };
    format!(
        "{:<8}  {}  ({}, {} donations, {} expenses)",
        text(item, "status"),
        text(item, "name"),
        target,
        count(item, "donations"),
        count(item, "expenses"),
    )
}

fn donor_line(item: &Value) -> String {
    format!(
        "{}  <{}>  {} donations",
        text(item, "name"),
        text(item, "email"),
        count(item, "donations"),
    )
}

fn beneficiary_line(item: &Value) -> String {
    format!("{}  {}  {}", text(item, "name"), text(item, "contactInfo"), text(item, "description"))
}

fn text<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn nested_name<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key)?.get("name")?.as_str()
}

fn count(item: &Value, key: &str) -> i64 {
    item.get("_count").and_then(|c| c.get(key)).and_then(Value::as_i64).unwrap_or(0)
}

/// YYYY-MM-DD prefix of `createdAt`
fn date(item: &Value) -> &str {
    let created = text(item, "createdAt");
    created.get(..10).unwrap_or(created)
}

fn money(value: Option<&Value>) -> String {
    format!("{:.2}", value.and_then(Value::as_f64).unwrap_or(0.0))
}
