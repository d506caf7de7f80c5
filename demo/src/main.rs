use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use form3_client::{Account, AccountAttributes, AccountClient, ClientConfig, QueryParams};
use tracing_subscriber::EnvFilter;

const SAMPLE_ACCOUNT_ID: &str = "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc";
const SAMPLE_ORGANISATION_ID: &str = "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c";

#[derive(Parser)]
#[command(about = "Sample caller of the accounts API client")]
struct Cli {
    #[arg(long, default_value = "http://localhost:8080/v1/organisation/accounts")]
    base_url: String,

    /// Request deadline in seconds; unset waits indefinitely.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one account by id.
    Fetch {
        #[arg(default_value = SAMPLE_ACCOUNT_ID)]
        id: String,
    },
    /// Create the sample account.
    Create,
    /// Delete an account at a given version.
    Delete {
        id: String,
        #[arg(long)]
        version: i64,
    },
}

fn sample_account() -> Account {
    Account::new(
        SAMPLE_ACCOUNT_ID,
        SAMPLE_ORGANISATION_ID,
        AccountAttributes {
            name: vec![
                "Dong".to_string(),
                "Wang".to_string(),
                "abc".to_string(),
                "def".to_string(),
            ],
            country: Some("GB".to_string()),
            base_currency: "GBP".to_string(),
            bank_id: "400300".to_string(),
            bank_id_code: "GBDSC".to_string(),
            bic: "NWBKGB22".to_string(),
        },
    )
}

fn print_account(account: &Account) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(account)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::default();
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = AccountClient::new(&config);

    match cli.command.unwrap_or(Command::Fetch {
        id: SAMPLE_ACCOUNT_ID.to_string(),
    }) {
        Command::Fetch { id } => {
            let account = client
                .fetch(&cli.base_url, &id)
                .with_context(|| format!("fetch error: account {id}"))?;
            print_account(&account)?;
        }
        Command::Create => {
            let account = client
                .create(&cli.base_url, &sample_account())
                .context("create error")?;
            tracing::info!(id = %account.id, version = ?account.version, "account created");
            print_account(&account)?;
        }
        Command::Delete { id, version } => {
            let params = QueryParams::from([("version".to_string(), version.to_string())]);
            client
                .delete(&cli.base_url, &id, &params)
                .with_context(|| format!("delete error: account {id}"))?;
            tracing::info!(%id, version, "account deleted");
        }
    }
    Ok(())
}
