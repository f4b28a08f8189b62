use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use wopi_proof::ProofService;

#[derive(Parser)]
struct Args {
    /// Path to the PEM-encoded RSA proof key.
    #[clap(long, env = "WOPI_PROOF_KEY_PATH", default_value = "/etc/wopi/proof_key")]
    key_path: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the proof-key discovery attributes as JSON.
    Discovery,
    /// Print fresh proof headers for one request as JSON.
    Headers {
        #[clap(long, env = "WOPI_ACCESS_TOKEN")]
        access_token: String,
        #[clap(long)]
        uri: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let service = ProofService::new(&args.key_path);

    match args.command {
        Command::Discovery => {
            let attributes: serde_json::Map<String, serde_json::Value> = service
                .discovery_attributes()
                .iter()
                .map(|(name, value)| (name.clone(), json!(value)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&attributes)?);
        }
        Command::Headers { access_token, uri } => {
            let headers: serde_json::Map<String, serde_json::Value> = service
                .proof_headers(&access_token, &uri)?
                .into_iter()
                .map(|(name, value)| (name, json!(value)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&headers)?);
        }
    }

    Ok(())
}
