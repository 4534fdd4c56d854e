//! Command-line driver for the clinipass services.
//!
//! Stands in for the mobile screens: logs in, looks up a patient record
//! by code, and runs the NFC text-record codec for tag tooling. The
//! session token is per-process (nothing is persisted), so `find` takes
//! the token obtained from a previous `login`.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinipass_api::{ApiClient, ApiConfig};
use clinipass_core::{
    AuthService, LoginState, LookupService, LookupState, SessionStore,
};
use clinipass_nfc::{decode_text, encode_text, NdefMessage};
use clinipass_types::{AuthToken, PatientCode};

#[derive(Parser)]
#[command(name = "clinipass")]
#[command(about = "Patient-record lookup client for clinic staff")]
struct Cli {
    /// Backend base URL (falls back to CLINIPASS_API_URL, then the
    /// compiled-in default)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the session token
    Login {
        username: String,
        password: String,
    },
    /// Look up a patient record by identification code
    Find {
        /// Patient code or NNI
        code: String,
        /// Session token from a previous login
        #[arg(long)]
        token: String,
    },
    /// NFC text-record tooling
    Nfc {
        #[command(subcommand)]
        command: NfcCommands,
    },
}

#[derive(Subcommand)]
enum NfcCommands {
    /// Encode a patient code as a text-record payload (hex)
    Encode { text: String },
    /// Decode a text-record payload (hex) back to the patient code
    Decode { hex: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinipass_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base_url = cli
        .base_url
        .or_else(|| std::env::var("CLINIPASS_API_URL").ok())
        .unwrap_or_else(|| clinipass_api::config::DEFAULT_BASE_URL.into());
    let config = ApiConfig::new(base_url)?;
    let api = Arc::new(ApiClient::new(config)?);
    let session = Arc::new(SessionStore::new());

    match cli.command {
        Commands::Login { username, password } => {
            let auth = AuthService::new(api, session);
            auth.login(&username, &password).await;
            match auth.state().get() {
                LoginState::Success(token) => println!("{}", token.as_str()),
                LoginState::Error(message) => anyhow::bail!(message),
                other => anyhow::bail!("login ended in unexpected state: {other:?}"),
            }
        }
        Commands::Find { code, token } => {
            session.set(AuthToken::new(&token)?);
            let code = PatientCode::new(&code)?;
            let lookup = LookupService::new(api, session);
            lookup.lookup(&code).await;
            match lookup.state().get() {
                LookupState::Success(record) => {
                    println!("{}", serde_json::to_string_pretty(&record)?)
                }
                LookupState::Error(e) => anyhow::bail!(e),
                other => anyhow::bail!("lookup ended in unexpected state: {other:?}"),
            }
        }
        Commands::Nfc { command } => match command {
            NfcCommands::Encode { text } => {
                let payload = encode_text(&text);
                let message = NdefMessage::text_message(&text);
                println!("{}", hex::encode(payload));
                eprintln!("on-tag message size: {} bytes", message.byte_len());
            }
            NfcCommands::Decode { hex } => {
                println!("{}", decode_payload_hex(&hex)?);
            }
        },
    }

    Ok(())
}

fn decode_payload_hex(input: &str) -> anyhow::Result<String> {
    let payload = hex::decode(input.trim())?;
    Ok(decode_text(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload_hex_round_trip() {
        let payload = encode_text("12345");
        assert_eq!(decode_payload_hex(&hex::encode(payload)).unwrap(), "12345");
    }

    #[test]
    fn test_decode_payload_hex_rejects_bad_input() {
        assert!(decode_payload_hex("xyz").is_err());
        assert!(decode_payload_hex("abc").is_err());
        assert!(decode_payload_hex("02656e ").is_ok());
    }
}
