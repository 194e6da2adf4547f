use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Mint a bearer token with the configured JWT_SECRET (development)")]
    Token {
        #[arg(long, help = "User ID (UUID) the token authenticates as")]
        user_id: Uuid,
        #[arg(long, default_value = "cli", help = "Display name stored in the token")]
        name: String,
        #[arg(long, help = "Validity in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Token { user_id, name, hours } => {
            let security = &config::config().security;
            let hours = hours.unwrap_or(security.jwt_expiry_hours);

            let claims = Claims::new(user_id, name, hours)?;
            let token = generate_jwt(&claims, &security.jwt_secret)?;

            match output_format {
                OutputFormat::Json => output_success(
                    &output_format,
                    "Token generated",
                    Some(json!({ "token": token, "user_id": user_id, "expires_at": claims.exp })),
                ),
                // Bare token so it can be captured with $(notes auth token ...)
                OutputFormat::Text => {
                    println!("{}", token);
                    Ok(())
                }
            }
        }
    }
}
