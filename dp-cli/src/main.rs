//! dp - Dental portal session CLI
//!
//! Drives the session core the way the web views do: plain string inputs in,
//! rendered session state and route decisions out.
//!
//! # Examples
//!
//! ```bash
//! dp register --name "Jane" --email jane@example.com --password pw --role patient
//! dp status
//! dp guard --role dentist
//! dp logout
//! ```

mod cli;
mod commands;
mod error;
mod logger;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::Result as CliResult;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use dp_core::UserRole;
use dp_session::{FileVault, SessionError, SessionStore};
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = dp_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    // Session context lives for the duration of the command; restore must
    // finish before any route decision is trusted.
    let vault = FileVault::new(config.session_path()?);
    let mut session = SessionStore::new(vault, config.auth.latency());
    session.restore();

    match cli.command {
        Commands::Login {
            email,
            password,
            role,
        } => {
            let role = UserRole::from_str(&role)?;
            match session.login(&email, &password, role).await {
                Ok(user) => {
                    println!("Welcome back, {}!", user.name);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => user_failure(e),
            }
        }

        Commands::Register {
            name,
            email,
            password,
            role,
        } => {
            let role = UserRole::from_str(&role)?;
            match session.register(&name, &email, &password, role).await {
                Ok(user) => {
                    println!("Welcome, {}!", user.name);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => user_failure(e),
            }
        }

        Commands::Logout => {
            session.logout();
            println!("Logged out successfully");
            Ok(ExitCode::SUCCESS)
        }

        Commands::Status => {
            match session.current() {
                Some(user) => {
                    println!("{} <{}> ({})", user.name, user.email, user.user_type);
                }
                None => println!("Not logged in"),
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Guard { role } => {
            let required = UserRole::from_str(&role)?;
            println!("{}", session.route_decision(required));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validation and role-mismatch failures render the user notice and a
/// non-zero exit; storage faults propagate as errors.
fn user_failure(e: SessionError) -> CliResult<ExitCode> {
    if e.is_user_error() {
        eprintln!("{}", e.notice());
        Ok(ExitCode::FAILURE)
    } else {
        Err(e.into())
    }
}
