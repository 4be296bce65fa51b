use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dp")]
#[command(about = "Dental portal session CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
