use clap::{Parser, Subcommand};

use crate::cli::{h2i::H2iCommand, i2h::I2hCommand};

mod h2i;
mod i2h;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
struct Command {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "h2i")]
    H2i(H2iCommand),
    #[command(name = "i2h")]
    I2h(I2hCommand),
    /// Unrecognised modes are accepted and do nothing
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

pub async fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    tracing::debug!("Starting cli");

    match cli.command {
        Commands::H2i(cmd) => cmd.execute().await,
        Commands::I2h(cmd) => cmd.execute().await,
        Commands::Unknown(args) => {
            tracing::debug!(?args, "unknown mode, nothing to do");
            Ok(())
        }
    }
}
