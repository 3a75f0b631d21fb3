pub mod load;
pub mod status;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Load(args) => load::execute(args).await,
        Commands::Status(args) => status::execute(args).await,
    }
}
