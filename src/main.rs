use clap::Parser;

use portal_rs::cli::{self, Cli};
use portal_rs::config::ConfigLoader;
use portal_rs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = ConfigLoader::new()?.load()?;
    init_logger(&cli::logger_config(&cli, &settings))?;

    cli::execute_command(cli.command, &settings).await
}
