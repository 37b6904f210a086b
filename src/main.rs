use anyhow::{Context, Result};
use recipe_creator::cli::parse_args;
use recipe_creator::config::SessionConfig;
use recipe_creator::logging::init_logging;
use recipe_creator::shell::Shell;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Lets RUST_LOG live in a .env file

    let cli_args = parse_args();
    init_logging(cli_args.verbose);

    let config = SessionConfig::from(&cli_args);
    info!(calorie_limit = config.calorie_limit, "starting recipe creator");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.run().context("Recipe creator session failed")
}
