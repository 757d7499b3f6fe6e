use clap::Parser;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let mut config = config::RxlConfig::load(cli.config.as_deref())?;
    config.apply_env();
    if cli.no_genesis {
        config.ledger.seed_genesis = false;
    }

    config::init_logging(&config.logging, cli.verbose)?;
    tracing::debug!(?config, "configuration resolved");
    commands::run_command(cli, &config)
}
