use anyhow::{Result, anyhow};

use movielens_dashboard::cli::{Cli, Command};
use movielens_dashboard::{build_config, handle_page, handle_serve, interpret, page_for};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli);

    if let Command::Serve { port } = cli.command {
        return handle_serve(port, config);
    }

    let page = page_for(&cli.command, &config.ranking)
        .ok_or_else(|| anyhow!("Command {:?} has no page", cli.command))?;
    handle_page(&page, &config, cli.format)
}
