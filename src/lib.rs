pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod errors;
pub mod services;
pub mod similarity;
pub mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::cache::shared_cache;
use crate::cli::{Command, OutputFormat};
use crate::config::settings::{AppConfig, RankingSettings};
use crate::dashboard::{Page, render_text};
use crate::services::dashboard::DashboardService;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::new();
    config.data = config
        .data
        .with_overrides(cli.ratings.clone(), cli.items.clone());
    config
}

/// Map a page command onto the page it shows; `None` for non-page commands.
pub fn page_for(command: &Command, ranking: &RankingSettings) -> Option<Page> {
    match command {
        Command::Overview => Some(Page::Overview),
        Command::Top { min_count, limit } => Some(Page::TopMovies {
            min_count: min_count.unwrap_or(ranking.min_rating_count),
            limit: limit.unwrap_or(ranking.top_k),
        }),
        Command::Similar {
            title,
            min_count,
            limit,
        } => Some(Page::FindSimilar {
            title: title.clone(),
            min_count: min_count.unwrap_or(ranking.min_rating_count),
            limit: limit.unwrap_or(ranking.top_k),
        }),
        Command::Titles => Some(Page::Titles),
        Command::Serve { .. } => None,
    }
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_page(page: &Page, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let service =
        DashboardService::load(shared_cache(), config).context("Failed to load MovieLens data")?;

    let view = service.render(page)?;
    let output = match format {
        OutputFormat::Table => render_text(&view),
        OutputFormat::Json => serde_json::to_string_pretty(&view)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
