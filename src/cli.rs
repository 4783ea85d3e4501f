use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "MovieLens ratings dashboard")]
pub struct Cli {
    /// Tab separated ratings file (user_id, movie_id, rating, timestamp)
    #[arg(long, global = true)]
    pub ratings: Option<PathBuf>,

    /// Pipe separated items file (movie_id|title|...)
    #[arg(long, global = true)]
    pub items: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Dataset summary, rating distribution and most rated movies
    Overview,
    /// Highest average rating among movies with enough ratings
    Top {
        /// Minimum number of ratings (defaults to 50)
        #[arg(short, long)]
        min_count: Option<usize>,
        /// Number of movies to show (defaults to 10)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Movies whose ratings correlate with the given title
    Similar {
        /// Exact movie title, e.g. "Star Wars (1977)"
        title: String,
        /// Only keep movies with more ratings than this (defaults to 50)
        #[arg(short, long)]
        min_count: Option<usize>,
        /// Number of movies to show (defaults to 10)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List every movie title
    Titles,
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}
