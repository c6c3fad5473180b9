// src/main.rs
//
// Command-line host: loads the club sheet, answers one filter selection
// and prints the dashboard payload as JSON for the renderer.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use movieclub::application::commands::{get_dashboard, get_filter_options, load_dataset};
use movieclub::application::dto::FilterDto;
use movieclub::{AppState, DashboardConfig, JsonFileMovieRepository};

#[derive(Debug, Parser)]
#[command(name = "movieclub", about = "Movie club dashboard data")]
struct Args {
    /// JSON export of the club sheet
    #[arg(long, default_value = "data/movies.json")]
    data: PathBuf,

    /// Optional dashboard config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Season to show, or "All"
    #[arg(long)]
    season: Option<String>,

    /// Presenter to show, or "All"
    #[arg(long)]
    presenter: Option<String>,

    /// Case-insensitive title search
    #[arg(long)]
    search: Option<String>,

    /// Only print the season / presenter select values
    #[arg(long)]
    options_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("movieclub", LevelFilter::Info)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    let repo = Arc::new(JsonFileMovieRepository::new(&args.data));
    let data_path = repo.path().display().to_string();
    let state = AppState::new(repo, config);

    let count = load_dataset(&state)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("loading {}", data_path))?;
    log::info!("{} movies ready", count);

    if args.options_only {
        let options = get_filter_options(&state).map_err(|e| anyhow!(e))?;
        return print_json(&options, args.pretty);
    }

    let filters = FilterDto {
        season: args.season,
        presenter: args.presenter,
        search: args.search,
    };
    let dashboard = get_dashboard(&state, filters).map_err(|e| anyhow!(e))?;
    print_json(&dashboard, args.pretty)
}
