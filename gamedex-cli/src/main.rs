//! gamedex CLI
//!
//! Command-line browser for a remote video-game catalog: list and
//! filter games, inspect a single title, browse genres.

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use gamedex_catalog::SortKey;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Browse a video-game catalog from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Filter and sort arguments shared by the games listing.
#[derive(Args, Clone)]
struct ViewArgs {
    /// Only games in this genre (exact name, e.g. "Action")
    #[arg(short, long)]
    genre: Option<String>,

    /// Only games on platforms whose name contains this text (e.g. "PlayStation")
    #[arg(short, long)]
    platform: Option<String>,

    /// Only games whose name contains this text (case-insensitive)
    #[arg(short, long)]
    search: Option<String>,

    /// Ordering: newest, oldest, highest-score, lowest-score
    #[arg(long)]
    sort: Option<SortKey>,
}

#[derive(Subcommand)]
enum Commands {
    /// List games with optional filtering and sorting
    Games {
        #[command(flatten)]
        view: ViewArgs,

        /// Number of pages to fetch (each page holds --page-size games)
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Games per fetched page
        #[arg(long, default_value_t = gamedex_api::client::GAMES_PAGE_SIZE)]
        page_size: u32,
    },

    /// Show the detail page for a single game
    Game {
        /// Game id from the games listing
        id: u64,
    },

    /// List genres with their game counts
    Genres,

    /// Manage catalog API key configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current API key and its source
    Show,

    /// Interactively set up the API key
    Setup,

    /// Test the API key against the catalog API
    Test,

    /// Print the config file path
    Path,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Games {
            view,
            pages,
            page_size,
        } => commands::games::run(view.into(), pages, page_size),
        Commands::Game { id } => commands::game::run(id),
        Commands::Genres => commands::genres::run(),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_show(),
            ConfigAction::Setup => commands::config::run_setup(),
            ConfigAction::Test => commands::config::run_test(),
            ConfigAction::Path => commands::config::run_path(),
        },
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

impl From<ViewArgs> for gamedex_catalog::FilterCriteria {
    fn from(args: ViewArgs) -> Self {
        Self {
            genre: args.genre,
            platform: args.platform.unwrap_or_default(),
            search: args.search.unwrap_or_default(),
            sort: args.sort.unwrap_or_default(),
        }
    }
}
