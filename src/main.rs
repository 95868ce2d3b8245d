use anyhow::Result;
use clap::{Parser, Subcommand};
use crave_core::{logging, Config};

mod app;
mod cli;
mod handler;
mod tui;
mod ui;

use app::{App, FetchRequest};
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "crave")]
#[command(version, about = "Discover, save and cook recipes from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by keyword
    Search {
        /// Search term (empty searches the default query)
        #[arg(default_value = "")]
        term: String,
    },
    /// List recipes in a category
    Category {
        /// Category name, e.g. Dessert
        name: String,
    },
    /// Show a full recipe
    Show {
        /// Recipe id, e.g. 52772
        id: String,
    },
    /// List saved favorites
    Favorites,
    /// List the browsable categories
    Categories,
    /// Ask Chef Bot a question
    Chat {
        /// Your message
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file so they never draw over the TUI
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    match cli.command {
        None => run_tui(&config).await,
        Some(Commands::Search { term }) => cli::search(&config, &term).await,
        Some(Commands::Category { name }) => cli::category(&config, &name).await,
        Some(Commands::Show { id }) => cli::show(&config, &id).await,
        Some(Commands::Favorites) => cli::favorites(&config),
        Some(Commands::Categories) => {
            cli::categories();
            Ok(())
        }
        Some(Commands::Chat { message }) => {
            cli::chat(&message);
            Ok(())
        }
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let mut app = match App::new(config, events.sender()) {
        Ok(app) => app,
        Err(e) => {
            tui::restore()?;
            return Err(e);
        }
    };
    tracing::info!("Starting Crave against {}", app.client.base_url());

    app.fetch(FetchRequest::Search(String::new()));

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    result
}

async fn run_loop(
    terminal: &mut tui::Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event).await?,
            None => break,
        }
    }
    Ok(())
}
