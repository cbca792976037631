use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::sync::watch;

use bookshelf::config::Config;
use bookshelf::notify::ConsoleSink;
use bookshelf::{create_store, view, BookActions, BookId, ClientState, HttpBookApi};

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Browse books and manage a reading list")]
struct Cli {
    /// Config file (default: ~/.config/bookshelf/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List books in the catalogue
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Full-text filter
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one book
    Show { id: String },
    /// Add a book to the reading list
    Add { id: String },
    /// Show the reading list
    ReadingList,
    /// Remove a book from the reading list
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bookshelf::logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?
    .with_env_overrides()
    .with_api_url(cli.api_url.clone());
    config.validate()?;

    let api = HttpBookApi::new(&config.api)?;
    let store = create_store(ClientState::default());
    let actions = BookActions::new(store.clone(), Arc::new(api), Arc::new(ConsoleSink));

    let progress = tokio::spawn(report_loading(store.subscribe()));
    let state = run(cli.command, &actions, &config).await;
    progress.abort();

    if state.error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, actions: &BookActions, config: &Config) -> ClientState {
    match command {
        Command::List { page, limit, query } => {
            let state = actions
                .fetch_listing(config.listing.query(page, limit, query))
                .await;
            if state.error.is_none() {
                print!("{}", view::render_listing(&state.books));
            }
            state
        }
        Command::Show { id } => {
            let state = actions.fetch_detail(BookId::from(id)).await;
            if let (None, Some(book)) = (&state.error, &state.selected_book) {
                print!("{}", view::render_detail(book, &config.api.base_url));
            }
            state
        }
        Command::Add { id } => {
            let state = actions.fetch_detail(BookId::from(id)).await;
            if state.error.is_some() {
                return state;
            }
            match state.selected_book.clone() {
                Some(book) => actions.add_to_reading_list(book).await,
                None => state,
            }
        }
        Command::ReadingList => {
            let state = actions.fetch_reading_list().await;
            if state.error.is_none() {
                print!("{}", view::render_listing(&state.books));
            }
            state
        }
        Command::Remove { id } => actions.remove_from_reading_list(BookId::from(id)).await,
    }
}

async fn report_loading(mut snapshots: watch::Receiver<ClientState>) {
    while snapshots.changed().await.is_ok() {
        let state = snapshots.borrow_and_update().clone();
        if state.is_loading {
            if let Some(status) = view::render_status(&state) {
                eprintln!("{}", status);
            }
        }
    }
}
