mod client;
mod feed;
mod render;
mod search;
mod theme;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::client::{ApiClient, ClientError};
use crate::feed::{DEFAULT_PAGE_SIZE, LeaderboardFeed};
use crate::render::Tab;
use crate::search::{DEBOUNCE_DELAY, Debounced, SearchView};
use crate::theme::Scheme;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("{0}")]
    Feed(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "leaderboard-cli", about = "Leaderboard API client")]
struct Cli {
    #[arg(long, env = "LEADERBOARD_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[arg(long, value_enum, env = "LEADERBOARD_SCHEME", default_value_t = Scheme::Light)]
    scheme: Scheme,

    /// Print raw JSON responses instead of formatted rows.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug)]
struct CliContext {
    client: ApiClient,
    scheme: Scheme,
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the ranked leaderboard.
    Board {
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u64,
        /// Number of pages to load.
        #[arg(long, default_value_t = 1, conflicts_with = "all")]
        pages: u64,
        /// Keep loading until the last page.
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Search players by username. Reads queries from stdin when no query is given.
    Search { query: Option<String> },
    /// Trigger one round of simulated rating updates.
    Simulate,
    /// Check server health.
    Health,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = CliContext { client: ApiClient::new(&cli.base_url), scheme: cli.scheme, json: cli.json };
    tracing::debug!(base_url = ctx.client.base_url(), "client configured");

    match cli.command {
        Command::Board { page_size, pages, all } => {
            let max_pages = if all { u64::MAX } else { pages.max(1) };
            run_board(&ctx, page_size, max_pages).await
        }
        Command::Search { query: Some(query) } => run_search_once(&ctx, &query).await,
        Command::Search { query: None } => run_search_interactive(&ctx).await,
        Command::Simulate => run_simulate(&ctx).await,
        Command::Health => run_health(&ctx).await,
    }
}

async fn run_board(ctx: &CliContext, page_size: u64, max_pages: u64) -> Result<(), CliError> {
    let mut feed = LeaderboardFeed::new(page_size);
    let mut request = Some(feed.refresh());
    let mut loaded = 0_u64;

    while let Some(req) = request {
        let result = ctx.client.leaderboard(req.page, req.page_size).await.map_err(|e| e.to_string());
        let added = feed.apply(req, result);
        if let Some(error) = feed.error() {
            return Err(CliError::Feed(error.to_owned()));
        }

        if !ctx.json {
            if loaded == 0 {
                println!("{}", render::tab_bar(Tab::Leaderboard, ctx.scheme));
                println!();
                println!("{}", render::leaderboard_header(feed.total_users(), ctx.scheme));
                println!();
                println!("{}", render::subtitle(&render::table_header()));
                println!("{}", render::separator(ctx.scheme));
            }
            let users = feed.users();
            for user in &users[users.len() - added..] {
                println!("{}", render::styled_row(user, ctx.scheme));
            }
        }

        loaded += 1;
        request = if loaded < max_pages { feed.load_more() } else { None };
    }

    if ctx.json {
        print_json(feed.users())?;
    } else if feed.has_more() {
        println!(
            "{}",
            render::subtitle(&format!("Showing {} pages; pass --pages N or --all for more", feed.page()))
        );
    }
    Ok(())
}

async fn run_search_once(ctx: &CliContext, query: &str) -> Result<(), CliError> {
    let mut view = SearchView::default();
    if let Some(q) = view.submit(query) {
        let results = ctx.client.search(&q).await?;
        if ctx.json {
            return print_json(&results);
        }
        view.apply(Ok(results));
    }
    print_search(ctx, &view);
    Ok(())
}

async fn run_search_interactive(ctx: &CliContext) -> Result<(), CliError> {
    let (tx, rx) = mpsc::channel::<String>(64);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "stdin read failed");
                    break;
                }
            }
        }
    });

    println!("{}", render::tab_bar(Tab::Search, ctx.scheme));
    println!();
    println!("{}", render::search_header(ctx.scheme));
    println!("{}", render::subtitle("Enter username (e.g., rahul)"));

    let mut view = SearchView::default();
    let mut debounced = Debounced::new(rx, DEBOUNCE_DELAY);
    while let Some(raw) = debounced.next().await {
        if let Some(q) = view.submit(&raw) {
            let result = ctx.client.search(&q).await.map_err(|e| e.to_string());
            view.apply(result);
        }
        println!();
        print_search(ctx, &view);
    }
    Ok(())
}

fn print_search(ctx: &CliContext, view: &SearchView) {
    if let Some(error) = view.error() {
        println!("{}", render::error_line(error));
        return;
    }
    println!("{}", render::subtitle(&view.summary()));
    if view.results().is_empty() {
        return;
    }
    println!("{}", render::subtitle(&render::table_header()));
    println!("{}", render::separator(ctx.scheme));
    for user in view.results() {
        println!("{}", render::styled_row(user, ctx.scheme));
    }
}

async fn run_simulate(ctx: &CliContext) -> Result<(), CliError> {
    let report = ctx.client.simulate_update().await?;
    if ctx.json {
        return print_json(&report);
    }
    println!("{}", render::notice_line(&format!("{} ({} users updated)", report.message, report.users_updated)));
    Ok(())
}

async fn run_health(ctx: &CliContext) -> Result<(), CliError> {
    let health = ctx.client.health().await?;
    if ctx.json {
        return print_json(&health);
    }
    println!(
        "{}",
        render::success_line(&format!(
            "{}: {} players at {}",
            health.status,
            render::thousands(health.total_users),
            health.timestamp
        ))
    );
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
