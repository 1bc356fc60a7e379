//! PickGit Viewer
//!
//! Terminal front-end for the PickGit API. Prints feeds as a numbered grid
//! and portfolios page by page, using the same feed loader and scroll
//! pagination as the web front-end.
//!
//! Configuration comes from the environment (see `ClientConfig`).

mod surface;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pickgit_client::app::{
    paginator_dots, FeedStatus, InfiniteFeed, PortfolioPageService, PortfolioPageState,
};
use pickgit_client::domain::ports::{FeedQuery, ScrollBehavior};
use pickgit_client::feed::{grid_feed, render_grid_feed, render_portfolio, GridFeedState};
use pickgit_client::{routes, ClientConfig, PickGitClient, ScrollPagination};
use serde_json::{json, Value};
use surface::TerminalSurface;
use tracing_subscriber::EnvFilter;

/// Height of one portfolio page in the terminal, in lines
const PORTFOLIO_PAGE_HEIGHT: f64 = 24.0;

#[derive(Parser)]
#[command(name = "pickgit-viewer", about = "Browse PickGit feeds and portfolios")]
struct Cli {
    /// Print the view model as JSON instead of Markdown
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Everyone's posts
    Feed {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Your own posts (needs PICKGIT_ACCESS_TOKEN)
    Mine {
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Posts written by a user
    User {
        username: String,
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Posts carrying a tag
    Tag {
        tag: String,
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// A user's portfolio
    Portfolio {
        username: String,
        /// Portfolio page to jump to
        #[arg(long)]
        page: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the rendered output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().context("Invalid configuration")?;
    let client = Arc::new(
        PickGitClient::from_config(&config).context("Failed to build HTTP client")?,
    );

    tracing::info!(api_url = %config.api_url, "Starting PickGit viewer");

    let json = cli.json;
    match cli.command {
        Command::Feed { pages } => {
            show_feed(client, &config, FeedQuery::Home, pages, json).await
        }
        Command::Mine { pages } => {
            show_feed(client, &config, FeedQuery::Mine, pages, json).await
        }
        Command::User { username, pages } => {
            show_feed(client, &config, FeedQuery::User { username }, pages, json).await
        }
        Command::Tag { tag, pages } => {
            show_feed(client, &config, FeedQuery::tag(&tag), pages, json).await
        }
        Command::Portfolio { username, page } => {
            show_portfolio(client, &config, &username, page, json).await
        }
    }
}

fn feed_json(
    query: &FeedQuery,
    status: FeedStatus,
    state: &GridFeedState,
    has_more: bool,
) -> Value {
    json!({
        "query": query.to_string(),
        "status": status,
        "grid": state,
        "has_more": has_more,
    })
}

fn portfolio_json(state: &PortfolioPageState, active: Option<usize>) -> Value {
    let count = match state {
        PortfolioPageState::Ready(view) => view.pagination_count(),
        _ => 0,
    };
    json!({
        "portfolio": state,
        "active_page": active,
        "dots": paginator_dots(active, count),
    })
}

fn print_json(value: &Value) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{}", out);
    Ok(())
}

async fn show_feed(
    client: Arc<PickGitClient>,
    config: &ClientConfig,
    query: FeedQuery,
    pages: u32,
    json: bool,
) -> Result<()> {
    let feed = Arc::new(InfiniteFeed::new(client, query.clone(), config.page_limit));

    // Requests overlap; pages still land in request order
    let handles: Vec<_> = (0..pages.max(1)).map(|_| feed.spawn_next_page()).collect();
    for handle in handles {
        if let Err(e) = handle.await.context("Feed task panicked")? {
            tracing::warn!("Failed to load page: {}", e);
        }
    }

    let feed_page_path = routes::feed_page_url(&query);
    let status = feed.status();
    let state = grid_feed(feed.paged_result().as_ref(), status, Some(&feed_page_path));
    let has_more = feed.has_more();
    feed.teardown();

    if json {
        return print_json(&feed_json(&query, status, &state, has_more));
    }

    print!("{}", render_grid_feed(&query.to_string(), &state));
    if has_more {
        println!("\n_More posts available._");
    }

    Ok(())
}

async fn show_portfolio(
    client: Arc<PickGitClient>,
    config: &ClientConfig,
    username: &str,
    page: Option<usize>,
    json: bool,
) -> Result<()> {
    let service = PortfolioPageService::new(client);
    let state = service.load(username).await;

    let mut active = None;
    if let PortfolioPageState::Ready(view) = &state {
        let boundaries = (0..view.pagination_count())
            .map(|i| i as f64 * PORTFOLIO_PAGE_HEIGHT)
            .collect();
        let mut tracker = ScrollPagination::new(TerminalSurface::default(), boundaries)
            .with_navigation_timeout(config.navigation_timeout)
            .with_scroll_behavior(ScrollBehavior::Instant);

        let now = Instant::now();
        match page {
            Some(target) => {
                tracker.paginate(target, now);
            }
            None => tracker.on_scroll(0.0, now),
        }
        // A terminal "scroll" lands instantly, so report arrival right away
        let offset = tracker.surface().offset();
        tracker.on_scroll(offset, now);
        active = tracker.active_page_index();
    }

    if json {
        return print_json(&portfolio_json(&state, active));
    }

    print!("{}", render_portfolio(&state, active));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_feed() {
        let cli = Cli::try_parse_from(["pickgit-viewer", "user", "kevin", "--pages", "3"]).unwrap();
        match cli.command {
            Command::User { username, pages } => {
                assert_eq!(username, "kevin");
                assert_eq!(pages, 3);
            }
            _ => panic!("expected user command"),
        }
    }

    #[test]
    fn parses_portfolio_page() {
        let cli =
            Cli::try_parse_from(["pickgit-viewer", "portfolio", "kevin", "--page", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Portfolio { page: Some(2), .. }
        ));
    }

    #[test]
    fn feed_defaults_to_one_page() {
        let cli = Cli::try_parse_from(["pickgit-viewer", "feed"]).unwrap();
        assert!(matches!(cli.command, Command::Feed { pages: 1 }));
        assert!(!cli.json);
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["pickgit-viewer", "tag", "rust", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn feed_json_carries_status_and_grid() {
        let status = FeedStatus {
            is_error: true,
            ..FeedStatus::default()
        };

        let value = feed_json(&FeedQuery::Home, status, &GridFeedState::Error, true);

        assert_eq!(value["status"]["is_error"], true);
        assert_eq!(value["grid"]["state"], "error");
        assert_eq!(value["has_more"], true);
    }

    #[test]
    fn portfolio_json_without_portfolio_has_no_dots() {
        let value = portfolio_json(&PortfolioPageState::NotCreated, None);

        assert_eq!(value["portfolio"]["state"], "not_created");
        assert_eq!(value["active_page"], Value::Null);
        assert_eq!(value["dots"], json!([]));
    }
}
