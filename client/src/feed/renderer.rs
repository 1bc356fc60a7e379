//! Feed renderer
//!
//! Renders grid feeds and portfolio pages to plain markdown for terminals.

use crate::app::{paginator_dots, PortfolioPageKind, PortfolioPageState, PortfolioView};
use crate::feed::grid::{GridFeedState, GridItem};

/// Render a grid feed to markdown format
pub fn render_grid_feed(title: &str, state: &GridFeedState) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", title));

    match state {
        GridFeedState::Loading => buf.push_str("_Loading..._\n"),
        GridFeedState::Error | GridFeedState::Empty => {
            buf.push_str(&format!("_{}_\n", state.message().unwrap_or_default()));
        }
        GridFeedState::Posts {
            items,
            loader_shown,
        } => {
            for (index, item) in items.iter().enumerate() {
                buf.push_str(&render_grid_item(index + 1, item));
            }
            if *loader_shown {
                buf.push_str("\n_Loading more..._\n");
            }
        }
    }

    buf
}

fn render_grid_item(index: usize, item: &GridItem) -> String {
    let thumbnail = item.thumbnail_url.as_deref().unwrap_or("(no image)");

    format!(
        "[{}] #{} {}\n    {} -> {}\n",
        index,
        item.post_id,
        truncate(&item.aria_label, 80),
        thumbnail,
        item.link.href()
    )
}

/// Render a portfolio page with `active` highlighted in the paginator
pub fn render_portfolio(state: &PortfolioPageState, active: Option<usize>) -> String {
    match state {
        PortfolioPageState::Ready(view) => render_portfolio_view(view, active),
        _ => format!("_{}_\n", state.message().unwrap_or_default()),
    }
}

fn render_portfolio_view(view: &PortfolioView, active: Option<usize>) -> String {
    let portfolio = &view.portfolio;
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", portfolio.name));
    if !portfolio.introduction.is_empty() {
        buf.push_str(&format!("{}\n\n", portfolio.introduction));
    }

    for line in view.contact_lines() {
        buf.push_str(&format!("- **{}:** {}\n", line.kind, line.text));
    }
    buf.push('\n');

    buf.push_str("## Pages\n\n");
    for page in &view.pages {
        let marker = if active == Some(page.index) { ">" } else { " " };
        let kind = match page.kind {
            PortfolioPageKind::Intro => "intro",
            PortfolioPageKind::Project => "project",
            PortfolioPageKind::Section => "section",
        };
        buf.push_str(&format!(
            "{} [{}] {} ({})\n",
            marker, page.index, page.title, kind
        ));
    }
    buf.push('\n');

    let dots: Vec<&str> = paginator_dots(active, view.pagination_count())
        .iter()
        .map(|dot| if dot.active { "(*)" } else { "( )" })
        .collect();
    buf.push_str(&dots.join(" "));
    buf.push('\n');

    buf
}

/// Truncate a string with ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
