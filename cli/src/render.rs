//! Terminal rendering for leaderboard rows, headers, and the tab bar.

use console::Style;
use standings::RankedUser;

use crate::theme::{Badge, Scheme, ansi256, palette, rank_badge};

const RANK_WIDTH: usize = 6;
const NAME_WIDTH: usize = 28;
const RATING_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Leaderboard,
    Search,
}

impl Tab {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Leaderboard => "Leaderboard",
            Self::Search => "Search",
        }
    }
}

/// Foreground style for a hex color; falls back to an unstyled `Style`.
fn fg(hex: &str) -> Style {
    ansi256(hex).map_or_else(Style::new, |c| Style::new().color256(c))
}

/// Adds a hex background to `style` when the color converts.
fn on(style: Style, hex: &str) -> Style {
    match ansi256(hex) {
        Some(bg) => style.on_color256(bg),
        None => style,
    }
}

fn badge_style(badge: Badge) -> Style {
    let mut style = on(fg(badge.foreground), badge.background);
    if badge.bold {
        style = style.bold();
    }
    style
}

/// `12345678` -> `12,345,678`.
#[must_use]
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[must_use]
pub fn table_header() -> String {
    format!("{:>RANK_WIDTH$}  {:<NAME_WIDTH$} {:>RATING_WIDTH$}", "RANK", "USERNAME", "RATING")
}

/// Unstyled row text, column aligned with `table_header`.
#[must_use]
pub fn row_text(user: &RankedUser) -> String {
    format!(
        "{:>RANK_WIDTH$}  {:<NAME_WIDTH$} {:>RATING_WIDTH$}",
        user.global_rank, user.username, user.rating
    )
}

/// Row with the rank badge, scheme text color, and the rating on its own badge.
#[must_use]
pub fn styled_row(user: &RankedUser, scheme: Scheme) -> String {
    if !console::colors_enabled() {
        return row_text(user);
    }
    let colors = scheme.colors();
    let rank = format!("{:>RANK_WIDTH$}", user.global_rank);
    let name = format!("{:<NAME_WIDTH$}", user.username);
    let rating = format!("{:>RATING_WIDTH$}", user.rating);
    format!(
        "{}  {} {}",
        badge_style(rank_badge(user.global_rank, scheme)).apply_to(rank),
        fg(colors.text).apply_to(name),
        on(fg(colors.tint).bold(), colors.rating_badge).apply_to(rating),
    )
}

#[must_use]
pub fn tab_bar(active: Tab, scheme: Scheme) -> String {
    let colors = scheme.colors();
    [Tab::Leaderboard, Tab::Search]
        .into_iter()
        .map(|tab| {
            if tab == active {
                on(fg(colors.background).bold(), colors.tab_icon_selected).apply_to(tab.title()).to_string()
            } else {
                fg(colors.tab_icon_default).apply_to(tab.title()).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

#[must_use]
pub fn title(text: &str, scheme: Scheme) -> String {
    fg(scheme.colors().text).bold().apply_to(text).to_string()
}

#[must_use]
pub fn subtitle(text: &str) -> String {
    fg(palette::TEXT_SECONDARY).apply_to(text).to_string()
}

#[must_use]
pub fn separator(scheme: Scheme) -> String {
    let width = RANK_WIDTH + 2 + NAME_WIDTH + 1 + RATING_WIDTH;
    fg(scheme.colors().border).apply_to("─".repeat(width)).to_string()
}

#[must_use]
pub fn error_line(message: &str) -> String {
    fg(palette::DANGER).apply_to(format!("! {message}")).to_string()
}

#[must_use]
pub fn success_line(message: &str) -> String {
    fg(palette::SUCCESS).apply_to(message).to_string()
}

#[must_use]
pub fn notice_line(message: &str) -> String {
    fg(palette::WARNING).apply_to(message).to_string()
}

/// Leaderboard screen header: title plus player count.
#[must_use]
pub fn leaderboard_header(total_users: u64, scheme: Scheme) -> String {
    format!(
        "{}\n{}",
        title(Tab::Leaderboard.title(), scheme),
        subtitle(&format!("{} players competing", thousands(total_users)))
    )
}

/// Search screen header.
#[must_use]
pub fn search_header(scheme: Scheme) -> String {
    format!(
        "{}\n{}",
        title("Search Player", scheme),
        fg(palette::SECONDARY).apply_to("Find any player and see their live global rank")
    )
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
