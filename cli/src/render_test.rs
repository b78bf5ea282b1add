use super::*;

fn user(rank: u64, name: &str, rating: u32) -> RankedUser {
    RankedUser { global_rank: rank, id: rank, username: name.into(), rating }
}

#[test]
fn thousands_separators() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(999), "999");
    assert_eq!(thousands(1000), "1,000");
    assert_eq!(thousands(10_000), "10,000");
    assert_eq!(thousands(1_234_567), "1,234,567");
}

#[test]
fn row_aligns_with_header() {
    let header = table_header();
    let row = row_text(&user(12, "priya_iyer", 3105));
    assert_eq!(header.len(), row.len());
    assert!(row.starts_with("    12  priya_iyer"));
    assert!(row.ends_with("  3105"));

    let rating_col = header.find("RATING").unwrap();
    assert_eq!(&row[rating_col..], "  3105");
}

#[test]
fn styled_row_keeps_the_text() {
    let row = console::strip_ansi_codes(&styled_row(&user(1, "rahul", 4999), Scheme::Dark)).into_owned();
    assert_eq!(row, row_text(&user(1, "rahul", 4999)));
}

#[test]
fn tab_bar_lists_both_tabs() {
    let bar = console::strip_ansi_codes(&tab_bar(Tab::Search, Scheme::Light)).into_owned();
    assert_eq!(bar, "Leaderboard   Search");
}

#[test]
fn leaderboard_header_counts_players() {
    let header = console::strip_ansi_codes(&leaderboard_header(10_000, Scheme::Light)).into_owned();
    assert_eq!(header, "Leaderboard\n10,000 players competing");
}

#[test]
fn rating_and_active_tab_sit_on_backgrounds() {
    console::set_colors_enabled(true);
    let badge_bg = format!("48;5;{}", ansi256(palette::RATING_BADGE_DARK).unwrap());
    let row = styled_row(&user(42, "neha_sharma", 2000), Scheme::Dark);
    assert!(row.contains(&badge_bg), "rating badge missing from {row:?}");

    let active_fg = format!("38;5;{}", ansi256(palette::BACKGROUND).unwrap());
    let bar = tab_bar(Tab::Leaderboard, Scheme::Light);
    assert!(bar.contains(&active_fg), "active tab text missing from {bar:?}");
}
