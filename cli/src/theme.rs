//! Color palette, light/dark schemes, and rank badges.
//!
//! Colors are kept as hex strings and converted to the nearest xterm-256
//! index at render time.

use clap::ValueEnum;

pub mod palette {
    pub const PRIMARY: &str = "#6366f1";
    pub const SECONDARY: &str = "#8b5cf6";
    pub const SUCCESS: &str = "#10b981";
    pub const WARNING: &str = "#f59e0b";
    pub const DANGER: &str = "#ef4444";
    pub const BACKGROUND: &str = "#f9fafb";
    pub const BACKGROUND_DARK: &str = "#111827";
    pub const CARD: &str = "#ffffff";
    pub const CARD_DARK: &str = "#1f2937";
    pub const TEXT: &str = "#111827";
    pub const TEXT_DARK: &str = "#f9fafb";
    pub const TEXT_SECONDARY: &str = "#6b7280";
    pub const BORDER: &str = "#e5e7eb";
    pub const BORDER_DARK: &str = "#374151";
    pub const RATING_BADGE: &str = "#f1f5f9";
    pub const RATING_BADGE_DARK: &str = "#1e293b";

    pub const RANK_1: &str = "#fbbf24";
    pub const RANK_2: &str = "#94a3b8";
    pub const RANK_3: &str = "#f97316";

    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#ffffff";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeColors {
    pub text: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub rating_badge: &'static str,
    pub tint: &'static str,
    pub tab_icon_default: &'static str,
    pub tab_icon_selected: &'static str,
}

impl Scheme {
    #[must_use]
    pub fn colors(self) -> SchemeColors {
        match self {
            Self::Light => SchemeColors {
                text: palette::TEXT,
                background: palette::BACKGROUND,
                card: palette::CARD,
                border: palette::BORDER,
                rating_badge: palette::RATING_BADGE,
                tint: palette::PRIMARY,
                tab_icon_default: palette::TEXT_SECONDARY,
                tab_icon_selected: palette::PRIMARY,
            },
            Self::Dark => SchemeColors {
                text: palette::TEXT_DARK,
                background: palette::BACKGROUND_DARK,
                card: palette::CARD_DARK,
                border: palette::BORDER_DARK,
                rating_badge: palette::RATING_BADGE_DARK,
                tint: palette::PRIMARY,
                tab_icon_default: palette::TEXT_SECONDARY,
                tab_icon_selected: palette::PRIMARY,
            },
        }
    }
}

// =============================================================================
// RANK BADGE
// =============================================================================

/// Colors for the rank cell of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub background: &'static str,
    pub foreground: &'static str,
    pub bold: bool,
}

/// Podium ranks get medal colors; everyone else sits on the card color.
#[must_use]
pub fn rank_badge(rank: u64, scheme: Scheme) -> Badge {
    let colors = scheme.colors();
    match rank {
        1 => Badge { background: palette::RANK_1, foreground: palette::BLACK, bold: true },
        2 => Badge { background: palette::RANK_2, foreground: palette::BLACK, bold: true },
        3 => Badge { background: palette::RANK_3, foreground: palette::WHITE, bold: true },
        _ => Badge { background: colors.card, foreground: colors.text, bold: false },
    }
}

// =============================================================================
// TERMINAL COLORS
// =============================================================================

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Nearest xterm-256 color index for a `#rrggbb` string.
#[must_use]
pub fn ansi256(hex: &str) -> Option<u8> {
    let (r, g, b) = parse_hex(hex)?;

    let (ri, gi, bi) = (nearest_level(r), nearest_level(g), nearest_level(b));
    let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    // Grayscale ramp 232..=255 covers levels 8, 18, ..., 238.
    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    let gray_step = (avg.saturating_sub(8) + 5) / 10;
    let gray_step = gray_step.min(23);
    let gray_level = u8::try_from(8 + 10 * gray_step).ok()?;
    let gray_index = 232 + usize::from(gray_step);

    let index = if distance((r, g, b), (gray_level, gray_level, gray_level)) < distance((r, g, b), cube) {
        gray_index
    } else {
        cube_index
    };
    u8::try_from(index).ok()
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn nearest_level(c: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| level.abs_diff(c))
        .map_or(0, |(i, _)| i)
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
