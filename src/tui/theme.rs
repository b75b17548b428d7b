//! TUI color semantics and style constants.
//!
//! Maps the engine's presentation tokens onto terminal colors and glyphs,
//! plus the fixed styles for chrome (title, help, selector).

use ratatui::style::{Color, Modifier, Style};

use crate::types::{ColorToken, IconToken, TemperatureUnit, ThermalBand};

// ============================================================================
// BAND TOKENS
// ============================================================================

const ORANGE: Color = Color::Rgb(255, 140, 0);

/// Terminal color for a color token.
pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Blue => Color::Blue,
        ColorToken::Cyan => Color::Cyan,
        ColorToken::Orange => ORANGE,
        ColorToken::Red => Color::Red,
    }
}

/// Glyph for an icon token.
pub fn token_glyph(token: IconToken) -> &'static str {
    match token {
        IconToken::Snowflake => "❄",
        IconToken::Thermometer => "🌡",
        IconToken::Sun => "☀",
        IconToken::Flame => "🔥",
    }
}

/// Bold foreground in the band's color.
pub fn band_style(band: ThermalBand) -> Style {
    Style::new()
        .fg(token_color(band.presentation().color))
        .add_modifier(Modifier::BOLD)
}

/// Accent color for a unit's card and reference block.
pub fn unit_accent(unit: TemperatureUnit) -> Color {
    match unit {
        TemperatureUnit::Celsius => Color::Blue,
        TemperatureUnit::Fahrenheit => ORANGE,
        TemperatureUnit::Kelvin => Color::Magenta,
    }
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Section heading inside the content area.
pub const STYLE_HEADING: Style = Style::new().add_modifier(Modifier::BOLD);

/// Active unit in the selector.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Inactive unit in the selector.
pub const STYLE_UNSELECTED: Style = Style::new().fg(Color::Gray);

/// Input text.
pub const STYLE_INPUT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Placeholder shown when the input is empty.
pub const STYLE_PLACEHOLDER: Style =
    Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);

/// Step number bullets in the usage guide.
pub const STYLE_STEP: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// De-emphasized metadata.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
