//! Pure rendering: map App state to ratatui widget trees.
//!
//! The frame is always title / input panel / content / help. The content
//! area dispatches on the current Screen. Widget-building functions are
//! pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::engine::classify;
use crate::reference::{SCALE_FACTS, USAGE_STEPS};
use crate::report::format_value;
use crate::types::{ConversionResult, TemperatureUnit};

use super::state::{App, Form, Screen};
use super::theme;

const PLACEHOLDER: &str = "Enter temperature value";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(4), // input panel
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_input_panel(&app.form, frame, chunks[1]);

    match &app.screen {
        Screen::Guide => render_guide(frame, chunks[2]),
        Screen::Results(result) => render_results(result, frame, chunks[2]),
    }

    frame.render_widget(render_help(&app.screen), chunks[3]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("🌡 Temperature Converter", theme::STYLE_TITLE),
        Span::styled(
            "  Convert between Celsius, Fahrenheit, and Kelvin instantly",
            theme::STYLE_DIM,
        ),
    ]))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Guide => "[type] value  [Tab/←→] unit  [F1-F3] °C/°F/K  [Esc] quit",
        Screen::Results(_) => "[type] value  [Tab/←→] unit  [^U] clear  [Esc] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// INPUT PANEL
// ============================================================================

fn render_input_panel(form: &Form, frame: &mut Frame, area: Rect) {
    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    let text_line = if form.input.is_empty() {
        Line::from(vec![
            Span::styled("▏", theme::STYLE_INPUT),
            Span::styled(PLACEHOLDER, theme::STYLE_PLACEHOLDER),
        ])
    } else {
        Line::from(vec![
            Span::styled(form.input.clone(), theme::STYLE_INPUT),
            Span::styled("▏", theme::STYLE_INPUT),
        ])
    };

    let input = Paragraph::new(text_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Enter Temperature ", theme::STYLE_HEADING)),
    );
    frame.render_widget(input, halves[0]);

    let selector = Paragraph::new(unit_selector_lines(form.unit)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Original Unit ", theme::STYLE_HEADING)),
    );
    frame.render_widget(selector, halves[1]);
}

/// One line of symbols, one line of names; the active unit is highlighted.
fn unit_selector_lines(active: TemperatureUnit) -> Vec<Line<'static>> {
    let style_for = |unit: TemperatureUnit| {
        if unit == active {
            theme::STYLE_SELECTED
        } else {
            theme::STYLE_UNSELECTED
        }
    };

    let symbols = TemperatureUnit::ALL
        .iter()
        .flat_map(|&unit| {
            [
                Span::styled(format!(" {:^10} ", unit.symbol()), style_for(unit)),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();

    let names = TemperatureUnit::ALL
        .iter()
        .flat_map(|&unit| {
            [
                Span::styled(format!(" {:^10} ", unit.name()), style_for(unit)),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();

    vec![Line::from(symbols), Line::from(names)]
}

// ============================================================================
// SCREEN: GUIDE
// ============================================================================

fn render_guide(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (i, step) in USAGE_STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", i + 1), theme::STYLE_STEP),
            Span::raw(format!("  {}", step)),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" How to Use ", theme::STYLE_HEADING)),
    );
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: RESULTS
// ============================================================================

fn render_results(result: &ConversionResult, frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(5), // cards
        Constraint::Min(0),    // references
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(rows[0]);

    for (unit, column) in TemperatureUnit::ALL.into_iter().zip(columns.iter()) {
        frame.render_widget(result_card(result.get(unit), unit), *column);
    }

    render_references(frame, rows[1]);
}

/// One card: icon + name, value, band. Colored by the card's own band.
fn result_card(value: f64, unit: TemperatureUnit) -> Paragraph<'static> {
    let band = classify(value, unit);
    let style = theme::band_style(band);
    let glyph = theme::token_glyph(band.presentation().icon);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} {}", glyph, unit.name()), style),
            Span::styled(format!("  {}", unit.symbol()), theme::STYLE_DIM),
        ]),
        Line::from(Span::styled(
            format!("{}{}", format_value(value), unit.value_suffix()),
            style,
        )),
        Line::from(Span::styled(band.label(), theme::STYLE_DIM)),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme::unit_accent(unit))),
    )
}

fn render_references(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Temperature Scale References ", theme::STYLE_HEADING));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(inner);

    for (scale, column) in SCALE_FACTS.iter().zip(columns.iter()) {
        let accent = Style::new().fg(theme::unit_accent(scale.unit));
        let title = Span::styled(scale.unit.name(), accent.add_modifier(Modifier::BOLD));
        let mut lines = vec![Line::from(title)];
        lines.extend(scale.facts.iter().map(|fact| Line::from(Span::styled(*fact, accent))));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), *column);
    }
}

// ============================================================================
// TESTS
// ============================================================================
