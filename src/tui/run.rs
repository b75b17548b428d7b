//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: the loop blocks on the next terminal event, applies
//! the pure update and redraws. Every conversion finishes before the next
//! key is read.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{debug, info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::types::TemperatureUnit;

use super::state::{Action, App, Screen, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::Clear),
            _ => None,
        };
    }

    match key.code {
        // Editing
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::Backspace),

        // Unit selection
        KeyCode::Tab | KeyCode::Right => Some(Action::NextUnit),
        KeyCode::BackTab | KeyCode::Left => Some(Action::PrevUnit),
        KeyCode::F(1) => Some(Action::SelectUnit(TemperatureUnit::Celsius)),
        KeyCode::F(2) => Some(Action::SelectUnit(TemperatureUnit::Fahrenheit)),
        KeyCode::F(3) => Some(Action::SelectUnit(TemperatureUnit::Kelvin)),

        KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
pub fn run(initial_unit: TemperatureUnit) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(initial_unit);
    info!("TUI started with unit {}", initial_unit);

    let outcome = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    info!("TUI exited");
    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Resize and mouse events just fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            // Windows reports releases too; only presses edit the form.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = map_key(key) {
                step(app, &action);
            }
        }
    }
}

/// Apply one action to the app, re-deriving the screen.
pub fn step(app: &mut App, action: &Action) {
    let previous_unit = app.form.unit;

    match update(app.form.clone(), action) {
        Transition::Form(form) => {
            if form.unit != previous_unit {
                debug!("Unit changed: {} -> {}", previous_unit, form.unit);
            }
            app.apply(form);
            match &app.screen {
                Screen::Results(result) => debug!("Result: {:?}", result),
                Screen::Guide => debug!("No result for input {:?}", app.form.input),
            }
        }
        Transition::Quit => {
            app.should_quit = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn ctrl_u_clears() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Clear));
    }

    #[test]
    fn plain_characters_insert() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), Some(Action::Insert('7')));
        assert_eq!(map_key(key(KeyCode::Char('-'))), Some(Action::Insert('-')));
        // 'q' is text, not quit: the input is free-form
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Insert('q')));
    }

    #[test]
    fn shifted_characters_insert() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(map_key(plus), Some(Action::Insert('+')));
    }

    #[test]
    fn tab_and_arrows_cycle_units() {
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::NextUnit));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::NextUnit));
        assert_eq!(map_key(key(KeyCode::BackTab)), Some(Action::PrevUnit));
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::PrevUnit));
    }

    #[test]
    fn function_keys_select_units() {
        assert_eq!(
            map_key(key(KeyCode::F(2))),
            Some(Action::SelectUnit(TemperatureUnit::Fahrenheit))
        );
        assert_eq!(map_key(key(KeyCode::F(9))), None);
    }

    #[test]
    fn esc_quits() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Home)), None);
    }

    #[test]
    fn typing_then_switching_unit_recomputes() {
        let mut app = App::new(TemperatureUnit::Celsius);
        for c in "98.6".chars() {
            step(&mut app, &Action::Insert(c));
        }
        step(&mut app, &Action::SelectUnit(TemperatureUnit::Fahrenheit));

        match app.screen {
            Screen::Results(r) => assert_eq!(r.celsius, 37.0),
            other => panic!("Expected Results, got {:?}", other),
        }
    }

    #[test]
    fn deleting_everything_returns_to_guide() {
        let mut app = App::new(TemperatureUnit::Celsius);
        step(&mut app, &Action::Insert('5'));
        assert!(matches!(app.screen, Screen::Results(_)));

        step(&mut app, &Action::Backspace);
        assert_eq!(app.screen, Screen::Guide);
    }

    #[test]
    fn quit_sets_flag_and_keeps_form() {
        let mut app = App::new(TemperatureUnit::Kelvin);
        step(&mut app, &Action::Insert('1'));
        step(&mut app, &Action::Quit);
        assert!(app.should_quit);
        assert_eq!(app.form.input, "1");
    }
}
