//! TUI state algebra: pure types, zero effects.
//!
//! The caller-owned input state (text + unit) lives in [`Form`]. What the
//! screen shows is never edited directly; it is derived from the form
//! after every change, so a stale result cannot outlive the input that
//! produced it.

use crate::input::evaluate;
use crate::types::{ConversionResult, TemperatureUnit};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, PartialEq)]
pub struct App {
    /// What the user has typed and selected.
    pub form: Form,

    /// Derived from `form`; replaced on every form change.
    pub screen: Screen,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// The two pieces of input state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    /// Raw input text, exactly as typed.
    pub input: String,
    /// Selected source unit.
    pub unit: TemperatureUnit,
}

// ============================================================================
// SCREENS
// ============================================================================

/// What the content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Screen {
    /// No admissible input yet: usage guide.
    #[default]
    Guide,

    /// Three result cards plus reference facts.
    Results(ConversionResult),
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the input.
    Insert(char),
    /// Delete the last input character.
    Backspace,
    /// Clear the input.
    Clear,
    /// Select the next unit in selector order.
    NextUnit,
    /// Select the previous unit in selector order.
    PrevUnit,
    /// Select a specific unit.
    SelectUnit(TemperatureUnit),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// The form after the action (possibly unchanged).
    Form(Form),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Empty input with the given unit preselected.
    pub fn new(unit: TemperatureUnit) -> Self {
        App::with_form(Form { input: String::new(), unit })
    }

    /// Build an App whose screen is derived from `form`.
    pub fn with_form(form: Form) -> Self {
        let screen = Screen::derive(&form);
        App { form, screen, should_quit: false }
    }

    /// Replace the form and re-derive the screen.
    pub fn apply(&mut self, form: Form) {
        self.screen = Screen::derive(&form);
        self.form = form;
    }
}

impl Screen {
    /// Results if the form's text admits, the guide otherwise.
    pub fn derive(form: &Form) -> Self {
        match evaluate(&form.input, form.unit) {
            Some(result) => Screen::Results(result),
            None => Screen::Guide,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
