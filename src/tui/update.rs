//! Pure state transitions: (Form, Action) → Transition.
//!
//! Fully testable without a terminal. Every action except Quit yields a
//! form; the caller re-derives the screen from it.

use super::state::{Action, Form, Transition};

/// Longest input we keep. Further keystrokes are ignored.
pub const MAX_INPUT_LEN: usize = 32;

/// Pure state transition function.
pub fn update(form: Form, action: &Action) -> Transition {
    let Form { mut input, unit } = form;

    match action {
        Action::Insert(c) => {
            if !c.is_control() && input.chars().count() < MAX_INPUT_LEN {
                input.push(*c);
            }
            Transition::Form(Form { input, unit })
        }
        Action::Backspace => {
            input.pop();
            Transition::Form(Form { input, unit })
        }
        Action::Clear => Transition::Form(Form { input: String::new(), unit }),
        Action::NextUnit => Transition::Form(Form { input, unit: unit.next() }),
        Action::PrevUnit => Transition::Form(Form { input, unit: unit.prev() }),
        Action::SelectUnit(selected) => Transition::Form(Form { input, unit: *selected }),
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================
