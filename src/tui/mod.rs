//! Terminal front end for the converter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Form, Screen, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Colors and glyphs for presentation tokens
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
