//! thermoconv: convert temperatures between Celsius, Fahrenheit and Kelvin.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod reference;
pub mod report;
pub mod tui;
pub mod types;
