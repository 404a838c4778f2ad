//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- keyboard, mouse, resize,
//!   and focus events from the terminal.

mod terminal;

pub use terminal::*;
