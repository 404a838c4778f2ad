//! Core runtime for **pickbox**.
//!
//! `pickbox-core` provides the traits, types, and runtime that host pickbox
//! widgets. The design follows the [Elm Architecture]: a program is a pure
//! **init -> update -> view** cycle, with side effects pushed to the edges
//! through [`Command`]s and [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect or message proposed by an update |
//! | [`Subscription`] | Long-lived event source (terminal events) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! # Ownership of state
//!
//! Widgets keep only their transient UI state. Anything the application
//! cares about (such as the current selection of a dropdown) is owned by the
//! model: the widget proposes a change by returning a message, the model
//! stores it and hands the new value back to the widget.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{Subscription, SubscriptionId};
pub use subscriptions::terminal_events;

/// Run a pickbox application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
