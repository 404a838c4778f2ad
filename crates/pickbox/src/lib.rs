//! **pickbox** -- keyboard and mouse driven select dropdowns for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need to put a
//! dropdown in a terminal application from a single dependency:
//!
//! ```toml
//! [dependencies]
//! pickbox = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`pickbox_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`pickbox_widgets`]
//!   (the select widget and the option and selection types it works with).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use pickbox::widgets::option::SelectOption;
//! use pickbox::widgets::select::{self, Select};
//! use pickbox::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct App {
//!     fruit: Select,
//! }
//!
//! enum Msg {
//!     Fruit(select::Message),
//!     Terminal(TerminalEvent),
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let options = vec![SelectOption::new("Apple", 1), SelectOption::new("Pear", 2)];
//!         let mut fruit = Select::new(options);
//!         fruit.focus();
//!         (App { fruit }, Command::enable_mouse_capture())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Fruit(select::Message::Changed(value)) => {
//!                 self.fruit.set_value(value);
//!                 Command::none()
//!             }
//!             Msg::Fruit(m) => self.fruit.update(m).map(Msg::Fruit),
//!             Msg::Terminal(TerminalEvent::Key(key)) => {
//!                 self.fruit.update(select::Message::KeyPress(key)).map(Msg::Fruit)
//!             }
//!             Msg::Terminal(_) => Command::none(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.fruit.view(frame, ratatui::layout::Rect { height: 1, ..area });
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         vec![terminal_events(|e| Some(Msg::Terminal(e)))]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     pickbox::run::<App>(()).await.unwrap();
//! }
//! ```

pub use pickbox_core::*;
pub mod widgets {
    pub use pickbox_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
