//! The select dropdown widget for the **pickbox** TUI toolkit.
//!
//! [`select::Select`] implements [`pickbox_core::Component`], so it can be
//! embedded inside any [`pickbox_core::Model`] and placed anywhere in a
//! [`ratatui`] layout. The host owns the selected value: the widget proposes
//! changes with [`select::Message::Changed`] and the host hands the accepted
//! value back with [`select::Select::set_value`].
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | Single or multi select dropdown with a keyboard-driven menu |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`option`] | [`SelectOption`](option::SelectOption) and its identity value |
//! | [`selection`] | [`Selection`](selection::Selection) values and the changes a dropdown can propose |
//! | [`highlight`] | Clamped highlight cursor with a scroll window |
//! | [`key`] | Key-binding helpers and the [`KeyMap`](key::KeyMap) trait |
//! | [`chrome`] | Border blocks for triggers and menus |
//! | [`runeutil`] | Unicode-aware string width and truncation utilities |

pub mod chrome;
pub mod highlight;
pub mod key;
pub mod option;
pub mod runeutil;
pub mod select;
pub mod selection;
