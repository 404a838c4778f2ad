//! Dropdown select supporting single and multi selection.
//!
//! A [`Select`] renders a one-line trigger showing the current value and,
//! while open, a menu overlay listing every option. It never owns the
//! selection: the host passes the current [`Selection`] in, the widget
//! returns [`Message::Changed`] with the complete proposed value, and the
//! host echoes the accepted value back with [`Select::set_value`].
//!
//! The widget owns only its menu state (open or closed, and which row is
//! highlighted while open).
//!
//! # Keyboard (while focused)
//!
//! | Key | Closed | Open |
//! |-----|--------|------|
//! | Enter / Space | open, highlight first row | toggle highlighted option, close |
//! | Up / Down | open, highlight first row | move highlight, clamped at the ends |
//! | Esc | - | close |
//!
//! # Mouse
//!
//! Clicking an option row toggles it and closes the menu. Clicking a badge
//! (multi mode) removes that option, `✓` selects every option, `×` clears the
//! selection, and clicking anywhere else on the trigger opens or closes the
//! menu. Hovering a row highlights it when the terminal reports motion.
//!
//! # Example
//!
//! ```ignore
//! use pickbox_widgets::option::SelectOption;
//! use pickbox_widgets::select::{Message, Select};
//!
//! let options = vec![SelectOption::new("First", 1), SelectOption::new("Second", 2)];
//! let mut select = Select::multi(options.clone(), vec![options[0].clone()]);
//! select.focus();
//!
//! // In the host's update:
//! match msg {
//!     Message::Changed(value) => select.set_value(value),
//!     other => return select.update(other).map(Msg::Select),
//! }
//! ```

use crate::highlight::Highlight;
use crate::key::{Binding, KeyCombination, KeyMap};
use crate::option::SelectOption;
use crate::runeutil::{display_width, truncate};
use crate::selection::Selection;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use pickbox_core::command::Command;
use pickbox_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use std::cell::Cell;

/// Messages for the select component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press forwarded by the host. Ignored unless focused.
    KeyPress(KeyEvent),
    /// A mouse event forwarded by the host, hit-tested against the last render.
    Mouse(MouseEvent),
    /// Open the menu if closed, close it if open.
    Toggle,
    /// Emitted with the complete proposed selection. The host applies it.
    Changed(Selection),
}

/// Where the menu opens relative to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPlacement {
    Above,
    #[default]
    Below,
}

/// Visual style configuration for the [`Select`] component.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Selected label in single mode.
    pub value: Style,
    /// Text shown when nothing is selected.
    pub placeholder: Style,
    /// One selected option in multi mode.
    pub badge: Style,
    /// The `✓`, `×`, divider and caret cells.
    pub controls: Style,
    /// Border of the trigger block while focused.
    pub focused_border: Style,
    /// Menu row.
    pub option: Style,
    /// Patched over `option` for rows that are part of the selection.
    pub selected_option: Style,
    /// Patched over `option` for the highlighted row.
    pub highlighted_option: Style,
    /// Prefix of the highlighted row; other rows get blanks of the same width.
    pub highlight_symbol: String,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            value: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            badge: Style::default().fg(Color::Black).bg(Color::Cyan),
            controls: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            option: Style::default(),
            selected_option: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            highlighted_option: Style::default().bg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// Key bindings for the select component.
///
/// ```ignore
/// use pickbox_widgets::select::SelectKeyBindings;
/// use pickbox_widgets::key::{Binding, KeyCombination};
/// use crossterm::event::KeyCode;
///
/// let mut bindings = SelectKeyBindings::default();
/// bindings.down = Binding::with_keys(
///     vec![KeyCombination::new(KeyCode::Down), KeyCombination::new(KeyCode::Char('j'))],
///     "Down",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SelectKeyBindings {
    /// Open, or toggle the highlighted option and close. Default: Enter, Space
    pub confirm: Binding,
    /// Open, or move the highlight up. Default: Up
    pub up: Binding,
    /// Open, or move the highlight down. Default: Down
    pub down: Binding,
    /// Close without changing the selection. Default: Esc
    pub dismiss: Binding,
}

impl Default for SelectKeyBindings {
    fn default() -> Self {
        Self {
            confirm: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::new(KeyCode::Char(' ')),
                ],
                "Select",
            ),
            up: Binding::new(KeyCombination::new(KeyCode::Up), "Up"),
            down: Binding::new(KeyCombination::new(KeyCode::Down), "Down"),
            dismiss: Binding::new(KeyCombination::new(KeyCode::Esc), "Close"),
        }
    }
}

impl KeyMap for SelectKeyBindings {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.confirm, &self.up, &self.down, &self.dismiss]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.up, &self.down], vec![&self.confirm, &self.dismiss]]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Confirm,
    Up,
    Down,
    Dismiss,
}

impl SelectKeyBindings {
    fn action(&self, key: &KeyEvent) -> Option<KeyAction> {
        if self.confirm.matches(key) {
            Some(KeyAction::Confirm)
        } else if self.up.matches(key) {
            Some(KeyAction::Up)
        } else if self.down.matches(key) {
            Some(KeyAction::Down)
        } else if self.dismiss.matches(key) {
            Some(KeyAction::Dismiss)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Closed,
    Open(Highlight),
}

/// What was drawn on the last `view`, for hit-testing mouse events.
#[derive(Debug, Clone, Copy, Default)]
struct Geometry {
    trigger: Rect,
    inner: Rect,
    menu_rows: Rect,
    menu_offset: usize,
}

/// Cells of the trigger line. Controls are right-aligned one cell apart:
/// `[value ...] ✓ × │ ▾` (the `✓` only in multi mode).
#[derive(Debug, Clone, Copy)]
struct TriggerLayout {
    value: Rect,
    add_all: Option<Rect>,
    clear: Rect,
    divider: Rect,
    caret: Rect,
}

impl TriggerLayout {
    fn new(inner: Rect, multiple: bool) -> Self {
        let row = Rect {
            height: inner.height.min(1),
            ..inner
        };
        let cell = |from_right: u16| match row.right().checked_sub(from_right) {
            Some(x) if x >= row.x && !row.is_empty() => Rect::new(x, row.y, 1, 1),
            _ => Rect::default(),
        };
        let caret = cell(1);
        let divider = cell(3);
        let clear = cell(5);
        let add_all = multiple.then(|| cell(7));
        let leftmost = add_all.unwrap_or(clear);
        let value_width = if leftmost.is_empty() {
            0
        } else {
            leftmost.x.saturating_sub(row.x + 1)
        };
        Self {
            value: Rect {
                width: value_width,
                ..row
            },
            add_all,
            clear,
            divider,
            caret,
        }
    }

    /// Badge cells for `values`, left to right, plus a cell for an overflow
    /// marker when not every badge fits.
    fn badges(&self, values: &[SelectOption]) -> (Vec<(Rect, usize)>, Option<Rect>) {
        let right = self.value.right();
        let mut x = self.value.x;
        let mut cells = Vec::new();
        for (i, option) in values.iter().enumerate() {
            let width = u16::try_from(display_width(&badge_text(option))).unwrap_or(u16::MAX);
            if x.saturating_add(width) > right {
                let overflow = (x < right).then(|| Rect::new(x, self.value.y, 1, 1));
                return (cells, overflow);
            }
            cells.push((Rect::new(x, self.value.y, width, 1), i));
            x = x.saturating_add(width).saturating_add(1);
        }
        (cells, None)
    }
}

fn badge_text(option: &SelectOption) -> String {
    format!("{} ×", option.label)
}

/// A dropdown that picks one option or a set of options.
///
/// See the [module documentation](self) for the interaction model.
pub struct Select {
    options: Vec<SelectOption>,
    value: Selection,
    menu: MenuState,
    focus: bool,
    placeholder: String,
    max_visible: usize,
    placement: MenuPlacement,
    style: SelectStyle,
    block: Option<Block<'static>>,
    menu_block: Option<Block<'static>>,
    key_bindings: SelectKeyBindings,
    geometry: Cell<Geometry>,
}

impl Select {
    /// A single-select dropdown with nothing selected.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self::with_value(options, Selection::Single(None))
    }

    /// A single-select dropdown with `value` as the current selection.
    pub fn single(options: Vec<SelectOption>, value: Option<SelectOption>) -> Self {
        Self::with_value(options, Selection::Single(value))
    }

    /// A multi-select dropdown with `values` as the current selection.
    pub fn multi(options: Vec<SelectOption>, values: Vec<SelectOption>) -> Self {
        Self::with_value(options, Selection::Multi(values))
    }

    /// A dropdown whose mode is the variant of `value`.
    pub fn with_value(options: Vec<SelectOption>, value: Selection) -> Self {
        Self {
            options,
            value,
            menu: MenuState::Closed,
            focus: false,
            placeholder: "Select...".to_string(),
            max_visible: 8,
            placement: MenuPlacement::default(),
            style: SelectStyle::default(),
            block: None,
            menu_block: None,
            key_bindings: SelectKeyBindings::default(),
            geometry: Cell::new(Geometry::default()),
        }
    }

    /// Switch between single and multi mode. Changing mode resets the value
    /// to the empty value of the new mode.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        if self.value.is_multiple() != multiple {
            self.value = Selection::empty(multiple);
        }
        self
    }

    /// Text shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    /// Border/title around the trigger. Its border takes
    /// [`SelectStyle::focused_border`] while focused.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Border around the menu overlay.
    pub fn with_menu_block(mut self, block: Block<'static>) -> Self {
        self.menu_block = Some(block);
        self
    }

    /// Maximum menu rows shown before the menu scrolls.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        if let MenuState::Open(ref mut highlight) = self.menu {
            highlight.set_visible(self.max_visible);
        }
        self
    }

    pub fn with_placement(mut self, placement: MenuPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_key_bindings(mut self, bindings: SelectKeyBindings) -> Self {
        self.key_bindings = bindings;
        self
    }

    pub fn key_bindings(&self) -> &SelectKeyBindings {
        &self.key_bindings
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace the option list. An open menu keeps its highlight, clamped to
    /// the new length.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if let MenuState::Open(ref mut highlight) = self.menu {
            highlight.set_count(self.options.len());
        }
    }

    /// The selection last handed in by the host.
    pub fn value(&self) -> &Selection {
        &self.value
    }

    /// Accept the host's current selection.
    pub fn set_value(&mut self, value: Selection) {
        self.value = value;
    }

    pub fn is_multiple(&self) -> bool {
        self.value.is_multiple()
    }

    /// Give this select keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus. Losing focus always closes the menu.
    pub fn blur(&mut self) {
        self.focus = false;
        self.close_menu();
    }

    pub fn is_open(&self) -> bool {
        matches!(self.menu, MenuState::Open(_))
    }

    /// Open the menu with the first row highlighted. No-op when already open.
    pub fn open_menu(&mut self) {
        if !self.is_open() {
            self.menu = MenuState::Open(Highlight::new(self.options.len(), self.max_visible));
        }
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn toggle_menu(&mut self) {
        if self.is_open() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// The highlighted row while the menu is open and has rows.
    pub fn highlighted_index(&self) -> Option<usize> {
        match self.menu {
            MenuState::Open(highlight) if highlight.count() > 0 => Some(highlight.cursor()),
            _ => None,
        }
    }

    /// Whether `option` is part of the current selection.
    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.value.contains(option)
    }

    /// Propose the empty selection: `Single(None)` or `Multi([])`.
    pub fn clear_selection(&self) -> Command<Message> {
        propose(Some(self.value.cleared()))
    }

    /// Propose every option. Does nothing in single mode.
    pub fn select_all(&self) -> Command<Message> {
        propose(self.value.with_all(&self.options))
    }

    /// Propose toggling `option`: add or remove it in multi mode, pick it in
    /// single mode. Picking the current single value proposes nothing.
    pub fn toggle_option(&self, option: &SelectOption) -> Command<Message> {
        propose(self.value.toggled(option))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if !self.focus || key.kind == KeyEventKind::Release {
            return Command::none();
        }
        let Some(action) = self.key_bindings.action(&key) else {
            return Command::none();
        };

        let MenuState::Open(mut highlight) = self.menu else {
            // Any navigation key only opens a closed menu.
            if action != KeyAction::Dismiss {
                self.open_menu();
            }
            return Command::none();
        };

        match action {
            KeyAction::Confirm => {
                let target = self.options.get(highlight.cursor()).cloned();
                self.close_menu();
                match target {
                    Some(option) => self.toggle_option(&option),
                    None => Command::none(),
                }
            }
            KeyAction::Up | KeyAction::Down => {
                if action == KeyAction::Up {
                    highlight.move_up();
                } else {
                    highlight.move_down();
                }
                self.menu = MenuState::Open(highlight);
                Command::none()
            }
            KeyAction::Dismiss => {
                self.close_menu();
                Command::none()
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Command<Message> {
        let geometry = self.geometry.get();
        let pos = Position::new(mouse.column, mouse.row);
        let row = self
            .is_open()
            .then(|| menu_row_at(&geometry, pos))
            .flatten()
            .filter(|&i| i < self.options.len());

        match mouse.kind {
            MouseEventKind::Moved => {
                if let (Some(i), MenuState::Open(highlight)) = (row, &mut self.menu) {
                    highlight.select(i);
                }
                Command::none()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(i) = row {
                    let option = self.options[i].clone();
                    self.close_menu();
                    return self.toggle_option(&option);
                }
                if !geometry.trigger.contains(pos) {
                    return Command::none();
                }

                let layout = TriggerLayout::new(geometry.inner, self.is_multiple());
                if layout.clear.contains(pos) {
                    return self.clear_selection();
                }
                if layout.add_all.is_some_and(|r| r.contains(pos)) {
                    return self.select_all();
                }
                if let Selection::Multi(values) = &self.value {
                    let (badges, _) = layout.badges(values);
                    if let Some(&(_, i)) = badges.iter().find(|(r, _)| r.contains(pos)) {
                        return self.toggle_option(&values[i]);
                    }
                }
                self.toggle_menu();
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn render_trigger(&self, frame: &mut Frame, inner: Rect) {
        let layout = TriggerLayout::new(inner, self.is_multiple());

        let placeholder = || {
            Paragraph::new(Span::styled(
                truncate(&self.placeholder, layout.value.width as usize, "…"),
                self.style.placeholder,
            ))
        };

        match &self.value {
            Selection::Single(Some(option)) => {
                let text = truncate(&option.label, layout.value.width as usize, "…");
                frame.render_widget(
                    Paragraph::new(Span::styled(text, self.style.value)),
                    layout.value,
                );
            }
            Selection::Single(None) => frame.render_widget(placeholder(), layout.value),
            Selection::Multi(values) if values.is_empty() => {
                frame.render_widget(placeholder(), layout.value)
            }
            Selection::Multi(values) => {
                let (badges, overflow) = layout.badges(values);
                for (rect, i) in badges {
                    frame.render_widget(
                        Paragraph::new(Span::styled(badge_text(&values[i]), self.style.badge)),
                        rect,
                    );
                }
                if let Some(rect) = overflow {
                    frame.render_widget(Paragraph::new(Span::styled("…", self.style.controls)), rect);
                }
            }
        }

        let caret = if self.is_open() { "▴" } else { "▾" };
        let controls = [
            (layout.add_all, "✓"),
            (Some(layout.clear), "×"),
            (Some(layout.divider), "│"),
            (Some(layout.caret), caret),
        ];
        for (rect, symbol) in controls {
            if let Some(rect) = rect {
                frame.render_widget(Paragraph::new(Span::styled(symbol, self.style.controls)), rect);
            }
        }
    }

    fn menu_area(&self, anchor: Rect, bounds: Rect) -> Rect {
        let rows = u16::try_from(self.options.len().min(self.max_visible)).unwrap_or(u16::MAX);
        if rows == 0 {
            return Rect::default();
        }
        let height = if self.menu_block.is_some() {
            rows.saturating_add(2)
        } else {
            rows
        };
        let area = match self.placement {
            MenuPlacement::Above => Rect::new(
                anchor.x,
                anchor.y.saturating_sub(height),
                anchor.width,
                height.min(anchor.y),
            ),
            MenuPlacement::Below => Rect::new(anchor.x, anchor.bottom(), anchor.width, height),
        };
        area.intersection(bounds)
    }

    /// Draw the open menu and return the rect holding its rows along with
    /// the index of the first row drawn.
    fn render_menu(&self, frame: &mut Frame, anchor: Rect, highlight: Highlight) -> (Rect, usize) {
        let area = self.menu_area(anchor, frame.area());
        if area.is_empty() {
            return (Rect::default(), 0);
        }

        frame.render_widget(Clear, area);
        let rows = match self.menu_block {
            Some(ref block) => {
                let inner = block.inner(area);
                frame.render_widget(block.clone(), area);
                inner
            }
            None => area,
        };

        let symbol_width = display_width(&self.style.highlight_symbol);
        let blank = " ".repeat(symbol_width);
        // A menu clipped by the screen edge shows fewer rows than
        // `max_visible`; scroll further so the highlighted row stays drawn.
        let offset = highlight
            .offset()
            .max((highlight.cursor() + 1).saturating_sub(rows.height as usize));
        for (i, option) in self
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows.height as usize)
        {
            let row = Rect {
                y: rows.y + (i - offset) as u16,
                height: 1,
                ..rows
            };
            let highlighted = i == highlight.cursor();
            let mut style = self.style.option;
            if self.is_selected(option) {
                style = style.patch(self.style.selected_option);
            }
            if highlighted {
                style = style.patch(self.style.highlighted_option);
            }
            let prefix = if highlighted {
                self.style.highlight_symbol.as_str()
            } else {
                blank.as_str()
            };
            let label_width = (row.width as usize).saturating_sub(symbol_width);
            let text = format!("{prefix}{}", truncate(&option.label, label_width, "…"));
            frame.render_widget(Paragraph::new(Span::styled(text, style)).style(style), row);
        }
        (rows, offset)
    }
}

fn propose(next: Option<Selection>) -> Command<Message> {
    match next {
        Some(selection) => Command::message(Message::Changed(selection)),
        None => Command::none(),
    }
}

fn menu_row_at(geometry: &Geometry, pos: Position) -> Option<usize> {
    geometry
        .menu_rows
        .contains(pos)
        .then(|| geometry.menu_offset + (pos.y - geometry.menu_rows.y) as usize)
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            Message::Toggle => {
                self.toggle_menu();
                Command::none()
            }
            Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let inner = match self.block {
            Some(ref block) => {
                let block = if self.focus {
                    block.clone().border_style(self.style.focused_border)
                } else {
                    block.clone()
                };
                let inner = block.inner(area);
                frame.render_widget(block, area);
                inner
            }
            None => area,
        };

        if !inner.is_empty() {
            self.render_trigger(frame, inner);
        }

        let mut geometry = Geometry {
            trigger: area,
            inner,
            ..Geometry::default()
        };
        if let MenuState::Open(highlight) = self.menu {
            let (rows, offset) = self.render_menu(frame, area, highlight);
            geometry.menu_rows = rows;
            geometry.menu_offset = offset;
        }
        self.geometry.set(geometry);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
