//! # Dropdown Example
//!
//! Two dropdowns over the same five options, one multi-select and one
//! single-select, each holding its value in the host model:
//! - Routing terminal events from one subscription to the focused dropdown
//! - Applying `select::Message::Changed` in the host and echoing it back
//! - Tab / Shift-Tab and mouse clicks to move focus
//!
//! Set `PICKBOX_LOG=/tmp/pickbox.log` to record runtime events and every
//! selection change.
//!
//! Run with: `cargo run --example dropdown`

use pickbox::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pickbox::ratatui::layout::{Constraint, Layout, Position, Rect};
use pickbox::ratatui::style::{Color, Modifier, Style};
use pickbox::ratatui::text::{Line, Span};
use pickbox::ratatui::widgets::{Block, Borders, Paragraph};
use pickbox::ratatui::Frame;
use pickbox::widgets::chrome::{menu_block, trigger_block};
use pickbox::widgets::key::{Binding, KeyCombination, KeyMap};
use pickbox::widgets::option::SelectOption;
use pickbox::widgets::select::{self, Select};
use pickbox::widgets::selection::Selection;
use pickbox::{
    log_to_file, terminal_events, Command, Component, Model, ProgramOptions, Subscription,
    TerminalEvent,
};
use std::cell::Cell;
use std::fs::File;
use std::io::Write;

const LOG_ENV: &str = "PICKBOX_LOG";

struct DropdownApp {
    multi: Select,
    single: Select,
    multi_value: Selection,
    single_value: Selection,
    focused: Field,
    keys: AppKeys,
    log: Option<File>,
    // Trigger areas from the last frame, for click-to-focus.
    areas: Cell<[Rect; 2]>,
}

struct AppKeys {
    switch: Binding,
    quit: Binding,
}

impl Default for AppKeys {
    fn default() -> Self {
        Self {
            switch: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Tab),
                    KeyCombination::with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT),
                ],
                "Switch",
            ),
            quit: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Char('q')),
                    KeyCombination::with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
                ],
                "Quit",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Multi,
    Single,
}

#[derive(Debug)]
enum Msg {
    Multi(select::Message),
    Single(select::Message),
    Terminal(TerminalEvent),
    FocusNext,
    Quit,
}

fn options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth"]
        .into_iter()
        .zip(1..)
        .map(|(label, value): (&str, i64)| SelectOption::new(label, value))
        .collect()
}

fn describe(value: &Selection) -> String {
    if value.is_empty() {
        return "(none)".to_string();
    }
    value
        .options()
        .iter()
        .map(|o| format!("{} ({})", o.label, o.value))
        .collect::<Vec<_>>()
        .join(", ")
}

impl DropdownApp {
    fn select_mut(&mut self, field: Field) -> &mut Select {
        match field {
            Field::Multi => &mut self.multi,
            Field::Single => &mut self.single,
        }
    }

    fn focus(&mut self, field: Field) {
        self.focused = field;
        self.multi.blur();
        self.single.blur();
        self.select_mut(field).focus();
    }

    fn route(&mut self, field: Field, msg: select::Message) -> Command<Msg> {
        let cmd = self.select_mut(field).update(msg);
        match field {
            Field::Multi => cmd.map(Msg::Multi),
            Field::Single => cmd.map(Msg::Single),
        }
    }

    fn apply(&mut self, field: Field, value: Selection) {
        let line = format!("{field:?} changed: {}", describe(&value));
        if let Some(ref mut f) = self.log {
            writeln!(f, "{line}").ok();
        }
        match field {
            Field::Multi => {
                self.multi.set_value(value.clone());
                self.multi_value = value;
            }
            Field::Single => {
                self.single.set_value(value.clone());
                self.single_value = value;
            }
        }
    }

    fn open_field(&self) -> Option<Field> {
        if self.multi.is_open() {
            Some(Field::Multi)
        } else if self.single.is_open() {
            Some(Field::Single)
        } else {
            None
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Msg> {
        if key.kind == KeyEventKind::Release {
            return Command::none();
        }
        if self.keys.quit.matches(&key) {
            Command::message(Msg::Quit)
        } else if self.keys.switch.matches(&key) {
            Command::message(Msg::FocusNext)
        } else {
            self.route(self.focused, select::Message::KeyPress(key))
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Command<Msg> {
        let pos = Position::new(mouse.column, mouse.row);
        let click = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        let [multi, single] = self.areas.get();

        // An open menu may cover the other trigger, so it sees the event first.
        if let Some(field) = self.open_field() {
            let area = if field == Field::Multi { multi } else { single };
            let cmd = self.route(field, select::Message::Mouse(mouse));
            let consumed = !cmd.is_none()
                || !self.select_mut(field).is_open()
                || area.contains(pos);
            if !click || consumed {
                return cmd;
            }
            // The click missed the open dropdown: close it and let the click
            // land wherever it was aimed.
            self.select_mut(field).close_menu();
        }

        if !click {
            return Command::none();
        }
        let field = if multi.contains(pos) {
            Field::Multi
        } else if single.contains(pos) {
            Field::Single
        } else {
            return Command::none();
        };
        self.focus(field);
        self.route(field, select::Message::Mouse(mouse))
    }

    fn help_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        let app_keys = [&self.keys.switch, &self.keys.quit];
        for binding in self.multi.key_bindings().short_help().into_iter().chain(app_keys) {
            spans.push(Span::styled(
                binding.keys_label(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(" {}  ", binding.description.to_lowercase()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Model for DropdownApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let opts = options();
        let mut multi = Select::multi(opts.clone(), vec![opts[0].clone()])
            .with_placeholder("Pick any number")
            .with_block(trigger_block(" Multi select "))
            .with_menu_block(menu_block())
            .with_max_visible(4);
        multi.focus();
        let single = Select::single(opts.clone(), Some(opts[0].clone()))
            .with_placeholder("Pick one")
            .with_block(trigger_block(" Single select "))
            .with_menu_block(menu_block());

        let log = std::env::var_os(LOG_ENV).and_then(|path| log_to_file(path).ok());

        (
            DropdownApp {
                multi_value: multi.value().clone(),
                single_value: single.value().clone(),
                multi,
                single,
                focused: Field::Multi,
                keys: AppKeys::default(),
                log,
                areas: Cell::new([Rect::default(); 2]),
            },
            Command::batch([
                Command::enable_mouse_capture(),
                Command::enable_focus_reporting(),
                Command::set_title("pickbox dropdowns"),
            ]),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Multi(select::Message::Changed(value)) => {
                self.apply(Field::Multi, value);
                Command::none()
            }
            Msg::Single(select::Message::Changed(value)) => {
                self.apply(Field::Single, value);
                Command::none()
            }
            Msg::Multi(m) => self.route(Field::Multi, m),
            Msg::Single(m) => self.route(Field::Single, m),
            Msg::Terminal(TerminalEvent::Key(key)) => self.handle_key(key),
            Msg::Terminal(TerminalEvent::Mouse(mouse)) => self.handle_mouse(mouse),
            Msg::Terminal(TerminalEvent::FocusLost) => {
                self.multi.blur();
                self.single.blur();
                Command::none()
            }
            Msg::Terminal(TerminalEvent::FocusGained) => {
                self.focus(self.focused);
                Command::none()
            }
            Msg::Terminal(_) => Command::none(),
            Msg::FocusNext => {
                let next = match self.focused {
                    Field::Multi => Field::Single,
                    Field::Single => Field::Multi,
                };
                self.focus(next);
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let column = Rect {
            width: area.width.min(60),
            ..area
        };
        let [title, multi_area, _, single_area, values_area, _, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(column);
        self.areas.set([multi_area, single_area]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "pickbox dropdowns",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            title,
        );

        let values = Paragraph::new(vec![
            Line::from(format!("multi:  {}", describe(&self.multi_value))),
            Line::from(format!("single: {}", describe(&self.single_value))),
        ])
        .block(
            Block::new()
                .borders(Borders::TOP)
                .title(" Values ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(values, values_area);
        frame.render_widget(Paragraph::new(self.help_line()), help_area);

        // The open menu overlays whatever is below it, so draw its owner last.
        if self.open_field() == Some(Field::Multi) {
            self.single.view(frame, single_area);
            self.multi.view(frame, multi_area);
        } else {
            self.multi.view(frame, multi_area);
            self.single.view(frame, single_area);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| Some(Msg::Terminal(ev)))]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        log_file: std::env::var_os(LOG_ENV).map(Into::into),
        ..ProgramOptions::default()
    };
    pickbox::run_with::<DropdownApp>((), options).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickbox::testing::TestProgram;

    fn left_click(column: u16, row: u16) -> Msg {
        Msg::Terminal(TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Msg::Terminal(TerminalEvent::Key(KeyEvent::new(code, modifiers)))
    }

    // On a 60x20 screen the multi trigger's text row is 3 and the single
    // trigger's is 7.

    #[test]
    fn click_other_dropdown_moves_focus_and_opens_it() {
        let mut prog = TestProgram::<DropdownApp>::new(());
        prog.render(60, 20);
        prog.send(left_click(20, 7));
        assert!(prog.model().single.is_open());
        assert!(prog.model().single.focused());
        assert!(!prog.model().multi.focused());

        prog.render(60, 20);
        prog.send(left_click(20, 3));
        assert!(!prog.model().single.is_open());
        assert!(!prog.model().single.focused());
        assert!(prog.model().multi.is_open());
        assert!(prog.model().multi.focused());
    }

    #[test]
    fn click_on_nothing_closes_open_menu() {
        let mut prog = TestProgram::<DropdownApp>::new(());
        prog.render(60, 20);
        prog.send(left_click(20, 7));
        prog.render(60, 20);
        prog.send(left_click(20, 18));
        assert!(!prog.model().single.is_open());
        assert!(prog.model().single.focused());
    }

    #[test]
    fn tab_and_shift_tab_switch_focus() {
        let mut prog = TestProgram::<DropdownApp>::new(());
        prog.send(key(KeyCode::Tab, KeyModifiers::NONE));
        prog.drain_messages();
        assert!(prog.model().single.focused());
        prog.send(key(KeyCode::BackTab, KeyModifiers::SHIFT));
        prog.drain_messages();
        assert!(prog.model().multi.focused());
    }

    #[test]
    fn keyboard_change_reaches_host_value() {
        let mut prog = TestProgram::<DropdownApp>::new(());
        for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Enter] {
            prog.send(key(code, KeyModifiers::NONE));
        }
        prog.drain_messages();
        let o = options();
        assert_eq!(prog.model().multi_value, Selection::Multi(vec![o[0].clone(), o[1].clone()]));
        assert_eq!(prog.model().multi.value(), &prog.model().multi_value);
    }

    #[test]
    fn quit_keys() {
        let mut prog = TestProgram::<DropdownApp>::new(());
        prog.send(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(prog.pending(), [Msg::Quit]));
    }
}
