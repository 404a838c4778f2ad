/// A side effect returned from [`Model::update`](crate::Model::update),
/// [`Model::init`](crate::Model::init) or a
/// [`Component::update`](crate::Component::update).
///
/// For widgets the most important command is [`Command::message`]: a widget
/// never mutates state it does not own, it hands a message back to its parent
/// instead. The parent lifts the command into its own message type with
/// [`Command::map`] and the runtime delivers the message on the next cycle.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Propose a new value to the parent:
/// let cmd = Command::message(Message::Changed(selection));
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Action(Action<Msg>),
    Batch(Vec<Command<Msg>>),
    Terminal(TerminalCommand),
}

/// Actions handled synchronously by the runtime.
pub enum Action<Msg> {
    /// Send a message immediately (no async).
    Message(Msg),
    /// Quit the program.
    Quit,
}

/// Terminal modes a model switches on, usually from
/// [`Model::init`](crate::Model::init). The runtime switches them all off
/// again when the program exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Report clicks, drags and pointer motion. Dropdown clicks and hover
    /// highlighting depend on it.
    EnableMouseCapture,
    /// Report the terminal window gaining and losing focus.
    EnableFocusReporting,
    /// Set the terminal window title.
    SetTitle(String),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Run multiple commands. Empty batches collapse to [`Command::none`] and
    /// single-element batches to the element itself.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Terminal management command.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Command {
            inner: CommandInner::Terminal(cmd),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg: Send + 'static>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Action(Action::Message(msg)) => Command::message(f(msg)),
            CommandInner::Action(Action::Quit) => Command::quit(),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|cmd| cmd.map_with(f)).collect()),
            },
            CommandInner::Terminal(tcmd) => Command::terminal(tcmd),
        }
    }

    /// Enable mouse capture, including motion events.
    pub fn enable_mouse_capture() -> Self {
        Command::terminal(TerminalCommand::EnableMouseCapture)
    }

    /// Report terminal focus changes as [`TerminalEvent::FocusGained`] /
    /// [`TerminalEvent::FocusLost`](crate::TerminalEvent::FocusLost).
    ///
    /// [`TerminalEvent::FocusGained`]: crate::TerminalEvent::FocusGained
    pub fn enable_focus_reporting() -> Self {
        Command::terminal(TerminalCommand::EnableFocusReporting)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Command::terminal(TerminalCommand::SetTitle(title.into()))
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message action, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Collect every immediate message in this command, flattening batches.
    pub fn into_messages(self) -> Vec<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => vec![msg],
            CommandInner::Batch(cmds) => cmds.into_iter().flat_map(Command::into_messages).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn command_message_round_trips_through_into_message() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_quit_creates_quit() {
        let cmd: Command<()> = Command::quit();
        assert!(matches!(cmd.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_drops_none_entries() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(7)]);
        assert_eq!(cmd.into_message(), Some(7));
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        match cmd.inner {
            CommandInner::Batch(ref cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected Batch"),
        }
        assert_eq!(cmd.into_messages(), vec![1, 2]);
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));
    }

    #[test]
    fn command_map_quit_stays_quit() {
        let cmd: Command<i32> = Command::quit();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn command_map_terminal_preserves_command() {
        let cmd: Command<i32> = Command::enable_mouse_capture();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(
            mapped.inner,
            CommandInner::Terminal(TerminalCommand::EnableMouseCapture)
        ));
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::set_title("t")]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_messages(), vec!["1".to_string()]);
    }

    #[test]
    fn terminal_command_constructors() {
        let cmd: Command<()> = Command::enable_focus_reporting();
        assert!(matches!(
            cmd.inner,
            CommandInner::Terminal(TerminalCommand::EnableFocusReporting)
        ));

        let cmd: Command<()> = Command::set_title("test");
        match cmd.inner {
            CommandInner::Terminal(TerminalCommand::SetTitle(s)) => assert_eq!(s, "test"),
            _ => panic!("Expected SetTitle"),
        }
    }
}
