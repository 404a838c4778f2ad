use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Messages returned through [`Command::message`] are queued instead of being
/// delivered, so a test can first assert on what a widget proposed and then
/// call [`drain_messages`](TestProgram::drain_messages) to let the model
/// apply it. Terminal commands and quit are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use pickbox_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(());
/// prog.send(Msg::Select(select::Message::KeyPress(enter)));
/// assert_eq!(prog.pending().len(), 1);   // one change proposed
/// prog.drain_messages();                   // host applies it
/// assert!(prog.render_string(40, 5).contains("Third"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle. Messages produced by
    /// the update are queued, not delivered.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Messages queued by the last updates and not yet delivered.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Deliver queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// Widgets that hit-test mouse events against their last render need this
    /// to be called before mouse messages are sent.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per buffer row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Action(Action::Quit) => {}
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            CommandInner::Terminal(_) => {}
        }
    }
}

/// Flatten a buffer into text, rows separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // A host owning a list of tags and a child that only proposes changes.
    struct TagHost {
        tags: Vec<String>,
    }

    #[derive(Debug)]
    enum TagMsg {
        Propose(String),
        Changed(Vec<String>),
    }

    impl Model for TagHost {
        type Message = TagMsg;
        type Flags = Vec<String>;

        fn init(tags: Vec<String>) -> (Self, Command<TagMsg>) {
            (TagHost { tags }, Command::none())
        }

        fn update(&mut self, msg: TagMsg) -> Command<TagMsg> {
            match msg {
                TagMsg::Propose(tag) => {
                    let mut next = self.tags.clone();
                    next.push(tag);
                    Command::message(TagMsg::Changed(next))
                }
                TagMsg::Changed(tags) => {
                    self.tags = tags;
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(self.tags.join(", ")), frame.area());
        }
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<TagHost>::new(vec!["a".into()]);
        assert_eq!(prog.model().tags, vec!["a"]);
    }

    #[test]
    fn send_queues_proposals_until_drained() {
        let mut prog = TestProgram::<TagHost>::new(vec![]);
        prog.send(TagMsg::Propose("x".into()));
        assert_eq!(prog.pending().len(), 1);
        assert!(prog.model().tags.is_empty());

        prog.drain_messages();
        assert!(prog.pending().is_empty());
        assert_eq!(prog.model().tags, vec!["x"]);
    }

    #[test]
    fn render_string_shows_state() {
        let mut prog = TestProgram::<TagHost>::new(vec!["one".into()]);
        prog.send(TagMsg::Propose("two".into()));
        prog.drain_messages();
        let content = prog.render_string(20, 2);
        assert!(content.starts_with("one, two"));
        assert_eq!(content.lines().count(), 2);
    }
}
