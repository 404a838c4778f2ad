use crate::command::{Action, Command, CommandInner, TerminalCommand};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The log file named in [`ProgramOptions::log_file`] could not be opened.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration options for a [`Program`].
///
/// # Example
///
/// ```rust,ignore
/// use pickbox_core::ProgramOptions;
///
/// let opts = ProgramOptions {
///     log_file: Some("pickbox.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Whether to restore the terminal from a panic hook (default: true).
    pub catch_panics: bool,
    /// Whether ctrl-c terminates the event loop (default: true).
    pub handle_signals: bool,
    /// Append runtime lifecycle lines to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
        }
    }
}

/// The program runtime. Manages terminal setup, the event loop, and the
/// full [`Model`] lifecycle.
///
/// Messages are applied one at a time through `&mut` access to the model, so
/// every widget handles an event against its current state; there are no
/// captured snapshots to go stale between renders.
///
/// # Example
///
/// ```rust,ignore
/// use pickbox_core::{Program, ProgramError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<MyApp>::new(())?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscription_manager: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Returns an error if the log file cannot be opened or terminal
    /// initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let log_file = match options.log_file {
            Some(ref path) => Some(log_to_file(path).map_err(|source| ProgramError::LogFile {
                path: path.clone(),
                source,
            })?),
            None => None,
        };

        let (model, init_cmd) = M::init(flags);

        let terminal = init_terminal(&options)?;
        let subscription_manager = SubscriptionManager::new(msg_tx.clone());

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            subscription_manager,
            options,
            needs_redraw: true,
            should_quit: false,
            log_file,
        };

        program.debug_log("program initialized");
        program.execute_command(init_cmd);
        program.reconcile_subscriptions();

        Ok(program)
    }

    /// Run the program until the model quits. Returns the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        self.debug_log("shutting down");
        self.subscription_manager.shutdown();
        restore_terminal(&self.options)?;

        result.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let handle_signals = self.options.handle_signals;

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    self.debug_log("received ctrl+c signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                    // Drain whatever is already queued before the next frame.
                    while let Ok(msg) = self.msg_rx.try_recv() {
                        if self.should_quit {
                            break;
                        }
                        self.process_message(msg);
                    }
                    if self.should_quit {
                        return Ok(());
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);
        self.reconcile_subscriptions();
        self.needs_redraw = true;
    }

    fn reconcile_subscriptions(&mut self) {
        let before = self.subscription_manager.active_count();
        let subs = self.model.subscriptions();
        self.subscription_manager.reconcile(subs);
        let after = self.subscription_manager.active_count();
        if before != after {
            self.debug_log(&format!("active subscriptions: {before} -> {after}"));
        }
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.should_quit = true;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
            CommandInner::Terminal(tcmd) => {
                self.debug_log(&format!("terminal command: {tcmd:?}"));
                self.execute_terminal_command(tcmd);
            }
        }
    }

    fn execute_terminal_command(&mut self, cmd: TerminalCommand) {
        let mut writer = stdout();
        let result = match cmd {
            TerminalCommand::EnableMouseCapture => execute!(writer, EnableMouseCapture),
            TerminalCommand::EnableFocusReporting => execute!(writer, EnableFocusChange),
            TerminalCommand::SetTitle(title) => execute!(writer, SetTitle(title)),
        };
        if let Err(err) = result {
            self.debug_log(&format!("terminal command failed: {err}"));
        }
    }

    /// Write a line to the log file, if configured.
    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install the panic hook once so repeated programs do not stack hooks.
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), io::Error> {
    // Keep going when a step fails so as much state as possible is restored.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, DisableFocusChange).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

/// Open a log file in append mode.
///
/// A TUI owns the terminal, so diagnostics go to a file instead of stdout.
///
/// # Example
///
/// ```no_run
/// use pickbox_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("pickbox.log").unwrap();
/// writeln!(f, "selection changed").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<Path>) -> Result<std::fs::File, io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = ProgramOptions::default();
        assert_eq!(opts.fps, 60);
        assert!(opts.alt_screen);
        assert!(opts.log_file.is_none());
    }

    #[test]
    fn log_to_file_appends() {
        let path = std::env::temp_dir().join(format!("pickbox-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let mut f = log_to_file(&path).unwrap();
            writeln!(f, "first").unwrap();
        }
        {
            let mut f = log_to_file(&path).unwrap();
            writeln!(f, "second").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn log_file_error_names_path() {
        let err = ProgramError::LogFile {
            path: PathBuf::from("/nope/pickbox.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/pickbox.log"));
    }
}
