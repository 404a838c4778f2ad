use crossterm::event::{Event, KeyEvent, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Delivered through the [`terminal_events`](crate::subscriptions::terminal_events)
/// subscription. A host model maps each event into its own message type and
/// routes key and mouse events to whichever widget should see them.
///
/// # Example
///
/// ```rust,ignore
/// use pickbox_core::{terminal_events, Subscription, TerminalEvent};
///
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|ev| match ev {
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
///         TerminalEvent::FocusLost => Some(Msg::Blur),
///         _ => None,
///     })]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (requires mouse capture).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus (requires focus reporting).
    FocusGained,
    /// Terminal window lost focus (requires focus reporting).
    FocusLost,
}

impl TerminalEvent {
    /// Convert a crossterm event. Pasted text has no meaning for a dropdown
    /// and yields `None`.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(k) => Some(TerminalEvent::Key(k)),
            Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            Event::FocusGained => Some(TerminalEvent::FocusGained),
            Event::FocusLost => Some(TerminalEvent::FocusLost),
            Event::Paste(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn converts_crossterm_key_events() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Key(key)),
            Some(TerminalEvent::Key(key))
        );
    }

    #[test]
    fn converts_focus_lost() {
        assert_eq!(
            TerminalEvent::from_crossterm(Event::FocusLost),
            Some(TerminalEvent::FocusLost)
        );
    }

    #[test]
    fn drops_pasted_text() {
        assert_eq!(TerminalEvent::from_crossterm(Event::Paste("First".into())), None);
    }
}
