//! Key binding definitions and a key map trait for rendering help lines.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action this binding performs.
    pub description: String,
}

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    /// Exactly the modifiers held with the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a new binding for a single key combination.
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    /// Create a new binding for multiple key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
        }
    }

    /// Whether `event` matches any of this binding's key combinations.
    /// Modifiers must match exactly: a binding for Enter ignores Ctrl+Enter.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers == k.modifiers)
    }

    /// Key labels joined with `/`, e.g. `enter/space`.
    pub fn keys_label(&self) -> String {
        self.keys
            .iter()
            .map(KeyCombination::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl KeyCombination {
    /// A key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key combination held with `modifiers`.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Short human-readable label used in help lines.
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => "shift+tab".to_string(),
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}").to_lowercase(),
        };
        let mut prefix = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            prefix.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            prefix.push_str("alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) && self.code != KeyCode::BackTab {
            prefix.push_str("shift+");
        }
        prefix + &key
    }
}

/// Types that expose their key bindings for help display.
pub trait KeyMap {
    /// The most important bindings, for a one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings grouped by category.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_listed_key() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Enter),
                KeyCombination::new(KeyCode::Char(' ')),
            ],
            "Toggle",
        );
        assert!(b.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(b.matches(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!b.matches(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }

    #[test]
    fn modifiers_must_be_held() {
        let b = Binding::new(
            KeyCombination::with_modifiers(KeyCode::Char('a'), KeyModifiers::CONTROL),
            "All",
        );
        assert!(!b.matches(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(b.matches(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn extra_modifiers_do_not_match() {
        let b = Binding::new(KeyCombination::new(KeyCode::Enter), "Select");
        assert!(!b.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL)));
        assert!(!b.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)));
        assert!(b.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn labels() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Enter),
                KeyCombination::new(KeyCode::Char(' ')),
            ],
            "Toggle",
        );
        assert_eq!(b.keys_label(), "enter/space");
        assert_eq!(
            KeyCombination::with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL).label(),
            "ctrl+c"
        );
        assert_eq!(
            KeyCombination::with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT).label(),
            "shift+tab"
        );
    }
}
