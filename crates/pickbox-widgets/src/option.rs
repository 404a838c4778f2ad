//! Option entries shown by a [`Select`](crate::select::Select).
//!
//! An option is a display label paired with a value. Values identify options:
//! they are assumed unique within one option list, labels may repeat.

use std::fmt;

/// The identifying value of a [`SelectOption`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// A textual key.
    Text(String),
    /// A numeric key.
    Number(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n.into())
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

/// One selectable entry: a label to display and the value that identifies it.
///
/// Two options are the same option when their values are equal, whatever
/// their labels; use [`SelectOption::same_as`] for that comparison. The
/// derived `PartialEq` compares both fields and is meant for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether `other` identifies the same option (equal values).
    pub fn same_as(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_value() {
        let a = SelectOption::new("First", 1);
        let renamed = SelectOption::new("Primero", 1);
        let other = SelectOption::new("First", 2);
        assert!(a.same_as(&renamed));
        assert!(!a.same_as(&other));
    }

    #[test]
    fn text_and_number_values_differ() {
        assert_ne!(OptionValue::from("1"), OptionValue::from(1));
    }

    #[test]
    fn display() {
        assert_eq!(OptionValue::from(42).to_string(), "42");
        assert_eq!(OptionValue::from("abc").to_string(), "abc");
        assert_eq!(SelectOption::new("Third", 3).to_string(), "Third");
    }
}
