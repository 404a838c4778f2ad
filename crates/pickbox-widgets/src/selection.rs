//! Selection values and the transitions a select widget can propose.
//!
//! [`Selection`] is the value a host stores for one dropdown. Its variant is
//! the dropdown's mode, so a single-select value can never hold a list and a
//! multi-select value can never be "one optional option".
//!
//! Every transition is a pure function returning the proposed next value, or
//! `None` when the action changes nothing and no proposal should be sent.
//! Membership is decided by [`OptionValue`](crate::option::OptionValue), so
//! options rebuilt between renders still match.

use crate::option::SelectOption;

/// The current value of a select widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Single-select mode: nothing or exactly one option.
    Single(Option<SelectOption>),
    /// Multi-select mode: distinct options in the order they were added.
    Multi(Vec<SelectOption>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}

impl Selection {
    /// The empty value for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Selection::Multi(Vec::new())
        } else {
            Selection::Single(None)
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multi(_))
    }

    /// Whether `option` is part of this selection.
    pub fn contains(&self, option: &SelectOption) -> bool {
        match self {
            Selection::Single(current) => current.as_ref().is_some_and(|c| c.same_as(option)),
            Selection::Multi(values) => values.iter().any(|v| v.same_as(option)),
        }
    }

    /// Selected options in display order.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Selection::Single(current) => current.as_slice(),
            Selection::Multi(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// The proposal for "clear": always the empty value of this mode, even
    /// when nothing is selected.
    pub fn cleared(&self) -> Selection {
        Selection::empty(self.is_multiple())
    }

    /// The proposal for "select all": the whole option list in multi mode,
    /// nothing in single mode.
    pub fn with_all(&self, options: &[SelectOption]) -> Option<Selection> {
        match self {
            Selection::Single(_) => None,
            Selection::Multi(_) => Some(Selection::Multi(options.to_vec())),
        }
    }

    /// The proposal for activating `option`.
    ///
    /// Multi mode removes a selected option and appends an unselected one.
    /// Single mode picks `option` unless it is already the value, in which
    /// case nothing is proposed: single-select never deselects.
    pub fn toggled(&self, option: &SelectOption) -> Option<Selection> {
        match self {
            Selection::Single(current) => {
                if current.as_ref().is_some_and(|c| c.same_as(option)) {
                    None
                } else {
                    Some(Selection::Single(Some(option.clone())))
                }
            }
            Selection::Multi(values) => {
                let mut next: Vec<SelectOption> = values
                    .iter()
                    .filter(|v| !v.same_as(option))
                    .cloned()
                    .collect();
                if next.len() == values.len() {
                    next.push(option.clone());
                }
                Some(Selection::Multi(next))
            }
        }
    }
}

impl From<Option<SelectOption>> for Selection {
    fn from(value: Option<SelectOption>) -> Self {
        Selection::Single(value)
    }
}

impl From<Vec<SelectOption>> for Selection {
    fn from(values: Vec<SelectOption>) -> Self {
        Selection::Multi(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<SelectOption> {
        vec![
            SelectOption::new("First", 1),
            SelectOption::new("Second", 2),
            SelectOption::new("Third", 3),
        ]
    }

    #[test]
    fn empty_per_mode() {
        assert_eq!(Selection::empty(false), Selection::Single(None));
        assert_eq!(Selection::empty(true), Selection::Multi(vec![]));
        assert_eq!(Selection::default(), Selection::Single(None));
    }

    #[test]
    fn contains_single() {
        let o = opts();
        let sel = Selection::Single(Some(o[0].clone()));
        assert!(sel.contains(&o[0]));
        assert!(!sel.contains(&o[1]));
        assert!(!Selection::Single(None).contains(&o[0]));
    }

    #[test]
    fn contains_is_keyed_by_value() {
        let sel = Selection::Multi(vec![SelectOption::new("First", 1)]);
        assert!(sel.contains(&SelectOption::new("Renamed", 1)));
        assert!(!sel.contains(&SelectOption::new("First", "1")));
    }

    #[test]
    fn cleared_ignores_prior_state() {
        let o = opts();
        assert_eq!(
            Selection::Single(Some(o[1].clone())).cleared(),
            Selection::Single(None)
        );
        assert_eq!(Selection::Single(None).cleared(), Selection::Single(None));
        assert_eq!(Selection::Multi(o.clone()).cleared(), Selection::Multi(vec![]));
        assert_eq!(Selection::Multi(vec![]).cleared(), Selection::Multi(vec![]));
    }

    #[test]
    fn with_all_only_in_multi() {
        let o = opts();
        assert_eq!(Selection::Single(None).with_all(&o), None);
        assert_eq!(
            Selection::Multi(vec![o[2].clone()]).with_all(&o),
            Some(Selection::Multi(o.clone()))
        );
    }

    #[test]
    fn single_toggle_picks_other() {
        let o = opts();
        let sel = Selection::Single(Some(o[0].clone()));
        assert_eq!(sel.toggled(&o[2]), Some(Selection::Single(Some(o[2].clone()))));
        assert_eq!(
            Selection::Single(None).toggled(&o[1]),
            Some(Selection::Single(Some(o[1].clone())))
        );
    }

    #[test]
    fn single_toggle_current_is_noop() {
        let o = opts();
        let sel = Selection::Single(Some(o[0].clone()));
        assert_eq!(sel.toggled(&o[0]), None);
    }

    #[test]
    fn multi_toggle_appends_and_removes() {
        let o = opts();
        let sel = Selection::Multi(vec![o[1].clone()]);
        let added = sel.toggled(&o[0]).unwrap();
        assert_eq!(added, Selection::Multi(vec![o[1].clone(), o[0].clone()]));

        let removed = added.toggled(&o[1]).unwrap();
        assert_eq!(removed, Selection::Multi(vec![o[0].clone()]));
    }

    #[test]
    fn multi_toggle_twice_restores_contents() {
        let o = opts();
        for start in [vec![], vec![o[0].clone()], vec![o[0].clone(), o[2].clone()]] {
            let sel = Selection::Multi(start.clone());
            for option in &o {
                let back = sel.toggled(option).unwrap().toggled(option).unwrap();
                let mut got: Vec<_> = back.options().iter().map(|v| v.value.clone()).collect();
                let mut want: Vec<_> = start.iter().map(|v| v.value.clone()).collect();
                got.sort_by_key(|v| v.to_string());
                want.sort_by_key(|v| v.to_string());
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn reinsertion_goes_to_the_end() {
        let o = opts();
        let sel = Selection::Multi(vec![o[0].clone(), o[1].clone()]);
        let back = sel.toggled(&o[0]).unwrap().toggled(&o[0]).unwrap();
        assert_eq!(back, Selection::Multi(vec![o[1].clone(), o[0].clone()]));
    }

    #[test]
    fn options_view() {
        let o = opts();
        assert!(Selection::Single(None).options().is_empty());
        assert_eq!(Selection::Single(Some(o[0].clone())).options(), &o[..1]);
        assert!(Selection::Multi(vec![]).is_empty());
    }
}
