//! Selection and checked-state machine for list components.
//!
//! [`SelectionState`] tracks the current item and the checked items under a
//! [`CheckboxMode`]. Mutations validate against the mode, commit only on
//! success, and return the minimal list of [`CheckDelta`]s the renderer needs.
//!
//! Invariants held after every operation:
//! - `None` mode: nothing is checked
//! - `Single` mode: at most one index is checked
//! - `Multiple` mode: no index is checked twice

use tracing::debug;

use crate::property::enums::CheckboxMode;

// ---------------------------------------------------------------------------
// SelectionError
// ---------------------------------------------------------------------------

/// A selection request the current state cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("checkbox mode {mode} does not allow checking {count} item(s)")]
    ModeDisallows { mode: CheckboxMode, count: usize },
    #[error("single checkbox mode allows one checked item, got {count}")]
    TooManyChecked { count: usize },
    #[error("item index {index} is out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no current item")]
    NoCurrent,
}

// ---------------------------------------------------------------------------
// CheckDelta
// ---------------------------------------------------------------------------

/// One item whose checked state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDelta {
    pub index: usize,
    pub checked: bool,
}

impl CheckDelta {
    pub fn check(index: usize) -> Self {
        Self {
            index,
            checked: true,
        }
    }

    pub fn uncheck(index: usize) -> Self {
        Self {
            index,
            checked: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionState
// ---------------------------------------------------------------------------

/// Current and checked items of one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: CheckboxMode,
    current: Option<usize>,
    checked: Vec<usize>,
}

impl SelectionState {
    /// Empty state in `mode`.
    pub fn new(mode: CheckboxMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> CheckboxMode {
        self.mode
    }

    /// The current item, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Checked items, in the order they were checked.
    pub fn checked(&self) -> &[usize] {
        &self.checked
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Move the current item. Returns `true` if it changed.
    ///
    /// `Some(index)` must be below `item_count`.
    pub fn set_current(
        &mut self,
        current: Option<usize>,
        item_count: usize,
    ) -> Result<bool, SelectionError> {
        if let Some(index) = current {
            if index >= item_count {
                debug!(index, item_count, "current index rejected");
                return Err(SelectionError::IndexOutOfRange {
                    index,
                    len: item_count,
                });
            }
        }
        if self.current == current {
            return Ok(false);
        }
        debug!(from = ?self.current, to = ?current, "current item changed");
        self.current = current;
        Ok(true)
    }

    /// Replace the checked set.
    ///
    /// Unchecks come first, in the old order, then checks in the requested
    /// order. Repeated indices in the request collapse to one.
    pub fn set_checked(&mut self, request: &[usize]) -> Result<Vec<CheckDelta>, SelectionError> {
        let mut wanted: Vec<usize> = Vec::with_capacity(request.len());
        for &index in request {
            if !wanted.contains(&index) {
                wanted.push(index);
            }
        }

        match self.mode {
            CheckboxMode::None if !wanted.is_empty() => {
                debug!(count = wanted.len(), "checked items rejected in none mode");
                return Err(SelectionError::ModeDisallows {
                    mode: self.mode,
                    count: wanted.len(),
                });
            }
            CheckboxMode::Single if wanted.len() > 1 => {
                debug!(count = wanted.len(), "checked items rejected in single mode");
                return Err(SelectionError::TooManyChecked {
                    count: wanted.len(),
                });
            }
            _ => {}
        }

        let mut deltas: Vec<CheckDelta> = self
            .checked
            .iter()
            .filter(|index| !wanted.contains(index))
            .map(|&index| CheckDelta::uncheck(index))
            .collect();
        deltas.extend(
            wanted
                .iter()
                .filter(|index| !self.checked.contains(index))
                .map(|&index| CheckDelta::check(index)),
        );

        debug!(checked = ?wanted, changes = deltas.len(), "checked items replaced");
        self.checked = wanted;
        Ok(deltas)
    }

    /// Flip the checked state of the current item, as a click does.
    ///
    /// `Single` replaces the checked item with the current one; `Multiple`
    /// adds or removes it; `None` changes nothing.
    pub fn toggle_current(&mut self) -> Result<Vec<CheckDelta>, SelectionError> {
        let current = self.current.ok_or(SelectionError::NoCurrent)?;
        let deltas = match self.mode {
            CheckboxMode::None => Vec::new(),
            CheckboxMode::Single => match self.checked.first().copied() {
                Some(old) if old == current => Vec::new(),
                Some(old) => {
                    self.checked = vec![current];
                    vec![CheckDelta::uncheck(old), CheckDelta::check(current)]
                }
                None => {
                    self.checked = vec![current];
                    vec![CheckDelta::check(current)]
                }
            },
            CheckboxMode::Multiple => match self.checked.iter().position(|&i| i == current) {
                Some(at) => {
                    self.checked.remove(at);
                    vec![CheckDelta::uncheck(current)]
                }
                None => {
                    self.checked.push(current);
                    vec![CheckDelta::check(current)]
                }
            },
        };
        debug!(current, changes = deltas.len(), "current item toggled");
        Ok(deltas)
    }

    /// Switch checkbox mode, trimming the checked set to fit.
    ///
    /// `None` unchecks everything; `Single` keeps only the first checked item.
    pub fn set_mode(&mut self, mode: CheckboxMode) -> Vec<CheckDelta> {
        let keep = match mode {
            CheckboxMode::None => 0,
            CheckboxMode::Single => 1,
            CheckboxMode::Multiple => self.checked.len(),
        };
        self.mode = mode;
        if self.checked.len() <= keep {
            return Vec::new();
        }
        self.checked
            .split_off(keep)
            .into_iter()
            .map(CheckDelta::uncheck)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn single() -> SelectionState {
        SelectionState::new(CheckboxMode::Single)
    }

    fn multiple() -> SelectionState {
        SelectionState::new(CheckboxMode::Multiple)
    }

    // ── Current ──────────────────────────────────────────────────────

    #[test]
    fn set_current_reports_change() {
        let mut state = single();
        assert_eq!(state.set_current(Some(2), 5), Ok(true));
        assert_eq!(state.set_current(Some(2), 5), Ok(false));
        assert_eq!(state.set_current(None, 5), Ok(true));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn set_current_out_of_range_keeps_state() {
        let mut state = single();
        state.set_current(Some(1), 3).unwrap();
        assert_eq!(
            state.set_current(Some(3), 3),
            Err(SelectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(state.current(), Some(1));
    }

    // ── None mode ────────────────────────────────────────────────────

    #[test]
    fn none_mode_rejects_checks() {
        let mut state = SelectionState::default();
        assert_eq!(
            state.set_checked(&[0]),
            Err(SelectionError::ModeDisallows {
                mode: CheckboxMode::None,
                count: 1
            })
        );
        assert!(state.checked().is_empty());
        assert_eq!(state.set_checked(&[]), Ok(vec![]));
    }

    // ── Single mode ──────────────────────────────────────────────────

    #[test]
    fn single_replaces_previous() {
        let mut state = single();
        assert_eq!(state.set_checked(&[2]), Ok(vec![CheckDelta::check(2)]));
        assert_eq!(
            state.set_checked(&[5]),
            Ok(vec![CheckDelta::uncheck(2), CheckDelta::check(5)])
        );
        assert_eq!(state.checked(), &[5]);
    }

    #[test]
    fn single_same_index_is_quiet() {
        let mut state = single();
        state.set_checked(&[4]).unwrap();
        assert_eq!(state.set_checked(&[4]), Ok(vec![]));
    }

    #[test]
    fn single_rejects_two() {
        let mut state = single();
        state.set_checked(&[1]).unwrap();
        assert_eq!(
            state.set_checked(&[1, 2]),
            Err(SelectionError::TooManyChecked { count: 2 })
        );
        assert_eq!(state.checked(), &[1]);
    }

    #[test]
    fn single_empty_clears() {
        let mut state = single();
        state.set_checked(&[3]).unwrap();
        assert_eq!(state.set_checked(&[]), Ok(vec![CheckDelta::uncheck(3)]));
        assert!(state.checked().is_empty());
    }

    // ── Multiple mode ────────────────────────────────────────────────

    #[test]
    fn multiple_diffs_unchecks_first() {
        let mut state = multiple();
        state.set_checked(&[1, 2, 3]).unwrap();
        assert_eq!(
            state.set_checked(&[3, 4, 1, 5]),
            Ok(vec![
                CheckDelta::uncheck(2),
                CheckDelta::check(4),
                CheckDelta::check(5),
            ])
        );
        assert_eq!(state.checked(), &[3, 4, 1, 5]);
    }

    #[test]
    fn multiple_collapses_duplicates() {
        let mut state = multiple();
        assert_eq!(
            state.set_checked(&[7, 7, 2]),
            Ok(vec![CheckDelta::check(7), CheckDelta::check(2)])
        );
        assert_eq!(state.checked(), &[7, 2]);
    }

    // ── Toggle ───────────────────────────────────────────────────────

    #[test]
    fn toggle_requires_current() {
        let mut state = multiple();
        assert_eq!(state.toggle_current(), Err(SelectionError::NoCurrent));
    }

    #[test]
    fn toggle_single_replaces() {
        let mut state = single();
        state.set_checked(&[0]).unwrap();
        state.set_current(Some(2), 4).unwrap();
        assert_eq!(
            state.toggle_current(),
            Ok(vec![CheckDelta::uncheck(0), CheckDelta::check(2)])
        );
        assert_eq!(state.toggle_current(), Ok(vec![]));
        assert_eq!(state.checked(), &[2]);
    }

    #[test]
    fn toggle_multiple_adds_and_removes() {
        let mut state = multiple();
        state.set_current(Some(1), 3).unwrap();
        assert_eq!(state.toggle_current(), Ok(vec![CheckDelta::check(1)]));
        assert!(state.is_checked(1));
        assert_eq!(state.toggle_current(), Ok(vec![CheckDelta::uncheck(1)]));
        assert!(!state.is_checked(1));
    }

    #[test]
    fn toggle_none_changes_nothing() {
        let mut state = SelectionState::default();
        state.set_current(Some(0), 1).unwrap();
        assert_eq!(state.toggle_current(), Ok(vec![]));
    }

    // ── Mode switches ────────────────────────────────────────────────

    #[test]
    fn switching_mode_trims_checked() {
        let mut state = multiple();
        state.set_checked(&[4, 1, 6]).unwrap();
        assert_eq!(
            state.set_mode(CheckboxMode::Single),
            vec![CheckDelta::uncheck(1), CheckDelta::uncheck(6)]
        );
        assert_eq!(state.checked(), &[4]);
        assert_eq!(state.set_mode(CheckboxMode::None), vec![CheckDelta::uncheck(4)]);
        assert!(state.checked().is_empty());
        assert_eq!(state.set_mode(CheckboxMode::Multiple), vec![]);
    }

    // ── Invariants ───────────────────────────────────────────────────

    fn mode_strategy() -> impl Strategy<Value = CheckboxMode> {
        prop_oneof![
            Just(CheckboxMode::None),
            Just(CheckboxMode::Single),
            Just(CheckboxMode::Multiple),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_under_any_requests(
            mode in mode_strategy(),
            requests in prop::collection::vec(prop::collection::vec(0usize..8, 0..4), 0..12),
        ) {
            let mut state = SelectionState::new(mode);
            for request in requests {
                let before = state.clone();
                match state.set_checked(&request) {
                    Ok(_) => {}
                    Err(_) => prop_assert_eq!(&state, &before),
                }
                let checked = state.checked();
                match mode {
                    CheckboxMode::None => prop_assert!(checked.is_empty()),
                    CheckboxMode::Single => prop_assert!(checked.len() <= 1),
                    CheckboxMode::Multiple => {
                        let mut sorted = checked.to_vec();
                        sorted.sort_unstable();
                        sorted.dedup();
                        prop_assert_eq!(sorted.len(), checked.len());
                    }
                }
            }
        }

        #[test]
        fn multiple_deltas_rebuild_the_set(
            first in prop::collection::vec(0usize..10, 0..6),
            second in prop::collection::vec(0usize..10, 0..6),
        ) {
            let mut state = SelectionState::new(CheckboxMode::Multiple);
            state.set_checked(&first).unwrap();
            let mut rebuilt: Vec<usize> = state.checked().to_vec();
            for delta in state.set_checked(&second).unwrap() {
                if delta.checked {
                    prop_assert!(!rebuilt.contains(&delta.index));
                    rebuilt.push(delta.index);
                } else {
                    prop_assert!(rebuilt.contains(&delta.index));
                    rebuilt.retain(|&i| i != delta.index);
                }
            }
            rebuilt.sort_unstable();
            let mut expected = state.checked().to_vec();
            expected.sort_unstable();
            prop_assert_eq!(rebuilt, expected);
        }
    }
}
