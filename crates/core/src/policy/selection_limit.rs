//! Caps how many categories can be checked in a panel checklist.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SELECTION_LIMIT;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItemState {
    pub checked: bool,
    pub disabled: bool,
}

impl ChecklistItemState {
    pub fn checked() -> Self {
        Self {
            checked: true,
            disabled: false,
        }
    }

    pub fn unchecked() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLimit {
    max: usize,
}

impl Default for SelectionLimit {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_LIMIT)
    }
}

impl SelectionLimit {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_reached(&self, items: &[ChecklistItemState]) -> bool {
        items.iter().filter(|i| i.checked).count() >= self.max
    }

    /// At or above the limit every unchecked item is disabled; below it every
    /// item is enabled again.
    pub fn apply(&self, items: &mut [ChecklistItemState]) {
        let reached = self.is_reached(items);
        for item in items.iter_mut() {
            item.disabled = reached && !item.checked;
        }
    }

    /// Clicks item `index`. Disabled or missing items are left alone.
    pub fn toggle(&self, items: &mut [ChecklistItemState], index: usize) -> bool {
        match items.get_mut(index) {
            Some(item) if !item.disabled => item.checked = !item.checked,
            _ => return false,
        }

        self.apply(items);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(checked: usize, total: usize) -> Vec<ChecklistItemState> {
        (0..total)
            .map(|i| {
                if i < checked {
                    ChecklistItemState::checked()
                } else {
                    ChecklistItemState::unchecked()
                }
            })
            .collect()
    }

    #[test]
    fn test_limit_reached_disables_unchecked_items() {
        let limit = SelectionLimit::default();
        let mut items = items(7, 10);

        limit.apply(&mut items);

        assert!(items[..7].iter().all(|i| !i.disabled));
        assert!(items[7..].iter().all(|i| i.disabled));
    }

    #[test]
    fn test_below_limit_enables_everything() {
        let limit = SelectionLimit::default();
        let mut items = items(6, 10);
        items[9].disabled = true;

        limit.apply(&mut items);

        assert!(items.iter().all(|i| !i.disabled));
    }

    #[test]
    fn test_toggle_reaching_and_leaving_limit() {
        let limit = SelectionLimit::default();
        let mut items = items(6, 10);

        assert!(limit.toggle(&mut items, 6));
        assert!(items[9].disabled);
        assert!(!limit.toggle(&mut items, 9));
        assert!(!items[9].checked);

        assert!(limit.toggle(&mut items, 0));
        assert!(items.iter().all(|i| !i.disabled));
    }

    #[test]
    fn test_toggle_out_of_range() {
        let limit = SelectionLimit::new(2);
        let mut items = items(0, 1);
        assert!(!limit.toggle(&mut items, 5));
    }
}
