//! Optimistic Toggle
//!
//! A checkbox change is applied in two phases: the tentative value shows up
//! immediately, then the server either confirms it or it is reverted.

use crate::models::TaskId;

/// Visual state change applied to a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// Checkbox shows the requested value, nothing confirmed yet
    Tentative { checked: bool },
    /// Server accepted the change; style follows the checkbox
    Confirmed { completed: bool },
    /// Server rejected the change; checkbox goes back to what it was
    Reverted { checked: bool },
}

/// A toggle that has been shown but not yet settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a pending toggle must be confirmed or reverted"]
pub struct PendingToggle {
    id: TaskId,
    previous: bool,
    requested: bool,
}

impl PendingToggle {
    /// Start a toggle from the checkbox value currently on screen
    pub fn begin(id: TaskId, previous: bool, requested: bool) -> Self {
        Self { id, previous, requested }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn requested(&self) -> bool {
        self.requested
    }

    pub fn tentative(&self) -> ToggleState {
        ToggleState::Tentative { checked: self.requested }
    }

    pub fn confirm(self) -> ToggleState {
        ToggleState::Confirmed { completed: self.requested }
    }

    pub fn revert(self) -> ToggleState {
        ToggleState::Reverted { checked: self.previous }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_keeps_requested_value() {
        let pending = PendingToggle::begin(1, false, true);
        assert_eq!(pending.tentative(), ToggleState::Tentative { checked: true });
        assert_eq!(pending.confirm(), ToggleState::Confirmed { completed: true });
    }

    #[test]
    fn test_revert_restores_previous_value() {
        let pending = PendingToggle::begin(1, true, false);
        assert_eq!(pending.revert(), ToggleState::Reverted { checked: true });
    }
}
