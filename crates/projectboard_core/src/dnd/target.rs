//! Drop target role.

use crate::dnd::transfer::{DataTransfer, PayloadError, TEXT_PLAIN};
use crate::state::store::{ProjectStore, StatusChange};

/// Target-side hover state. `HoverValid` is when the droppable affordance shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropZoneState {
    #[default]
    Idle,
    HoverValid,
}

/// Answer to a drag-over event.
///
/// `Accept` means the host must suppress its default rejection so a drop can
/// follow; `Reject` leaves the default in place and no drop will be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverDecision {
    Accept,
    Reject,
}

impl DragOverDecision {
    pub fn prevents_default(self) -> bool {
        self == Self::Accept
    }
}

/// Only payloads whose first declared type is the plain-text channel are droppable.
pub fn accepts_payload(transfer: &DataTransfer) -> bool {
    transfer.first_type() == Some(TEXT_PLAIN)
}

/// Implemented by views that accept dropped projects.
pub trait DragTarget {
    fn on_drag_over(&self, transfer: &DataTransfer) -> DragOverDecision;

    /// Release over this target. The only drag event that reaches the store.
    fn on_drop(
        &self,
        store: &mut ProjectStore,
        transfer: &DataTransfer,
    ) -> Result<StatusChange, PayloadError>;

    fn on_drag_leave(&self);

    fn drop_state(&self) -> DropZoneState;
}

#[cfg(test)]
mod tests {
    use super::accepts_payload;
    use crate::dnd::transfer::{DataTransfer, TEXT_PLAIN};

    #[test]
    fn accepts_only_when_plain_text_is_declared_first() {
        let mut transfer = DataTransfer::new();
        assert!(!accepts_payload(&transfer));

        transfer.set_data("text/html", "<b>1</b>");
        transfer.set_data(TEXT_PLAIN, "1");
        assert!(!accepts_payload(&transfer));

        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "1");
        assert!(accepts_payload(&transfer));
    }
}
