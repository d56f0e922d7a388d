//! Drag source role.

use crate::dnd::transfer::DataTransfer;

/// Source-side gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragSourceState {
    #[default]
    Idle,
    Dragging,
}

/// Implemented by views that can be picked up and dragged.
pub trait Draggable {
    /// Gesture begins: write the payload into `transfer`.
    fn on_drag_start(&mut self, transfer: &mut DataTransfer);

    /// Gesture ends, whatever the outcome. Must not mutate board state.
    fn on_drag_end(&mut self);

    fn drag_state(&self) -> DragSourceState;
}
