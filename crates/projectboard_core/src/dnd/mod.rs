//! Drag-and-drop lane-transfer protocol.
//!
//! # Responsibility
//! - Model the host drag payload channel (`DataTransfer`).
//! - Define the source (`Draggable`) and target (`DragTarget`) roles.
//!
//! # Invariants
//! - The only wire format is the project id as plain text plus a `move` hint.
//! - A drop is the only drag event that mutates state, via `ProjectStore::change_status`.
//! - Each gesture is independent; no state survives across gestures.

pub mod source;
pub mod target;
pub mod transfer;
