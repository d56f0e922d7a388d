//! Core state and interaction logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod dnd;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod view;

pub use dnd::source::{DragSourceState, Draggable};
pub use dnd::target::{DragOverDecision, DragTarget, DropZoneState};
pub use dnd::transfer::{
    DataTransfer, DragPayload, DropEffect, PayloadError, PayloadKind, TEXT_PLAIN,
};
pub use input::form::{
    InputError, InputField, ProjectDraft, ProjectInput, INVALID_INPUT_MESSAGE,
};
pub use input::validation::{validate, Validatable, ValidatableValue};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::project::{
    Project, ProjectId, ProjectStatus, ProjectStatusError, ProjectValidationError,
};
pub use service::board_service::{BoardConfig, BoardService, DragSession};
pub use state::listener::{BroadcastReport, ListenerError, ListenerResult, ProjectListener};
pub use state::store::{ProjectStore, StatusChange, SEED_PROJECT_ID};
pub use view::project_item::{ProjectItemView, RenderedItem};
pub use view::project_list::ProjectList;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
