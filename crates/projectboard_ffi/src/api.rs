//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board gestures (create, toggle, drop) to Dart via FRB.
//! - Own the one process-wide board the UI host talks to.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call runs to completion under the board lock; broadcasts never interleave.

use projectboard_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, BoardConfig, BoardService, DataTransfer, DragOverDecision, DragPayload,
    ProjectStatus, RenderedItem, StatusChange, TEXT_PLAIN,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

const SEED_DEMO_ENV: &str = "PROJECTBOARD_SEED_DEMO";
static BOARD: OnceLock<Mutex<BoardService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank picks the
///   build default (`debug` in debug builds, `info` in release).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(resolve_log_level(&level), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItem {
    /// Project id in string form; also the element id.
    pub element_id: String,
    pub title: String,
    /// Assigned-people line, e.g. `2 persons assigned`.
    pub assigned: String,
    pub description: String,
}

/// Rendered contents of one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLaneResponse {
    /// Whether `lane` was a known lane key.
    pub ok: bool,
    pub heading: String,
    pub list_id: String,
    pub items: Vec<BoardItem>,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the request was accepted (no-op transitions are accepted).
    pub ok: bool,
    /// Whether board state changed and lanes were re-rendered.
    pub changed: bool,
    /// Project id the action applied to, when known.
    pub project_id: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, project_id: u32, changed: bool) -> Self {
        Self {
            ok: true,
            changed,
            project_id: Some(project_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Submits the input form.
///
/// # FFI contract
/// - `people` is the raw field text; parsing and range checks happen in core.
/// - Invalid input returns `ok=false` with the user alert text as `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_project(
    title: String,
    description: String,
    people: String,
) -> BoardActionResponse {
    let mut board = lock_board();
    match board.create_project(&title, &description, &people) {
        Ok(project) => BoardActionResponse::success("Project created.", project.id, true),
        Err(err) => BoardActionResponse::failure(err.to_string()),
    }
}

/// Clicks the toggle button of project `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_project(id: u32) -> BoardActionResponse {
    let change = lock_board().toggle(id);
    status_response(id, change)
}

/// Drop path: `payload_text` is the raw plain-text drag payload, `lane` the target lane key.
///
/// # FFI contract
/// - Unknown lane or malformed payload returns `ok=false`.
/// - An id that no longer exists returns `ok=true, changed=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move_project(payload_text: String, lane: String) -> BoardActionResponse {
    let lane = match ProjectStatus::parse(&lane) {
        Ok(lane) => lane,
        Err(err) => return BoardActionResponse::failure(err.to_string()),
    };
    let mut transfer = DataTransfer::new();
    transfer.set_data(TEXT_PLAIN, payload_text);
    let payload = match DragPayload::read_from(&transfer) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("event=ffi_move module=ffi status=error lane={} reason=payload", lane);
            return BoardActionResponse::failure(err.to_string());
        }
    };

    let mut board = lock_board();
    if board.drag_over(lane, &transfer) == DragOverDecision::Reject {
        warn!("event=ffi_move module=ffi status=error lane={} reason=rejected", lane);
        return BoardActionResponse::failure("drop rejected by lane");
    }
    match board.drop_on(lane, &transfer) {
        Ok(change) => status_response(payload.project_id, change),
        Err(err) => BoardActionResponse::failure(err.to_string()),
    }
}

/// Returns the rendered items of `lane` (`active|finished`).
#[flutter_rust_bridge::frb(sync)]
pub fn board_lane(lane: String) -> BoardLaneResponse {
    let lane = match ProjectStatus::parse(&lane) {
        Ok(lane) => lane,
        Err(err) => {
            return BoardLaneResponse {
                ok: false,
                heading: String::new(),
                list_id: String::new(),
                items: Vec::new(),
                message: err.to_string(),
            }
        }
    };
    let board = lock_board();
    let list = board.lane(lane);
    let items = list
        .rendered()
        .into_iter()
        .map(to_board_item)
        .collect::<Vec<_>>();
    let message = format!("{} project(s).", items.len());
    BoardLaneResponse {
        ok: true,
        heading: list.heading(),
        list_id: list.list_id(),
        items,
        message,
    }
}

fn status_response(id: u32, change: StatusChange) -> BoardActionResponse {
    match change {
        StatusChange::Changed { to, .. } => {
            BoardActionResponse::success(format!("Project moved to {to}."), id, true)
        }
        StatusChange::Unchanged => {
            BoardActionResponse::success("Project already in lane.", id, false)
        }
        StatusChange::NotFound => BoardActionResponse::success("Project not found.", id, false),
    }
}

fn lock_board() -> MutexGuard<'static, BoardService> {
    BOARD
        .get_or_init(|| Mutex::new(BoardService::new(resolve_board_config())))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn resolve_board_config() -> BoardConfig {
    board_config_from(std::env::var(SEED_DEMO_ENV).ok().as_deref())
}

/// `0`/`false` (any case) disables the demo seed; anything else keeps the default.
fn board_config_from(seed_demo: Option<&str>) -> BoardConfig {
    let mut config = BoardConfig::default();
    if let Some(raw) = seed_demo {
        let trimmed = raw.trim().to_ascii_lowercase();
        if trimmed == "0" || trimmed == "false" {
            config.seed_demo_project = false;
        }
    }
    config
}

fn resolve_log_level(level: &str) -> &str {
    if level.trim().is_empty() {
        default_log_level()
    } else {
        level
    }
}

fn to_board_item(item: RenderedItem) -> BoardItem {
    BoardItem {
        element_id: item.element_id,
        title: item.title,
        assigned: item.assigned,
        description: item.description,
    }
}
