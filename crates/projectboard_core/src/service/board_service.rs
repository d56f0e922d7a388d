//! Board bootstrap and gesture routing.
//!
//! # Responsibility
//! - Construct exactly one store per board and hand it to every view by reference.
//! - Expose create/toggle/drag entry points for UI hosts.
//!
//! # Invariants
//! - Lanes are subscribed before the initial `notify_all`, so they render the
//!   seed data without any user action.
//! - All mutations go through `ProjectStore`; the service holds no project data.

use crate::dnd::source::Draggable;
use crate::dnd::target::{DragOverDecision, DragTarget};
use crate::dnd::transfer::{DataTransfer, PayloadError};
use crate::input::form::{InputError, ProjectInput};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::store::{ProjectStore, StatusChange};
use crate::view::project_item::ProjectItemView;
use crate::view::project_list::ProjectList;
use log::info;
use std::sync::Arc;

/// Board startup options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Start with the demo project (id 999) in the active lane.
    pub seed_demo_project: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_demo_project: true,
        }
    }
}

/// A drag gesture in flight: the picked-up item and its payload.
#[derive(Debug, Clone)]
pub struct DragSession {
    source: ProjectItemView,
    transfer: DataTransfer,
}

impl DragSession {
    pub fn transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    pub fn source(&self) -> &ProjectItemView {
        &self.source
    }
}

/// The assembled board: one store, one input form, two lanes.
pub struct BoardService {
    store: ProjectStore,
    input: ProjectInput,
    active: Arc<ProjectList>,
    finished: Arc<ProjectList>,
}

impl Default for BoardService {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardService {
    pub fn new(config: BoardConfig) -> Self {
        let mut store = if config.seed_demo_project {
            ProjectStore::seeded()
        } else {
            ProjectStore::new()
        };
        let input = ProjectInput::new();
        let active = ProjectList::attach(ProjectStatus::Active, &mut store);
        let finished = ProjectList::attach(ProjectStatus::Finished, &mut store);
        let report = store.notify_all();

        info!(
            "event=board_init module=service status=ok projects={} listeners={}",
            store.len(),
            report.delivered
        );
        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn lane(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &*self.active,
            ProjectStatus::Finished => &*self.finished,
        }
    }

    /// Submits the current form contents.
    pub fn submit_input(&mut self) -> Result<Project, InputError> {
        self.input.submit(&mut self.store)
    }

    /// Fills the form and submits it in one step.
    pub fn create_project(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<Project, InputError> {
        self.input.fill(title, description, people);
        self.submit_input()
    }

    /// Clicks the toggle button of the rendered item `id`.
    ///
    /// An id that is not rendered in either lane is a no-op.
    pub fn toggle(&mut self, id: ProjectId) -> StatusChange {
        match self.rendered_item(id) {
            Some(item) => item.toggle_status(&mut self.store),
            None => StatusChange::NotFound,
        }
    }

    /// Picks up the rendered item `id`, writing its payload.
    pub fn start_drag(&self, id: ProjectId) -> Option<DragSession> {
        let mut source = self.rendered_item(id)?;
        let mut transfer = DataTransfer::new();
        source.on_drag_start(&mut transfer);
        Some(DragSession { source, transfer })
    }

    /// Ends the gesture on the source side, whatever happened on the target side.
    pub fn end_drag(&self, session: &mut DragSession) {
        session.source.on_drag_end();
    }

    pub fn drag_over(&self, lane: ProjectStatus, transfer: &DataTransfer) -> DragOverDecision {
        self.lane(lane).on_drag_over(transfer)
    }

    pub fn drop_on(
        &mut self,
        lane: ProjectStatus,
        transfer: &DataTransfer,
    ) -> Result<StatusChange, PayloadError> {
        let target = match lane {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        };
        target.on_drop(&mut self.store, transfer)
    }

    pub fn drag_leave(&self, lane: ProjectStatus) {
        self.lane(lane).on_drag_leave();
    }

    /// Full gesture: drag `id` over `lane`, drop if accepted, then end the drag.
    ///
    /// Returns `Ok(None)` when the item is not rendered or the lane rejected the hover.
    pub fn drag_and_drop(
        &mut self,
        id: ProjectId,
        lane: ProjectStatus,
    ) -> Result<Option<StatusChange>, PayloadError> {
        let Some(mut session) = self.start_drag(id) else {
            return Ok(None);
        };
        let outcome = match self.drag_over(lane, &session.transfer) {
            DragOverDecision::Accept => self.drop_on(lane, &session.transfer).map(Some),
            DragOverDecision::Reject => Ok(None),
        };
        self.end_drag(&mut session);
        outcome
    }

    fn rendered_item(&self, id: ProjectId) -> Option<ProjectItemView> {
        self.active.item(id).or_else(|| self.finished.item(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, BoardService};
    use crate::dnd::source::{DragSourceState, Draggable};
    use crate::dnd::transfer::DragPayload;
    use crate::model::project::ProjectStatus;
    use crate::state::store::StatusChange;

    #[test]
    fn default_board_renders_seed_in_active_lane() {
        let board = BoardService::default();
        assert_eq!(board.lane(ProjectStatus::Active).assigned_ids(), vec![999]);
        assert!(board.lane(ProjectStatus::Finished).assigned().is_empty());
        assert_eq!(board.store().listener_count(), 2);
    }

    #[test]
    fn unseeded_board_starts_empty_but_rendered() {
        let board = BoardService::new(BoardConfig {
            seed_demo_project: false,
        });
        assert!(board.store().is_empty());
        assert_eq!(board.lane(ProjectStatus::Active).render_count(), 1);
        assert_eq!(board.lane(ProjectStatus::Finished).render_count(), 1);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut board = BoardService::default();
        assert_eq!(board.toggle(1), StatusChange::NotFound);
        assert_eq!(board.lane(ProjectStatus::Active).render_count(), 1);
    }

    #[test]
    fn drag_session_tracks_source_until_end() {
        let board = BoardService::default();
        let mut session = board.start_drag(999).expect("seed is rendered");
        assert_eq!(session.source().project().id, 999);
        assert_eq!(session.source().drag_state(), DragSourceState::Dragging);
        assert_eq!(
            DragPayload::read_from(session.transfer()),
            Ok(DragPayload::project(999))
        );

        board.end_drag(&mut session);
        assert_eq!(session.source().drag_state(), DragSourceState::Idle);
        assert!(board.start_drag(42).is_none());
    }
}
