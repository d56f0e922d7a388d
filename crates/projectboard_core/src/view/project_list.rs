//! Lane view: filters snapshots by lane, renders items, accepts drops.

use crate::dnd::target::{accepts_payload, DragOverDecision, DragTarget, DropZoneState};
use crate::dnd::transfer::{DataTransfer, DragPayload, PayloadError};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listener::{ListenerResult, ProjectListener};
use crate::state::store::{ProjectStore, StatusChange};
use crate::view::project_item::{ProjectItemView, RenderedItem};
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct LaneState {
    assigned: Vec<Project>,
    items: Vec<ProjectItemView>,
    drop_state: DropZoneState,
    render_count: usize,
}

/// One of the two fixed board lanes.
#[derive(Debug)]
pub struct ProjectList {
    lane: ProjectStatus,
    state: Mutex<LaneState>,
}

impl ProjectList {
    pub fn new(lane: ProjectStatus) -> Self {
        Self {
            lane,
            state: Mutex::new(LaneState::default()),
        }
    }

    /// Builds the lane and subscribes it to `store`.
    pub fn attach(lane: ProjectStatus, store: &mut ProjectStore) -> Arc<Self> {
        let list = Arc::new(Self::new(lane));
        store.subscribe(list.clone());
        list
    }

    pub fn lane(&self) -> ProjectStatus {
        self.lane
    }

    /// Section element id, e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.lane.as_str())
    }

    /// List element id items attach to, e.g. `finished-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.lane.as_str())
    }

    /// Section heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.lane.as_str().to_ascii_uppercase())
    }

    /// Projects of this lane from the last snapshot, in snapshot order.
    pub fn assigned(&self) -> Vec<Project> {
        self.state().assigned.clone()
    }

    pub fn assigned_ids(&self) -> Vec<ProjectId> {
        self.state().assigned.iter().map(|project| project.id).collect()
    }

    pub fn rendered(&self) -> Vec<RenderedItem> {
        self.state()
            .items
            .iter()
            .map(|item| item.rendered().clone())
            .collect()
    }

    /// Item view for `id` if it is rendered in this lane.
    pub fn item(&self, id: ProjectId) -> Option<ProjectItemView> {
        self.state()
            .items
            .iter()
            .find(|item| item.project().id == id)
            .cloned()
    }

    /// Number of full renders performed so far.
    pub fn render_count(&self) -> usize {
        self.state().render_count
    }

    /// Whether the droppable affordance is currently applied.
    pub fn is_droppable(&self) -> bool {
        self.state().drop_state == DropZoneState::HoverValid
    }

    /// Replaces the rendered list with views for `projects`.
    pub fn render(&self, projects: Vec<Project>) {
        let list_id = self.list_id();
        let mut state = self.state();
        state.items = projects
            .iter()
            .cloned()
            .map(|project| ProjectItemView::new(list_id.as_str(), project))
            .collect();
        state.assigned = projects;
        state.render_count += 1;
    }

    fn state(&self) -> MutexGuard<'_, LaneState> {
        // Poisoned state is still plain render data; the next render replaces it.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_drop_state(&self, drop_state: DropZoneState) {
        self.state().drop_state = drop_state;
    }
}

impl ProjectListener for ProjectList {
    fn on_snapshot(&self, projects: Vec<Project>) -> ListenerResult {
        let assigned = projects
            .into_iter()
            .filter(|project| project.status == self.lane)
            .collect::<Vec<_>>();
        self.render(assigned);
        Ok(())
    }
}

impl DragTarget for ProjectList {
    fn on_drag_over(&self, transfer: &DataTransfer) -> DragOverDecision {
        if !accepts_payload(transfer) {
            return DragOverDecision::Reject;
        }
        self.set_drop_state(DropZoneState::HoverValid);
        DragOverDecision::Accept
    }

    fn on_drop(
        &self,
        store: &mut ProjectStore,
        transfer: &DataTransfer,
    ) -> Result<StatusChange, PayloadError> {
        // Lane lock must be released before the store broadcasts back into this lane.
        self.set_drop_state(DropZoneState::Idle);

        let payload = DragPayload::read_from(transfer).map_err(|err| {
            warn!(
                "event=drop_rejected module=view status=error lane={} error={}",
                self.lane, err
            );
            err
        })?;
        let change = store.change_status(payload.project_id, self.lane);
        debug!(
            "event=drop module=view status=ok lane={} id={} changed={}",
            self.lane,
            payload.project_id,
            change.is_changed()
        );
        Ok(change)
    }

    fn on_drag_leave(&self) {
        self.set_drop_state(DropZoneState::Idle);
    }

    fn drop_state(&self) -> DropZoneState {
        self.state().drop_state
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectList;
    use crate::model::project::ProjectStatus;
    use crate::state::store::ProjectStore;

    #[test]
    fn element_ids_and_heading_follow_lane_key() {
        let list = ProjectList::new(ProjectStatus::Finished);
        assert_eq!(list.element_id(), "finished-projects");
        assert_eq!(list.list_id(), "finished-projects-list");
        assert_eq!(list.heading(), "FINISHED PROJECTS");
    }

    #[test]
    fn attach_subscribes_and_renders_on_broadcast() {
        let mut store = ProjectStore::seeded();
        let active = ProjectList::attach(ProjectStatus::Active, &mut store);
        assert_eq!(store.listener_count(), 1);
        assert_eq!(active.render_count(), 0);

        store.notify_all();
        assert_eq!(active.render_count(), 1);
        assert_eq!(active.assigned_ids(), vec![999]);
        assert_eq!(active.rendered()[0].host_id, "active-projects-list");
    }

    #[test]
    fn every_broadcast_rerenders_even_unaffected_lane() {
        let mut store = ProjectStore::new();
        let finished = ProjectList::attach(ProjectStatus::Finished, &mut store);

        store.create("a", "first one", 1);
        store.create("b", "second one", 1);

        assert_eq!(finished.render_count(), 2);
        assert!(finished.assigned().is_empty());
    }
}
