//! Single project view: render output, toggle action and drag source.

use crate::dnd::source::{DragSourceState, Draggable};
use crate::dnd::transfer::{DataTransfer, DragPayload};
use crate::model::project::Project;
use crate::state::store::{ProjectStore, StatusChange};
use log::debug;

/// Render output of one project inside a lane list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Element id; the project id as text.
    pub element_id: String,
    /// List element this item is attached to.
    pub host_id: String,
    pub title: String,
    /// e.g. `2 persons assigned`.
    pub assigned: String,
    pub description: String,
}

/// View over one project copy. Rebuilt on every lane render.
#[derive(Debug, Clone)]
pub struct ProjectItemView {
    project: Project,
    rendered: RenderedItem,
    drag_state: DragSourceState,
}

impl ProjectItemView {
    pub fn new(host_id: impl Into<String>, project: Project) -> Self {
        let rendered = RenderedItem {
            element_id: project.id.to_string(),
            host_id: host_id.into(),
            title: project.title.clone(),
            assigned: format!("{} assigned", project.persons_label()),
            description: project.description.clone(),
        };
        Self {
            project,
            rendered,
            drag_state: DragSourceState::Idle,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn rendered(&self) -> &RenderedItem {
        &self.rendered
    }

    /// The item's toggle button: request the opposite lane.
    pub fn toggle_status(&self, store: &mut ProjectStore) -> StatusChange {
        store.change_status(self.project.id, self.project.status.toggled())
    }
}

impl Draggable for ProjectItemView {
    fn on_drag_start(&mut self, transfer: &mut DataTransfer) {
        DragPayload::project(self.project.id).write_to(transfer);
        self.drag_state = DragSourceState::Dragging;
    }

    fn on_drag_end(&mut self) {
        debug!("event=drag_end module=view status=ok id={}", self.project.id);
        self.drag_state = DragSourceState::Idle;
    }

    fn drag_state(&self) -> DragSourceState {
        self.drag_state
    }
}
