//! Drag payload channel and its typed project payload.

use crate::model::project::ProjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Plain-text channel carrying the dragged project id.
pub const TEXT_PLAIN: &str = "text/plain";

/// Transfer effect requested by the drag source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// Host drag payload: typed entries in declaration order plus an effect hint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `mime`, replacing an existing entry in place.
    pub fn set_data(&mut self, mime: impl Into<String>, data: impl Into<String>) {
        let mime = mime.into();
        let data = data.into();
        match self.entries.iter_mut().find(|(kind, _)| *kind == mime) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((mime, data)),
        }
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(kind, _)| kind == mime)
            .map(|(_, data)| data.as_str())
    }

    /// Declared types, first declared first.
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(kind, _)| kind.as_str()).collect()
    }

    pub fn first_type(&self) -> Option<&str> {
        self.entries.first().map(|(kind, _)| kind.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Kind tag for payloads this board understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Project,
}

/// Typed view of the text channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub project_id: ProjectId,
}

impl DragPayload {
    pub fn project(project_id: ProjectId) -> Self {
        Self {
            kind: PayloadKind::Project,
            project_id,
        }
    }

    /// Writes the id as plain text and requests a `move`.
    pub fn write_to(&self, transfer: &mut DataTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project_id.to_string());
        transfer.effect_allowed = DropEffect::Move;
    }

    /// Parses the plain-text channel back into a project payload.
    ///
    /// # Errors
    /// - `MissingChannel` when no plain-text entry was declared.
    /// - `InvalidId` when the text is not a non-negative integer.
    pub fn read_from(transfer: &DataTransfer) -> Result<Self, PayloadError> {
        let raw = transfer
            .get_data(TEXT_PLAIN)
            .ok_or(PayloadError::MissingChannel)?;
        raw.trim()
            .parse::<ProjectId>()
            .map(Self::project)
            .map_err(|_| PayloadError::InvalidId(raw.to_string()))
    }
}

/// Drag payload could not be turned into a project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    MissingChannel,
    InvalidId(String),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingChannel => write!(f, "drag payload has no `{TEXT_PLAIN}` entry"),
            Self::InvalidId(value) => write!(f, "drag payload is not a project id: `{value}`"),
        }
    }
}

impl Error for PayloadError {}

#[cfg(test)]
mod tests {
    use super::{DataTransfer, DragPayload, DropEffect, PayloadError, TEXT_PLAIN};

    #[test]
    fn set_data_replaces_in_place_and_keeps_order() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "1");
        transfer.set_data("text/uri-list", "https://example.invalid");
        transfer.set_data(TEXT_PLAIN, "2");

        assert_eq!(transfer.types(), vec![TEXT_PLAIN, "text/uri-list"]);
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some("2"));
    }

    #[test]
    fn write_to_sets_text_channel_and_move_effect() {
        let mut transfer = DataTransfer::new();
        DragPayload::project(7).write_to(&mut transfer);

        assert_eq!(transfer.first_type(), Some(TEXT_PLAIN));
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some("7"));
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
    }

    #[test]
    fn read_from_trims_and_rejects_garbage() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, " 12 ");
        assert_eq!(
            DragPayload::read_from(&transfer).expect("trimmed id should parse"),
            DragPayload::project(12)
        );

        transfer.set_data(TEXT_PLAIN, "twelve");
        assert_eq!(
            DragPayload::read_from(&transfer).unwrap_err(),
            PayloadError::InvalidId("twelve".to_string())
        );

        assert_eq!(
            DragPayload::read_from(&DataTransfer::new()).unwrap_err(),
            PayloadError::MissingChannel
        );
    }
}
