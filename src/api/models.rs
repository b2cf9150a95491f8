//! Wire representations of task store payloads.

use super::resource::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Identifier as it appears on the wire.
///
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawId> for TaskId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => TaskId(n.to_string()),
            RawId::Text(s) => TaskId(s),
        }
    }
}

/// Task record returned by the list endpoint.
///
#[derive(Deserialize)]
pub(crate) struct TaskRecord {
    id: RawId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    completed: bool,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task {
            id: record.id.into(),
            title: record.title,
            completed: record.completed,
            is_editing: false,
        }
    }
}

/// Body of a create request.
///
#[derive(Serialize)]
pub(crate) struct NewTask<'a> {
    pub title: &'a str,
    pub completed: bool,
}

/// Body of a partial update; absent fields are left out of the JSON.
///
#[derive(Serialize, Default)]
pub(crate) struct TaskPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
