use fake::Dummy;
use std::fmt;

/// Defines the opaque, server-assigned task identifier.
///
/// The store may hand out numeric or textual ids; both are kept in their
/// textual form since the client only ever echoes them back in item paths.
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_owned())
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        TaskId(id.to_string())
    }
}

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub is_editing: bool, // Client only, never sent to the store
}
