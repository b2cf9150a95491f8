//! Task filter types.
//!
//! The filter is a pure view predicate over the fetched task list; it is
//! never sent to the store and never persisted.

use crate::api::Task;

/// Specifying task filter options.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Every filter, in display order.
    ///
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    /// Return whether the task is part of this filter's view.
    ///
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    /// Return the filter that follows this one in display order.
    ///
    pub fn next(&self) -> TaskFilter {
        match self {
            TaskFilter::All => TaskFilter::Active,
            TaskFilter::Active => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }

    /// Return the position of this filter in display order.
    ///
    pub fn index(&self) -> usize {
        match self {
            TaskFilter::All => 0,
            TaskFilter::Active => 1,
            TaskFilter::Completed => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TaskId;

    fn task(completed: bool) -> Task {
        Task {
            id: TaskId::from(1),
            title: "Water the plants".to_string(),
            completed,
            is_editing: false,
        }
    }

    #[test]
    fn test_task_filter_matches() {
        assert!(TaskFilter::All.matches(&task(true)));
        assert!(TaskFilter::All.matches(&task(false)));
        assert!(TaskFilter::Active.matches(&task(false)));
        assert!(!TaskFilter::Active.matches(&task(true)));
        assert!(TaskFilter::Completed.matches(&task(true)));
        assert!(!TaskFilter::Completed.matches(&task(false)));
    }

    #[test]
    fn test_task_filter_next_cycles() {
        let mut filter = TaskFilter::default();
        assert_eq!(filter, TaskFilter::All);
        for expected in [TaskFilter::Active, TaskFilter::Completed, TaskFilter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn test_task_filter_index_follows_display_order() {
        for (i, filter) in TaskFilter::ALL.iter().enumerate() {
            assert_eq!(filter.index(), i);
        }
    }
}
