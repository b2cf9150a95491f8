use crate::api::{Task, TaskId};
use crate::app::{ConfigSaveSender, NetworkEventSender};
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::{Theme, ThemeMode};
use log::*;
use ratatui::widgets::ListState;
use std::time::Instant;

use super::error::StateError;
use super::filter::TaskFilter;
use super::messages::{MessageKind, TransientMessages};
use super::navigation::Focus;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    config_save_sender: Option<ConfigSaveSender>,
    tasks: Vec<Task>,
    tasks_list_state: ListState,
    task_filter: TaskFilter,
    current_focus: Focus,
    new_task_input: String,
    edit_target: Option<TaskId>, // Task owning the edit buffer
    edit_buffer: String,
    messages: TransientMessages,
    theme_mode: ThemeMode,
    theme: Theme,
    log_buffer: LogBuffer,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            config_save_sender: None,
            tasks: vec![],
            tasks_list_state: ListState::default(),
            task_filter: TaskFilter::All,
            current_focus: Focus::Input,
            new_task_input: String::new(),
            edit_target: None,
            edit_buffer: String::new(),
            messages: TransientMessages::default(),
            theme_mode: ThemeMode::default(),
            theme: Theme::default(),
            log_buffer: LogBuffer::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        config_save_sender: ConfigSaveSender,
        theme_mode: ThemeMode,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            config_save_sender: Some(config_save_sender),
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            log_buffer,
            ..State::default()
        }
    }

    /// Return the full task list in server order.
    ///
    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the task list wholesale with a freshly fetched one. Any local
    /// editing flags are dropped along with the old records.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks = tasks;
        self.clamp_selection();
        self
    }

    /// Return the tasks visible under the current filter, in server order.
    ///
    pub fn get_filtered_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.task_filter.matches(task))
            .collect()
    }

    /// Return whether the list should show the "no active tasks" indicator
    /// instead of an empty list.
    ///
    pub fn shows_no_active_tasks(&self) -> bool {
        self.task_filter == TaskFilter::Active && self.get_filtered_tasks().is_empty()
    }

    /// Get the current task filter.
    ///
    pub fn get_task_filter(&self) -> TaskFilter {
        self.task_filter
    }

    /// Set the task filter.
    ///
    pub fn set_task_filter(&mut self, filter: TaskFilter) -> &mut Self {
        debug!("Switching task filter to {:?}.", filter);
        self.task_filter = filter;
        self.clamp_selection();
        self
    }

    /// Cycle to the next task filter.
    ///
    pub fn next_task_filter(&mut self) -> &mut Self {
        let next = self.task_filter.next();
        self.set_task_filter(next)
    }

    /// Return the current focus. An edit focus without an open edit box
    /// reads as the list.
    ///
    pub fn current_focus(&self) -> Focus {
        match self.current_focus {
            Focus::Edit if !self.is_editing() => Focus::List,
            focus => focus,
        }
    }

    /// Change focus to the new task input.
    ///
    pub fn focus_input(&mut self) -> &mut Self {
        self.current_focus = Focus::Input;
        self
    }

    /// Change focus to the task list.
    ///
    pub fn focus_list(&mut self) -> &mut Self {
        self.current_focus = Focus::List;
        self.clamp_selection();
        self
    }

    pub fn get_new_task_input(&self) -> &str {
        &self.new_task_input
    }

    pub fn add_new_task_char(&mut self, c: char) -> &mut Self {
        self.new_task_input.push(c);
        self
    }

    pub fn remove_new_task_char(&mut self) -> &mut Self {
        self.new_task_input.pop();
        self
    }

    pub fn clear_new_task_input(&mut self) -> &mut Self {
        self.new_task_input.clear();
        self
    }

    /// Request creation of a task from the input text. Blank input is
    /// ignored without contacting the store.
    ///
    pub fn submit_new_task(&mut self) -> &mut Self {
        if self.new_task_input.trim().is_empty() {
            debug!("Ignoring blank task title.");
            return self;
        }
        self.dispatch(NetworkEvent::AddTask {
            title: self.new_task_input.to_owned(),
        });
        self
    }

    /// Return the list state used to render the visible tasks.
    ///
    pub fn get_tasks_list_state(&mut self) -> &mut ListState {
        &mut self.tasks_list_state
    }

    /// Return the index of the selected task within the visible tasks.
    ///
    pub fn current_task_index(&self) -> Option<usize> {
        self.tasks_list_state.selected()
    }

    /// Activate the next visible task, wrapping at the end.
    ///
    pub fn next_task_index(&mut self) -> &mut Self {
        let len = self.get_filtered_tasks().len();
        if len == 0 {
            self.tasks_list_state.select(None);
            return self;
        }
        let next = match self.tasks_list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.tasks_list_state.select(Some(next));
        self
    }

    /// Activate the previous visible task, wrapping at the start.
    ///
    pub fn previous_task_index(&mut self) -> &mut Self {
        let len = self.get_filtered_tasks().len();
        if len == 0 {
            self.tasks_list_state.select(None);
            return self;
        }
        let previous = match self.tasks_list_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.tasks_list_state.select(Some(previous));
        self
    }

    /// Return the selected visible task.
    ///
    pub fn selected_task(&self) -> Result<&Task, StateError> {
        let index = self
            .current_task_index()
            .ok_or(StateError::NothingSelected)?;
        self.get_filtered_tasks()
            .get(index)
            .copied()
            .ok_or(StateError::NothingSelected)
    }

    /// Request the completion flag of the selected task to be flipped.
    ///
    pub fn toggle_selected_task(&mut self) -> Result<&mut Self, StateError> {
        let task = self.selected_task()?;
        let event = NetworkEvent::ToggleComplete {
            id: task.id.to_owned(),
            completed: task.completed,
        };
        self.dispatch(event);
        Ok(self)
    }

    /// Request deletion of the selected task.
    ///
    pub fn delete_selected_task(&mut self) -> Result<&mut Self, StateError> {
        let id = self.selected_task()?.id.to_owned();
        self.dispatch(NetworkEvent::DeleteTask { id });
        Ok(self)
    }

    /// Start editing the selected task. Returning to the task that owns the
    /// edit buffer keeps the text typed so far.
    ///
    pub fn start_editing_selected(&mut self) -> Result<&mut Self, StateError> {
        let id = self.selected_task()?.id.to_owned();
        if self.editing_task().map(|task| &task.id) == Some(&id) {
            self.current_focus = Focus::Edit;
            return Ok(self);
        }
        self.start_editing(&id)
    }

    /// Mark the task as being edited and seed the edit buffer with its title.
    /// This never contacts the store, and other tasks keep their flags.
    ///
    pub fn start_editing(&mut self, id: &TaskId) -> Result<&mut Self, StateError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| StateError::TaskNotFound { id: id.to_owned() })?;
        task.is_editing = true;
        self.edit_buffer = task.title.to_owned();
        self.edit_target = Some(id.to_owned());
        self.current_focus = Focus::Edit;
        Ok(self)
    }

    /// Return the task owning the edit buffer while it is still in editing.
    ///
    pub fn editing_task(&self) -> Option<&Task> {
        let id = self.edit_target.as_ref()?;
        self.tasks
            .iter()
            .find(|task| &task.id == id && task.is_editing)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_task().is_some()
    }

    /// Return whether typed keys go to the edit buffer.
    ///
    pub fn is_edit_focused(&self) -> bool {
        self.current_focus() == Focus::Edit
    }

    pub fn get_edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    pub fn add_edit_char(&mut self, c: char) -> &mut Self {
        self.edit_buffer.push(c);
        self
    }

    pub fn remove_edit_char(&mut self) -> &mut Self {
        self.edit_buffer.pop();
        self
    }

    /// Request the edited title to be saved and hand focus back to the
    /// list. The editing flag stays set until a reload replaces the record.
    ///
    pub fn submit_edit(&mut self) -> &mut Self {
        if let Some(task) = self.editing_task() {
            let event = NetworkEvent::SaveTask {
                id: task.id.to_owned(),
                title: self.edit_buffer.to_owned(),
            };
            self.dispatch(event);
        }
        self.focus_list()
    }

    /// Show a transient message of the given kind.
    ///
    pub fn show_message(&mut self, kind: MessageKind, now: Instant) -> &mut Self {
        self.messages.show(kind, now);
        self
    }

    /// Clear messages whose window elapsed.
    ///
    pub fn prune_messages(&mut self, now: Instant) -> &mut Self {
        self.messages.prune(now);
        self
    }

    /// Return the messages visible at the given instant.
    ///
    pub fn active_messages(&self, now: Instant) -> Vec<MessageKind> {
        self.messages.active(now)
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Flip between light and dark mode, switch palettes and ask for the new
    /// preference to be persisted.
    ///
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::for_mode(self.theme_mode);
        info!("Switched to {:?} mode.", self.theme_mode);
        if let Some(sender) = &self.config_save_sender {
            if let Err(err) = sender.send(self.theme_mode) {
                error!("Failed to request config save: {}", err);
            }
        }
        self.theme_mode
    }

    /// Stop sending theme changes to the config saver, letting it finish.
    ///
    pub fn close_config_channel(&mut self) -> &mut Self {
        self.config_save_sender = None;
        self
    }

    /// Return the most recent log lines.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.tail(count)
    }

    /// Dispatches an asynchronous network event.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(net_sender) = &self.net_sender {
            if let Err(err) = net_sender.send(event) {
                error!("Received error from network dispatch: {}", err);
            }
        }
    }

    /// Keep the selection inside the visible list.
    ///
    fn clamp_selection(&mut self) {
        let len = self.get_filtered_tasks().len();
        let selected = match (self.tasks_list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.tasks_list_state.select(selected);
    }
}
