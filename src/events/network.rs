use crate::api::{TaskId, TodoApi};
use crate::state::{MessageKind, State};
use anyhow::{Context, Result};
use log::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Load,
    AddTask { title: String },
    ToggleComplete { id: TaskId, completed: bool },
    DeleteTask { id: TaskId },
    SaveTask { id: TaskId, title: String },
}

/// Specify struct for managing state with network events.
///
/// Every operation leaves the state untouched when the store call fails; the
/// error is handed back with context to the caller, which logs it once.
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    api: TodoApi,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: Arc<Mutex<State>>, api: TodoApi) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Load => self.load().await?,
            Event::AddTask { title } => self.add_task(title).await?,
            Event::ToggleComplete { id, completed } => self.toggle_complete(id, completed).await?,
            Event::DeleteTask { id } => self.delete_task(id).await?,
            Event::SaveTask { id, title } => self.save_task(id, title).await?,
        }
        Ok(())
    }

    /// Replace the local list with the store's collection.
    ///
    pub async fn load(&self) -> Result<()> {
        info!("Fetching tasks...");
        let tasks = self.api.tasks().await.context("Error fetching tasks")?;
        info!("Received {} tasks.", tasks.len());
        let mut state = self.state.lock().await;
        state.set_tasks(tasks);
        Ok(())
    }

    /// Create a task, then clear the input and reload.
    ///
    pub async fn add_task(&self, title: String) -> Result<()> {
        if title.trim().is_empty() {
            debug!("Skipping create request for blank title.");
            return Ok(());
        }
        info!("Adding task '{}'...", title);
        self.api
            .create_task(&title)
            .await
            .context("Error adding task")?;
        {
            let mut state = self.state.lock().await;
            state.clear_new_task_input();
        }
        self.load().await
    }

    /// Flip the completion flag of a task, then announce it and reload.
    ///
    pub async fn toggle_complete(&self, id: TaskId, completed: bool) -> Result<()> {
        info!("Updating task {}...", id);
        self.api
            .set_completed(&id, !completed)
            .await
            .with_context(|| format!("Error updating task {}", id))?;
        self.announce(MessageKind::Completion).await;
        self.load().await
    }

    /// Delete a task, then announce it and reload.
    ///
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        info!("Deleting task {}...", id);
        self.api
            .delete_task(&id)
            .await
            .with_context(|| format!("Error deleting task {}", id))?;
        self.announce(MessageKind::Deletion).await;
        self.load().await
    }

    /// Save a new title, then announce it and reload. The reload replaces
    /// the record and with it the editing flag.
    ///
    pub async fn save_task(&self, id: TaskId, title: String) -> Result<()> {
        info!("Saving task {}...", id);
        self.api
            .set_title(&id, &title)
            .await
            .with_context(|| format!("Error saving task {}", id))?;
        self.announce(MessageKind::Edit).await;
        self.load().await
    }

    async fn announce(&self, kind: MessageKind) {
        let mut state = self.state.lock().await;
        state.show_message(kind, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Task;
    use crate::state::TaskFilter;
    use httpmock::MockServer;
    use serde_json::json;

    const COLLECTION_PATH: &str = "/api/todos/";

    fn task(id: u64, title: &str, completed: bool) -> Task {
        Task {
            id: TaskId::from(id),
            title: title.to_string(),
            completed,
            is_editing: false,
        }
    }

    fn handler_for(server: &MockServer, state: State) -> Handler {
        let api = TodoApi::new(&server.url(COLLECTION_PATH)).unwrap();
        Handler::new(Arc::new(Mutex::new(state)), api)
    }

    fn seeded_state() -> State {
        let mut state = State::default();
        state.set_tasks(vec![
            task(1, "Write report", false),
            task(2, "Book flights", true),
        ]);
        state
    }

    #[tokio::test]
    async fn load_replaces_list() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(200).json_body(json!([
                    { "id": 5, "title": "Fresh", "completed": false },
                ]));
            })
            .await;

        let handler = handler_for(&server, seeded_state());
        handler.handle(Event::Load).await?;
        mock.assert_async().await;

        let state = handler.state.lock().await;
        assert_eq!(state.get_tasks(), &[task(5, "Fresh", false)]);
        Ok(())
    }

    #[tokio::test]
    async fn load_failure_keeps_list_and_filter() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(502);
            })
            .await;

        let mut state = seeded_state();
        state.set_task_filter(TaskFilter::Completed);
        let before = state.get_tasks().to_vec();
        let handler = handler_for(&server, state);

        assert!(handler.load().await.is_err());
        let state = handler.state.lock().await;
        assert_eq!(state.get_tasks(), before.as_slice());
        assert_eq!(state.get_task_filter(), TaskFilter::Completed);
    }

    #[tokio::test]
    async fn add_task_creates_clears_input_and_reloads() -> Result<()> {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path(COLLECTION_PATH)
                    .json_body(json!({ "title": "Buy milk", "completed": false }));
                then.status(201);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(200).json_body(json!([
                    { "id": 1, "title": "Write report", "completed": false },
                    { "id": 2, "title": "Book flights", "completed": true },
                    { "id": 3, "title": "Buy milk", "completed": false },
                ]));
            })
            .await;

        let mut state = seeded_state();
        for c in "Buy milk".chars() {
            state.add_new_task_char(c);
        }
        let handler = handler_for(&server, state);
        handler
            .handle(Event::AddTask {
                title: "Buy milk".to_string(),
            })
            .await?;
        create.assert_async().await;
        list.assert_async().await;

        let state = handler.state.lock().await;
        assert_eq!(state.get_new_task_input(), "");
        assert!(state
            .get_tasks()
            .iter()
            .any(|t| t.title == "Buy milk" && !t.completed));
        Ok(())
    }

    #[tokio::test]
    async fn add_blank_task_makes_no_request() -> Result<()> {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method("POST").path(COLLECTION_PATH);
                then.status(201);
            })
            .await;

        let handler = handler_for(&server, seeded_state());
        handler.add_task("   ".to_string()).await?;
        handler.add_task(String::new()).await?;
        assert_eq!(create.hits_async().await, 0);

        let state = handler.state.lock().await;
        assert_eq!(state.get_tasks().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn add_task_failure_keeps_input() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path(COLLECTION_PATH);
                then.status(422);
            })
            .await;

        let mut state = seeded_state();
        for c in "Buy milk".chars() {
            state.add_new_task_char(c);
        }
        let handler = handler_for(&server, state);
        assert!(handler.add_task("Buy milk".to_string()).await.is_err());

        let state = handler.state.lock().await;
        assert_eq!(state.get_new_task_input(), "Buy milk");
        assert_eq!(state.get_tasks().len(), 2);
    }

    #[tokio::test]
    async fn toggle_complete_flips_only_that_task() -> Result<()> {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/api/todos/1/")
                    .json_body(json!({ "completed": true }));
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(200).json_body(json!([
                    { "id": 1, "title": "Write report", "completed": true },
                    { "id": 2, "title": "Book flights", "completed": true },
                ]));
            })
            .await;

        let handler = handler_for(&server, seeded_state());
        handler
            .handle(Event::ToggleComplete {
                id: TaskId::from(1),
                completed: false,
            })
            .await?;
        patch.assert_async().await;

        let state = handler.state.lock().await;
        assert_eq!(
            state.get_tasks(),
            &[task(1, "Write report", true), task(2, "Book flights", true)]
        );
        assert_eq!(
            state.active_messages(Instant::now()),
            vec![MessageKind::Completion]
        );
        Ok(())
    }

    #[tokio::test]
    async fn toggle_complete_failure_is_silent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("PATCH").path("/api/todos/1/");
                then.status(500);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(200).json_body(json!([]));
            })
            .await;

        let handler = handler_for(&server, seeded_state());
        let result = handler.toggle_complete(TaskId::from(1), false).await;
        let line = format!("{:#}", result.unwrap_err());
        assert!(line.starts_with("Error updating task 1: "));
        assert!(line.contains("status 500"));
        assert_eq!(list.hits_async().await, 0);

        let state = handler.state.lock().await;
        assert_eq!(state.get_tasks().len(), 2);
        assert!(!state.get_tasks()[0].completed);
        assert!(state.active_messages(Instant::now()).is_empty());
    }

    #[tokio::test]
    async fn delete_task_removes_only_that_record() -> Result<()> {
        let server = MockServer::start_async().await;
        let delete = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/api/todos/2/");
                then.status(204);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(200).json_body(json!([
                    { "id": 1, "title": "Write report", "completed": false },
                ]));
            })
            .await;

        let handler = handler_for(&server, seeded_state());
        handler
            .handle(Event::DeleteTask {
                id: TaskId::from(2),
            })
            .await?;
        delete.assert_async().await;

        let state = handler.state.lock().await;
        assert_eq!(state.get_tasks(), &[task(1, "Write report", false)]);
        assert_eq!(
            state.active_messages(Instant::now()),
            vec![MessageKind::Deletion]
        );
        Ok(())
    }

    #[tokio::test]
    async fn save_task_updates_title_and_closes_edit() -> Result<()> {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/api/todos/2/")
                    .json_body(json!({ "title": "Book trains" }));
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path(COLLECTION_PATH);
                then.status(200).json_body(json!([
                    { "id": 1, "title": "Write report", "completed": false },
                    { "id": 2, "title": "Book trains", "completed": true },
                ]));
            })
            .await;

        let mut state = seeded_state();
        state.start_editing(&TaskId::from(2))?;
        let handler = handler_for(&server, state);
        handler
            .handle(Event::SaveTask {
                id: TaskId::from(2),
                title: "Book trains".to_string(),
            })
            .await?;
        patch.assert_async().await;

        let state = handler.state.lock().await;
        assert_eq!(
            state.get_tasks(),
            &[task(1, "Write report", false), task(2, "Book trains", true)]
        );
        assert!(!state.is_editing());
        assert_eq!(state.active_messages(Instant::now()), vec![MessageKind::Edit]);
        Ok(())
    }

    #[tokio::test]
    async fn save_task_failure_keeps_edit_open() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("PATCH").path("/api/todos/2/");
                then.status(404);
            })
            .await;

        let mut state = seeded_state();
        state.start_editing(&TaskId::from(2))?;
        let handler = handler_for(&server, state);
        assert!(handler
            .save_task(TaskId::from(2), "Book trains".to_string())
            .await
            .is_err());

        let state = handler.state.lock().await;
        assert!(state.is_editing());
        assert_eq!(state.get_tasks()[1].title, "Book flights");
        assert!(state.active_messages(Instant::now()).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_store_leaves_state_untouched() {
        let api = TodoApi::new("http://127.0.0.1:9/api/todos/").unwrap();
        let handler = Handler::new(Arc::new(Mutex::new(seeded_state())), api);

        assert!(handler.handle(Event::Load).await.is_err());
        assert!(handler
            .handle(Event::DeleteTask {
                id: TaskId::from(1)
            })
            .await
            .is_err());

        let state = handler.state.lock().await;
        assert_eq!(state.get_tasks().len(), 2);
    }
}
