mod client;
mod error;
mod models;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use models::{NewTask, TaskPatch, TaskRecord};
use reqwest::Method;

/// Default location of the remote task collection.
///
pub const DEFAULT_API_URL: &str = "https://fastapi-todolist-backend.onrender.com/api/todos/";

/// Responsible for asynchronous interaction with the remote task store
/// including transformation of response data into explicitly-defined types.
///
#[derive(Clone)]
pub struct TodoApi {
    client: Client,
}

impl TodoApi {
    /// Returns a new instance for the given collection URL.
    ///
    pub fn new(base_url: &str) -> Result<TodoApi, ApiError> {
        debug!("Initializing task store client for {}...", base_url);
        Ok(TodoApi {
            client: Client::new(base_url)?,
        })
    }

    /// Returns every task in the collection, in server order.
    ///
    pub async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        debug!("Requesting task collection...");
        let records: Vec<TaskRecord> = self
            .client
            .json(Method::GET, &self.client.collection_url(), None)
            .await?;
        debug!("Retrieved {} tasks", records.len());
        Ok(records.into_iter().map(Task::from).collect())
    }

    /// Create an incomplete task with the given title.
    ///
    pub async fn create_task(&self, title: &str) -> Result<(), ApiError> {
        debug!("Creating task '{}'...", title);
        let body = serde_json::to_value(NewTask {
            title,
            completed: false,
        })?;
        self.client
            .call(Method::POST, &self.client.collection_url(), Some(body))
            .await?;
        Ok(())
    }

    /// Set the completion flag of a task.
    ///
    pub async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), ApiError> {
        debug!("Setting task {} completed to {}...", id, completed);
        self.patch(
            id,
            TaskPatch {
                completed: Some(completed),
                ..TaskPatch::default()
            },
        )
        .await
    }

    /// Set the title of a task.
    ///
    pub async fn set_title(&self, id: &TaskId, title: &str) -> Result<(), ApiError> {
        debug!("Renaming task {} to '{}'...", id, title);
        self.patch(
            id,
            TaskPatch {
                title: Some(title),
                ..TaskPatch::default()
            },
        )
        .await
    }

    /// Delete a task.
    ///
    pub async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        debug!("Deleting task {}...", id);
        self.client
            .call(Method::DELETE, &self.client.item_url(id.as_str()), None)
            .await?;
        Ok(())
    }

    async fn patch(&self, id: &TaskId, patch: TaskPatch<'_>) -> Result<(), ApiError> {
        let body = serde_json::to_value(patch)?;
        self.client
            .call(Method::PATCH, &self.client.item_url(id.as_str()), Some(body))
            .await?;
        Ok(())
    }
}
