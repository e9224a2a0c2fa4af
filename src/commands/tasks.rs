//! Task Commands

use serde::Serialize;

use super::{Ack, ApiClient, Verb};
use crate::error::ApiError;
use crate::models::{Priority, Task};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    title: &'a str,
    priority: Priority,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    id: &'a str,
    title: &'a str,
    priority: Priority,
    completed: bool,
}

#[derive(Serialize)]
pub(crate) struct IdArgs<'a> {
    pub id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_tasks(api: &ApiClient) -> Result<Vec<Task>, ApiError> {
    api.get("/api/tasks").await
}

pub async fn create_task(api: &ApiClient, title: &str, priority: Priority) -> Result<Task, ApiError> {
    api.send(Verb::Post, "/api/tasks", &CreateTaskArgs { title, priority }).await
}

/// PUT the full task; the backend echoes the stored version
pub async fn update_task(api: &ApiClient, task: &Task) -> Result<Task, ApiError> {
    let args = UpdateTaskArgs {
        id: &task.id,
        title: &task.title,
        priority: task.priority,
        completed: task.completed,
    };
    api.send(Verb::Put, "/api/tasks", &args).await
}

pub async fn delete_task(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.send::<_, Ack>(Verb::Delete, "/api/tasks", &IdArgs { id }).await?.into_result()
}
