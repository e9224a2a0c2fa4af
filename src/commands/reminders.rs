//! Reminder Commands

use serde::Serialize;

use super::tasks::IdArgs;
use super::{Ack, ApiClient, Verb};
use crate::error::ApiError;
use crate::models::Reminder;

#[derive(Serialize)]
struct CreateReminderArgs<'a> {
    title: &'a str,
    datetime: &'a str,
}

pub async fn list_reminders(api: &ApiClient) -> Result<Vec<Reminder>, ApiError> {
    api.get("/api/reminders").await
}

/// `datetime` is the raw datetime-local value (`YYYY-MM-DDTHH:MM`)
pub async fn create_reminder(api: &ApiClient, title: &str, datetime: &str) -> Result<Reminder, ApiError> {
    api.send(Verb::Post, "/api/reminders", &CreateReminderArgs { title, datetime }).await
}

pub async fn delete_reminder(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.send::<_, Ack>(Verb::Delete, "/api/reminders", &IdArgs { id }).await?.into_result()
}
