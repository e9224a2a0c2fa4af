//! Note Commands

use serde::Serialize;

use super::tasks::IdArgs;
use super::{Ack, ApiClient, Verb};
use crate::error::ApiError;
use crate::models::Note;

#[derive(Serialize)]
struct CreateNoteArgs<'a> {
    title: &'a str,
    content: &'a str,
}

pub async fn list_notes(api: &ApiClient) -> Result<Vec<Note>, ApiError> {
    api.get("/api/notes").await
}

pub async fn create_note(api: &ApiClient, title: &str, content: &str) -> Result<Note, ApiError> {
    api.send(Verb::Post, "/api/notes", &CreateNoteArgs { title, content }).await
}

pub async fn delete_note(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.send::<_, Ack>(Verb::Delete, "/api/notes", &IdArgs { id }).await?.into_result()
}
