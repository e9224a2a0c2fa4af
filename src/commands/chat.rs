//! Chat Commands
//!
//! General assistant conversation: send, edit-and-regenerate, reset.

use serde::{Deserialize, Serialize};

use super::{Ack, ApiClient, Verb};
use crate::error::ApiError;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SendArgs<'a> {
    message: &'a str,
    search: bool,
}

#[derive(Serialize)]
struct EditArgs<'a> {
    index: usize,
    content: &'a str,
}

// ========================
// Replies
// ========================

/// Reply to a chat message. `response` is missing when the backend failed
/// to produce one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub user_index: Option<usize>,
    #[serde(default)]
    pub ai_index: Option<usize>,
    #[serde(default)]
    pub searched: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatReply {
    /// The reply text, if the backend produced a non-blank one
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref().filter(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub ai_index: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

impl EditReply {
    /// `(response, ai_index)`, or the server's error verbatim
    pub fn into_result(self) -> Result<(String, Option<usize>), ApiError> {
        match (self.response, self.error) {
            (_, Some(error)) => Err(ApiError::Server(error)),
            (Some(response), None) => Ok((response, self.ai_index)),
            (None, None) => Err(ApiError::Decode("edit reply without response".to_string())),
        }
    }
}

// ========================
// Commands
// ========================

pub async fn send_message(api: &ApiClient, message: &str, search: bool) -> Result<ChatReply, ApiError> {
    api.send(Verb::Post, "/api/chat", &SendArgs { message, search }).await
}

/// Replace the user message at `index` and regenerate everything after it
pub async fn edit_message(api: &ApiClient, index: usize, content: &str) -> Result<(String, Option<usize>), ApiError> {
    api.send::<_, EditReply>(Verb::Post, "/api/chat/edit", &EditArgs { index, content })
        .await?
        .into_result()
}

pub async fn reset_chat(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty::<Ack>("/api/chat/reset").await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_body;

    #[test]
    fn test_chat_reply_shape() {
        let reply: ChatReply = decode_body(
            200,
            true,
            r#"{"response": "Hi!", "user_index": 1, "ai_index": 2, "searched": true, "model": "x"}"#,
        )
        .unwrap();
        assert_eq!(reply.text(), Some("Hi!"));
        assert_eq!(reply.user_index, Some(1));
        assert_eq!(reply.ai_index, Some(2));
        assert!(reply.searched);
    }

    #[test]
    fn test_chat_reply_without_response() {
        let reply: ChatReply = decode_body(200, true, "{}").unwrap();
        assert!(reply.response.is_none());
        assert!(reply.text().is_none());
        assert!(!reply.searched);
    }

    #[test]
    fn test_blank_response_has_no_text() {
        for body in [r#"{"response": ""}"#, r#"{"response": "  \n "}"#] {
            let reply: ChatReply = decode_body(200, true, body).unwrap();
            assert_eq!(reply.text(), None);
        }
        let reply: ChatReply = decode_body(200, true, r#"{"response": "Hi"}"#).unwrap();
        assert_eq!(reply.text(), Some("Hi"));
    }

    #[test]
    fn test_edit_reply_error_wins() {
        let reply: EditReply = decode_body(200, true, r#"{"error": "Can only edit user messages"}"#).unwrap();
        assert_eq!(
            reply.into_result(),
            Err(ApiError::Server("Can only edit user messages".into()))
        );

        let ok: EditReply = decode_body(200, true, r#"{"response": "new", "ai_index": 4}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(("new".to_string(), Some(4))));
    }
}
