//! REST Command Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.

mod chat;
mod clipboard;
mod dociq;
mod notes;
mod reminders;
mod stats;
mod tasks;
mod viziq;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// Re-export all public items
pub use chat::*;
pub use clipboard::*;
pub use dociq::*;
pub use notes::*;
pub use reminders::*;
pub use stats::*;
pub use tasks::*;
pub use viziq::*;

/// HTTP verbs that carry a JSON body
#[derive(Debug, Clone, Copy)]
enum Verb {
    Post,
    Put,
    Delete,
}

/// Backend location; every command goes through one of these
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.url(path)).send().await.map_err(network)?;
        read(resp).await
    }

    async fn send<B, T>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let builder: RequestBuilder = match verb {
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = request.send().await.map_err(network)?;
        read(resp).await
    }

    /// POST without a body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::post(&self.url(path)).send().await.map_err(network)?;
        read(resp).await
    }

    /// DELETE without a body
    async fn delete_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::delete(&self.url(path)).send().await.map_err(network)?;
        read(resp).await
    }

    /// Multipart upload of one file under the form field `file`
    async fn upload<T: DeserializeOwned>(&self, path: &str, file: &web_sys::File) -> Result<T, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        let request = Request::post(&self.url(path))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = request.send().await.map_err(network)?;
        read(resp).await
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    log::warn!("[API] Request failed: {}", err);
    ApiError::from(err)
}

async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await.map_err(network)?;
    decode_body(status, ok, &body)
}

/// `{error}` body the backend attaches to failures
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Plain acknowledgement (`{status}` / `{success}`); may carry an `{error}`
#[derive(Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Ack {
    pub fn into_result(self) -> Result<(), ApiError> {
        match (self.success, self.error) {
            (_, Some(error)) => Err(ApiError::Server(error)),
            (Some(false), None) => Err(ApiError::Server("Request was not successful".to_string())),
            _ => Ok(()),
        }
    }
}

/// Turn a status + body into the expected payload or an `ApiError`
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(match serde_json::from_str::<ErrorBody>(body) {
            Ok(e) => ApiError::Server(e.error),
            Err(_) => ApiError::Status(status),
        });
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_url_joins_base() {
        assert_eq!(ApiClient::new("").url("/api/tasks"), "/api/tasks");
        assert_eq!(ApiClient::new("http://host:5000/").url("/api/tasks"), "http://host:5000/api/tasks");
    }

    #[test]
    fn test_decode_success() {
        let task: Task = decode_body(201, true, r#"{"id":"1","title":"Buy milk","priority":"high","completed":false}"#).unwrap();
        assert_eq!(task.title, "Buy milk");
    }

    #[test]
    fn test_decode_server_error_verbatim() {
        let err = decode_body::<Task>(404, false, r#"{"error": "Task not found"}"#).unwrap_err();
        assert_eq!(err, ApiError::Server("Task not found".into()));
        assert_eq!(err.to_string(), "Task not found");
    }

    #[test]
    fn test_decode_status_without_body() {
        let err = decode_body::<Task>(502, false, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Status(502));
    }

    #[test]
    fn test_decode_mismatch() {
        let err = decode_body::<Task>(200, true, r#"{"nope": 1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        decode_body::<()>(200, true, "").unwrap();
    }

    #[test]
    fn test_ack() {
        let ok: Ack = decode_body(200, true, r#"{"status": "success"}"#).unwrap();
        assert!(ok.into_result().is_ok());
        let failed: Ack = decode_body(200, true, r#"{"success": false, "error": "nope"}"#).unwrap();
        assert_eq!(failed.into_result(), Err(ApiError::Server("nope".into())));
    }
}
