//! Document Commands
//!
//! Upload, list and remove documents, and ask questions about them.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::{Ack, ApiClient, Verb};
use crate::error::ApiError;
use crate::models::Document;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AskArgs<'a> {
    message: &'a str,
}

// ========================
// Replies
// ========================

#[derive(Debug, Default, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub document: Option<Document>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadReply {
    pub fn into_result(self) -> Result<Document, ApiError> {
        match (self.success, self.document, self.error) {
            (true, Some(doc), _) => Ok(doc),
            (_, _, Some(error)) => Err(ApiError::Server(error)),
            _ => Err(ApiError::Server("Upload failed".to_string())),
        }
    }
}

#[derive(Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Deserialize)]
struct AskReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ========================
// Commands
// ========================

pub async fn upload_document(api: &ApiClient, file: &web_sys::File) -> Result<Document, ApiError> {
    // Failed extractions come back as 4xx/5xx with {success: false, error}
    api.upload::<UploadReply>("/api/dociq/upload", file).await?.into_result()
}

pub async fn list_documents(api: &ApiClient) -> Result<Vec<Document>, ApiError> {
    let list: DocumentList = api.get("/api/dociq/documents").await?;
    Ok(list.documents)
}

pub async fn delete_document(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete_empty::<Ack>(&document_path(id)).await?.into_result()
}

/// Remove every document and the document chat history
pub async fn clear_documents(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty::<Ack>("/api/dociq/clear").await?.into_result()
}

/// Ask a question about the uploaded documents
pub async fn ask_documents(api: &ApiClient, message: &str) -> Result<String, ApiError> {
    let reply: AskReply = api.send(Verb::Post, "/api/dociq/chat", &AskArgs { message }).await?;
    match (reply.response, reply.error) {
        (_, Some(error)) => Err(ApiError::Server(error)),
        (Some(response), None) => Ok(response),
        (None, None) => Err(ApiError::Decode("document chat reply without response".to_string())),
    }
}

fn document_path(id: &str) -> String {
    format!("/api/dociq/documents/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_body;
    use crate::models::DocumentStatus;

    #[test]
    fn test_document_path_is_encoded() {
        assert_eq!(document_path("abc123"), "/api/dociq/documents/abc123");
        assert_eq!(document_path("a/b c"), "/api/dociq/documents/a%2Fb%20c");
    }

    #[test]
    fn test_upload_reply_success() {
        let reply: UploadReply = decode_body(
            200,
            true,
            r#"{"success": true, "document": {"id": "d1", "name": "report.pdf", "extension": "pdf",
                "size": 2048, "status": "ready", "chunk_count": 12}}"#,
        )
        .unwrap();
        let doc = reply.into_result().unwrap();
        assert_eq!(doc.chunk_count, 12);
        assert_eq!(doc.status, DocumentStatus::Ready);
    }

    #[test]
    fn test_upload_reply_failure() {
        let reply: UploadReply = decode_body(200, true, r#"{"success": false, "error": "Unsupported file type"}"#).unwrap();
        assert_eq!(reply.into_result(), Err(ApiError::Server("Unsupported file type".into())));

        let err = decode_body::<UploadReply>(400, false, r#"{"success": false, "error": "No file"}"#).unwrap_err();
        assert_eq!(err.to_string(), "No file");
    }
}
