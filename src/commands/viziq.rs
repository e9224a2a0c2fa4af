//! Dataset Commands

use serde::Deserialize;

use super::{Ack, ApiClient};
use crate::error::ApiError;
use crate::models::DatasetSummary;

/// Upload reply: a summary flattened next to `success`/`error`
#[derive(Debug, Deserialize)]
struct UploadReply {
    #[serde(default = "default_true")]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    summary: DatasetSummary,
}

fn default_true() -> bool {
    true
}

impl UploadReply {
    fn into_result(self) -> Result<DatasetSummary, ApiError> {
        match (self.success, self.error) {
            (_, Some(error)) => Err(ApiError::Server(error)),
            (false, None) => Err(ApiError::Server("Upload failed".to_string())),
            (true, None) => Ok(self.summary),
        }
    }
}

/// Upload a CSV/Excel file and receive its analysed summary
pub async fn upload_dataset(api: &ApiClient, file: &web_sys::File) -> Result<DatasetSummary, ApiError> {
    api.upload::<UploadReply>("/api/viziq/upload", file).await?.into_result()
}

pub async fn clear_dataset(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty::<Ack>("/api/viziq/clear").await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_body;

    #[test]
    fn test_summary_decodes() {
        let reply: UploadReply = decode_body(
            200,
            true,
            r#"{"success": true, "dashboard_name": "Sales", "rows": 1200, "cols": 2,
                "columns": ["region", "revenue"],
                "kpis": [{"label": "Revenue", "value": 1234567, "icon": "💰"}],
                "charts": [{"id": "c1", "type": "line", "title": "Trend", "labels": ["a"], "data": [1.0]}],
                "insights": [{"type": "trend", "icon": "📈", "title": "Up", "description": "Growing"}],
                "preview": [{"region": "EU", "revenue": null}]}"#,
        )
        .unwrap();
        let summary = reply.into_result().unwrap();
        assert_eq!(summary.dashboard_name, "Sales");
        assert_eq!(summary.rows, 1200);
        assert_eq!(summary.charts.len(), 1);
        assert_eq!(summary.preview_rows(50), vec![vec!["EU".to_string(), "-".to_string()]]);
    }

    #[test]
    fn test_error_reply() {
        let reply: UploadReply = decode_body(200, true, r#"{"success": false, "error": "Empty file"}"#).unwrap();
        assert_eq!(reply.into_result(), Err(ApiError::Server("Empty file".into())));
    }
}
