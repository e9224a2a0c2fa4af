//! Frontend Models
//!
//! Data structures matching backend entities and REST payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anything mirrored locally by identifier
pub trait Record: Clone {
    fn id(&self) -> &str;
}

// ========================
// Tasks / Notes / Reminders
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Client-side task list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }
}

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, alias = "created_at")]
    pub created: Option<String>,
}

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reminder data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    /// Local `YYYY-MM-DDTHH:MM` as produced by a datetime-local input
    pub datetime: String,
}

impl Record for Reminder {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Aggregate counters behind the sidebar badges
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_notes: u32,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub pending_tasks: u32,
    #[serde(default)]
    pub total_reminders: u32,
}

// ========================
// Documents (DocIQ)
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Processing,
    #[default]
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub chunk_count: u32,
}

impl Document {
    /// Icon modifier class for the document list
    pub fn icon_class(&self) -> &'static str {
        match self.extension.as_str() {
            "pdf" => "pdf",
            "doc" | "docx" => "word",
            _ => "",
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == DocumentStatus::Ready
    }
}

impl Record for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

// ========================
// Datasets (VizIQ)
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
    Pie,
    Radar,
    PolarArea,
    #[serde(other)]
    Unknown,
}

impl ChartKind {
    /// Chart.js `type` string; unknown kinds fall back to bars
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar | ChartKind::Unknown => "bar",
            ChartKind::Line => "line",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
            ChartKind::PolarArea => "polarArea",
        }
    }

    /// Kinds drawn as slices of a whole, without x/y axes
    pub fn is_radial(self) -> bool {
        matches!(self, ChartKind::Doughnut | ChartKind::Pie | ChartKind::PolarArea)
    }
}

/// One labeled numeric series of a multi-series chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
}

/// Semantic chart description produced by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Single-series values
    #[serde(default)]
    pub data: Option<Vec<f64>>,
    /// Multi-series values; wins over `data` when present
    #[serde(default)]
    pub datasets: Option<Vec<Series>>,
    #[serde(default)]
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: Value,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Insight {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Response of a dataset upload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetSummary {
    #[serde(default)]
    pub dashboard_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rows: u64,
    #[serde(default)]
    pub cols: u64,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub charts: Vec<ChartDescriptor>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub preview: Vec<serde_json::Map<String, Value>>,
}

impl DatasetSummary {
    /// Preview table cells, capped at `cap` rows; missing or null cells read `-`
    pub fn preview_rows(&self, cap: usize) -> Vec<Vec<String>> {
        self.preview
            .iter()
            .take(cap)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| match row.get(col) {
                        None | Some(Value::Null) => "-".to_string(),
                        Some(Value::String(s)) => s.clone(),
                        Some(other) => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            priority: Priority::Medium,
            completed,
            created: None,
        }
    }

    #[test]
    fn test_filters_partition_tasks() {
        let tasks: Vec<Task> = (0..7).map(|i| task(&i.to_string(), i % 3 == 0)).collect();

        let completed: Vec<&Task> = tasks.iter().filter(|t| TaskFilter::Completed.matches(t)).collect();
        let pending: Vec<&Task> = tasks.iter().filter(|t| TaskFilter::Pending.matches(t)).collect();

        assert_eq!(completed.len() + pending.len(), tasks.len());
        assert!(completed.iter().all(|c| !pending.iter().any(|p| p.id == c.id)));
        assert!(tasks.iter().all(|t| TaskFilter::All.matches(t)));
    }

    #[test]
    fn test_task_decodes_backend_shape() {
        let t: Task = serde_json::from_value(json!({
            "id": "abc", "title": "Buy milk", "priority": "high", "completed": false,
            "created": "2024-05-01T10:00:00"
        }))
        .unwrap();
        assert_eq!(t.priority, Priority::High);
        assert!(!t.completed);

        let mongo: Task = serde_json::from_value(json!({"_id": "m1", "title": "x"})).unwrap();
        assert_eq!(mongo.id, "m1");
        assert_eq!(mongo.priority, Priority::Medium);
    }

    #[test]
    fn test_chart_kind_fallback() {
        let desc: ChartDescriptor = serde_json::from_value(json!({
            "id": "c", "type": "bubble", "title": "t", "labels": [], "data": []
        }))
        .unwrap();
        assert_eq!(desc.kind, ChartKind::Unknown);
        assert_eq!(desc.kind.as_str(), "bar");

        let polar: ChartKind = serde_json::from_value(json!("polarArea")).unwrap();
        assert!(polar.is_radial());
    }

    #[test]
    fn test_preview_rows_capped_with_placeholders() {
        let preview = (0..80)
            .map(|i| {
                let mut row = serde_json::Map::new();
                row.insert("name".into(), json!(format!("r{}", i)));
                row.insert("score".into(), if i == 0 { Value::Null } else { json!(i) });
                row
            })
            .collect();
        let summary = DatasetSummary {
            dashboard_name: String::new(),
            description: String::new(),
            rows: 80,
            cols: 3,
            columns: vec!["name".into(), "score".into(), "missing".into()],
            kpis: vec![],
            charts: vec![],
            insights: vec![],
            preview,
        };

        let rows = summary.preview_rows(50);
        assert_eq!(rows.len(), 50);
        assert_eq!(rows[0], vec!["r0", "-", "-"]);
        assert_eq!(rows[7], vec!["r7", "7", "-"]);
    }

    #[test]
    fn test_document_icon_class() {
        let mut doc = Document {
            id: "1".into(),
            name: "a.docx".into(),
            extension: "docx".into(),
            size: 10,
            status: DocumentStatus::Ready,
            chunk_count: 2,
        };
        assert_eq!(doc.icon_class(), "word");
        doc.extension = "pdf".into();
        assert_eq!(doc.icon_class(), "pdf");
        doc.extension = "txt".into();
        assert_eq!(doc.icon_class(), "");
    }
}
