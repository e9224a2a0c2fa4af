//! Chart Renderer
//!
//! Maps backend chart descriptors to Chart.js configurations and tracks the
//! live Chart.js instances so they can be destroyed before their canvases go
//! away (Chart.js keeps canvas bindings alive otherwise).

use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use crate::models::{ChartDescriptor, ChartKind};

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` class from Chart.js
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, js_name = destroy)]
    fn destroy_js(this: &Chart);
}

/// Anything that must be torn down explicitly
pub trait ChartHandle {
    fn destroy(&self);
}

impl ChartHandle for Chart {
    fn destroy(&self) {
        self.destroy_js();
    }
}

/// Live chart instances of one panel
pub struct ChartRegistry<H: ChartHandle> {
    live: Vec<H>,
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn register(&mut self, chart: H) {
        self.live.push(chart);
    }

    /// Destroy every live instance; returns how many were destroyed
    pub fn destroy_all(&mut self) -> usize {
        let count = self.live.len();
        for chart in self.live.drain(..) {
            chart.destroy();
        }
        count
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

/// Build a Chart.js instance on `canvas` from a descriptor
pub fn create_chart(canvas: &web_sys::HtmlCanvasElement, desc: &ChartDescriptor) -> Result<Chart, String> {
    let config = chart_config(desc)
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Failed to serialize chart config: {}", e))?;
    Chart::new(canvas, &config).map_err(|e| format!("Chart.js error: {:?}", e))
}

// ========================
// Descriptor -> Chart.js config
// ========================

pub const PRIMARY: &str = "rgba(102, 126, 234, 0.8)";

pub const PALETTE: [&str; 8] = [
    "rgba(102, 126, 234, 0.8)",
    "rgba(118, 75, 162, 0.8)",
    "rgba(0, 242, 254, 0.8)",
    "rgba(245, 87, 108, 0.8)",
    "rgba(254, 225, 64, 0.8)",
    "rgba(79, 172, 254, 0.8)",
    "rgba(240, 147, 251, 0.8)",
    "rgba(250, 112, 154, 0.8)",
];

const TICK_COLOR: &str = "rgba(255, 255, 255, 0.6)";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";

/// Full Chart.js `{type, data, options}` object for a descriptor
pub fn chart_config(desc: &ChartDescriptor) -> Value {
    json!({
        "type": desc.kind.as_str(),
        "data": chart_data(desc),
        "options": chart_options(desc),
    })
}

fn chart_data(desc: &ChartDescriptor) -> Value {
    let datasets = match &desc.datasets {
        Some(series) => series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let color = PALETTE[i % PALETTE.len()];
                json!({
                    "label": s.label,
                    "data": s.data,
                    "backgroundColor": color,
                    "borderColor": color,
                    "borderWidth": 2,
                })
            })
            .collect(),
        None => vec![single_series(desc)],
    };
    json!({ "labels": desc.labels, "datasets": datasets })
}

fn single_series(desc: &ChartDescriptor) -> Value {
    let data = desc.data.clone().unwrap_or_default();
    let is_line = desc.kind == ChartKind::Line;
    let background = if desc.kind.is_radial() {
        json!(PALETTE.iter().cycle().take(data.len()).collect::<Vec<_>>())
    } else {
        json!(PRIMARY)
    };
    let fill = if is_line {
        json!({ "target": "origin", "above": "rgba(102, 126, 234, 0.1)" })
    } else {
        json!(false)
    };
    let (border_color, border_width) = if is_line { (PRIMARY, 3) } else { ("transparent", 1) };
    json!({
        "data": data,
        "backgroundColor": background,
        "borderColor": border_color,
        "borderWidth": border_width,
        "fill": fill,
        "tension": 0.4,
        "pointBackgroundColor": PRIMARY,
        "pointBorderColor": "#fff",
        "pointHoverRadius": 8,
    })
}

fn chart_options(desc: &ChartDescriptor) -> Value {
    let show_legend = desc.kind.is_radial() || desc.datasets.is_some();
    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "display": show_legend,
                "position": "bottom",
                "labels": { "color": "rgba(255, 255, 255, 0.7)", "padding": 15, "usePointStyle": true },
            },
            "tooltip": {
                "backgroundColor": "rgba(26, 27, 46, 0.95)",
                "titleColor": "#fff",
                "bodyColor": "rgba(255, 255, 255, 0.8)",
                "borderColor": "rgba(102, 126, 234, 0.3)",
                "borderWidth": 1,
                "padding": 12,
                "displayColors": true,
            },
        },
    });
    if !desc.kind.is_radial() {
        options["scales"] = json!({
            "x": { "grid": { "color": GRID_COLOR }, "ticks": { "color": TICK_COLOR, "maxRotation": 45 } },
            "y": { "grid": { "color": GRID_COLOR }, "ticks": { "color": TICK_COLOR } },
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Series;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn descriptor(kind: ChartKind) -> ChartDescriptor {
        ChartDescriptor {
            id: "c".into(),
            kind,
            title: "T".into(),
            labels: vec!["a".into(), "b".into(), "c".into()],
            data: Some(vec![1.0, 2.0, 3.0]),
            datasets: None,
            insight: "i".into(),
        }
    }

    struct FakeChart {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ChartHandle for FakeChart {
        fn destroy(&self) {
            self.log.borrow_mut().push(format!("destroy {}", self.name));
        }
    }

    #[test]
    fn test_bar_config() {
        let cfg = chart_config(&descriptor(ChartKind::Bar));
        assert_eq!(cfg["type"], "bar");
        assert_eq!(cfg["data"]["labels"], json!(["a", "b", "c"]));
        assert_eq!(cfg["data"]["datasets"][0]["data"], json!([1.0, 2.0, 3.0]));
        assert_eq!(cfg["data"]["datasets"][0]["backgroundColor"], PRIMARY);
        assert_eq!(cfg["options"]["plugins"]["legend"]["display"], false);
        assert!(cfg["options"]["scales"].is_object());
    }

    #[test]
    fn test_doughnut_has_slice_palette_and_no_axes() {
        let cfg = chart_config(&descriptor(ChartKind::Doughnut));
        assert_eq!(cfg["type"], "doughnut");
        assert_eq!(cfg["data"]["datasets"][0]["backgroundColor"], json!(&PALETTE[..3]));
        assert_eq!(cfg["options"]["plugins"]["legend"]["display"], true);
        assert!(cfg["options"].get("scales").is_none());
    }

    #[test]
    fn test_line_fill_and_border() {
        let cfg = chart_config(&descriptor(ChartKind::Line));
        let ds = &cfg["data"]["datasets"][0];
        assert_eq!(ds["borderColor"], PRIMARY);
        assert_eq!(ds["borderWidth"], 3);
        assert_eq!(ds["fill"]["target"], "origin");
    }

    #[test]
    fn test_multi_series_colors_cycle() {
        let mut desc = descriptor(ChartKind::Bar);
        desc.datasets = Some(
            (0..9)
                .map(|i| Series { label: format!("s{}", i), data: vec![i as f64] })
                .collect(),
        );
        let cfg = chart_config(&desc);
        let datasets = cfg["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 9);
        assert_eq!(datasets[8]["backgroundColor"], PALETTE[0]);
        assert_eq!(datasets[1]["label"], "s1");
        assert_eq!(cfg["options"]["plugins"]["legend"]["display"], true);
    }

    #[test]
    fn test_registry_destroys_all_instances() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ChartRegistry::default();
        registry.register(FakeChart { name: "a", log: log.clone() });
        registry.register(FakeChart { name: "b", log: log.clone() });

        assert_eq!(registry.destroy_all(), 2);
        assert!(registry.is_empty());
        assert_eq!(*log.borrow(), vec!["destroy a", "destroy b"]);
        assert_eq!(registry.destroy_all(), 0);
    }
}
