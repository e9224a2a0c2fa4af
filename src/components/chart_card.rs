//! Chart Card Component

use leptos::html;
use leptos::prelude::*;

use crate::charts::{create_chart, Chart, ChartRegistry};
use crate::models::{ChartDescriptor, ChartKind};

pub type PanelCharts = StoredValue<ChartRegistry<Chart>, LocalStorage>;

/// One chart with its title, kind badge and insight. The Chart.js instance
/// is created once the canvas is mounted and handed to the panel registry.
#[component]
pub fn ChartCard(desc: ChartDescriptor, registry: PanelCharts) -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();
    let class = if desc.kind == ChartKind::Line { "chart-card full-width" } else { "chart-card" };
    let title = desc.title.clone();
    let badge = desc.kind.as_str();
    let insight = desc.insight.clone();

    Effect::new(move |created: Option<bool>| {
        if created == Some(true) {
            return true;
        }
        let Some(el) = canvas.get() else {
            return false;
        };
        match create_chart(&el, &desc) {
            Ok(chart) => registry.update_value(|r| r.register(chart)),
            Err(e) => log::error!("[VIZIQ] Chart {} failed: {}", desc.id, e),
        }
        true
    });

    view! {
        <div class=class>
            <div class="chart-header">
                <span class="chart-title">{title}</span>
                <span class="chart-type-badge">{badge}</span>
            </div>
            <div class="chart-container">
                <canvas node_ref=canvas></canvas>
            </div>
            <div class="chart-insight">
                <p><strong>"Insight: "</strong>{insight}</p>
            </div>
        </div>
    }
}
