//! VizIQ Panel Component
//!
//! Dataset upload, processing animation and the generated dashboard.
//! Live Chart.js instances are destroyed before the dashboard re-renders or
//! the panel is cleared.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::charts::ChartRegistry;
use crate::commands;
use crate::components::chart_card::PanelCharts;
use crate::components::{ChartCard, UploadArea};
use crate::context::AppContext;
use crate::dataset::{kpi_icon, Phase, Progress, PROGRESS_STEPS};
use crate::format;
use crate::models::DatasetSummary;
use crate::store::AppStateStoreFields;
use crate::ticker::{TaskHandle, Tick, Ticker};

const DATASET_TYPES: &[&str] = &["csv", "xlsx", "xls", "json"];

#[component]
pub fn VizIqPanel(ctx: AppContext) -> impl IntoView {
    let store = ctx.store;
    let phase = RwSignal::new(Phase::Idle);
    let progress = RwSignal::new(Progress::default());
    let summary = RwSignal::new(None::<DatasetSummary>);
    let updated = RwSignal::new(String::new());
    // Bumped to rebuild the chart grid from the current summary
    let chart_version = RwSignal::new(0u32);

    let charts: PanelCharts = StoredValue::new_local(ChartRegistry::default());
    let animation = StoredValue::new_local(None::<TaskHandle>);

    let stop_animation = move || {
        animation.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.cancel();
            }
        });
    };
    let destroy_charts = move || {
        if let Some(n) = charts.try_update_value(|r| r.destroy_all()) {
            log::debug!("[VIZIQ] Destroyed {} charts", n);
        }
    };

    on_cleanup(move || {
        stop_animation();
        destroy_charts();
    });

    let on_files = Callback::new(move |files: Vec<File>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        phase.set(Phase::Processing);
        progress.update(|p| p.reset());
        let handle = Ticker::start(ctx.config().progress_step_ms, move || {
            match progress.try_update(|p| p.advance() && !p.is_complete()) {
                Some(true) => Tick::Continue,
                _ => Tick::Stop,
            }
        });
        animation.set_value(Some(handle));

        let api = ctx.api();
        spawn_local(async move {
            let result = commands::upload_dataset(&api, &file).await;
            stop_animation();
            match result {
                Ok(data) => {
                    log::info!("[VIZIQ] {} rows x {} cols, {} charts", data.rows, data.cols, data.charts.len());
                    destroy_charts();
                    *store.dataset_rows().write() = Some(data.rows);
                    updated.set(format::now_short_time());
                    summary.set(Some(data));
                    phase.set(Phase::Dashboard);
                }
                Err(e) => {
                    log::error!("[VIZIQ] Upload failed: {}", e);
                    phase.set(Phase::Idle);
                    progress.update(|p| p.reset());
                    ctx.alert(match e {
                        crate::error::ApiError::Server(error) => format!("Error: {}", error),
                        _ => "Failed to upload file. Please try again.".to_string(),
                    });
                }
            }
        });
    });

    let on_refresh = move |_| {
        destroy_charts();
        chart_version.update(|v| *v += 1);
    };

    let on_clear = move |_| {
        if !ctx.confirm("Are you sure you want to clear all data?") {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = commands::clear_dataset(&api).await {
                ctx.alert(format!("Failed to clear data: {}", e));
                return;
            }
            destroy_charts();
            summary.set(None);
            phase.set(Phase::Idle);
            progress.update(|p| p.reset());
            *store.dataset_rows().write() = None;
        });
    };

    view! {
        <div class="panel-header">
            <h2>"VizIQ"</h2>
            <Show when=move || phase.get() == Phase::Dashboard>
                <div class="viziq-actions">
                    <button class="btn-secondary" on:click=on_refresh>"↻ Refresh"</button>
                    <button class="btn-secondary clear-btn" on:click=on_clear>"Clear"</button>
                </div>
            </Show>
        </div>
        <Show when=move || phase.get() != Phase::Dashboard>
            <div class="viziq-upload-section">
                <Show
                    when=move || phase.get() == Phase::Processing
                    fallback=move || view! {
                        <UploadArea
                            ctx=ctx
                            title="Drop your dataset here"
                            subtitle="CSV, Excel or JSON, or click to browse"
                            allowed=DATASET_TYPES
                            on_files=on_files
                        />
                    }
                >
                    <ProcessingSteps progress=progress />
                </Show>
            </div>
        </Show>
        {move || summary.get().map(|data| view! {
            <Dashboard data=data updated=updated chart_version=chart_version charts=charts preview_cap=ctx.config().preview_row_cap />
        })}
    }
}

#[component]
fn ProcessingSteps(progress: RwSignal<Progress>) -> impl IntoView {
    view! {
        <div class="viziq-processing">
            <div class="processing-spinner"></div>
            <p class="processing-status">{move || progress.get().status()}</p>
            <div class="processing-steps">
                {PROGRESS_STEPS.iter().enumerate().map(|(i, step)| view! {
                    <div class=move || progress.get().state(i).class() id=step.id>
                        <span class="step-dot"></span>
                        <span class="step-label">{step.label}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Dashboard(
    data: DatasetSummary,
    updated: RwSignal<String>,
    chart_version: RwSignal<u32>,
    charts: PanelCharts,
    preview_cap: usize,
) -> impl IntoView {
    let descriptors = data.charts.clone();
    let rows = data.preview_rows(preview_cap);

    view! {
        <div class="viziq-dashboard">
            <div class="dashboard-header">
                <div>
                    <h3 class="dashboard-name">{data.dashboard_name.clone()}</h3>
                    <p class="dashboard-description">{data.description.clone()}</p>
                </div>
                <div class="dashboard-meta">
                    <span><strong>{format::grouped(data.rows)}</strong>" Rows"</span>
                    <span><strong>{data.cols}</strong>" Columns"</span>
                    <span>"Updated: " {move || updated.get()}</span>
                </div>
            </div>

            <div class="kpi-grid">
                {data.kpis.iter().map(|kpi| view! {
                    <div class="kpi-card">
                        <div class="kpi-header">
                            <span class="kpi-label">{kpi.label.clone()}</span>
                            <div class="kpi-icon">{kpi_icon(&kpi.icon)}</div>
                        </div>
                        <div class="kpi-value">{format::kpi_value(&kpi.value)}</div>
                        <div class="kpi-description">{kpi.description.clone()}</div>
                    </div>
                }).collect_view()}
            </div>

            <div class="charts-grid">
                {move || {
                    chart_version.track();
                    descriptors
                        .iter()
                        .cloned()
                        .map(|desc| view! { <ChartCard desc=desc registry=charts /> })
                        .collect_view()
                }}
            </div>

            <div class="insights-grid">
                {data.insights.iter().map(|insight| view! {
                    <div class=format!("insight-card {}", insight.kind)>
                        <span class="insight-icon">{insight.icon.clone()}</span>
                        <div class="insight-body">
                            <h4>{insight.title.clone()}</h4>
                            <p>{insight.description.clone()}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="data-preview">
                <h4>"Data Preview"</h4>
                <div class="table-wrapper">
                    <table>
                        <thead>
                            <tr>{data.columns.iter().map(|c| view! { <th>{c.clone()}</th> }).collect_view()}</tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|row| view! {
                                <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
