//! Navigation Sidebar Component
//!
//! Switches the active panel and shows the per-panel count badges.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::panel::Panel;
use crate::store::AppStateStoreFields;

/// Sidebar with one entry per panel
#[component]
pub fn NavSidebar(ctx: AppContext, active: RwSignal<Panel>) -> impl IntoView {
    let store = ctx.store;

    // Badge text per panel; None = no badge
    let badge = move |panel: Panel| -> Option<String> {
        match panel {
            Panel::Chat => None,
            Panel::Tasks => Some(store.stats().read().pending_tasks.to_string()),
            Panel::Notes => Some(store.stats().read().total_notes.to_string()),
            Panel::Reminders => Some(store.stats().read().total_reminders.to_string()),
            Panel::DocIq => {
                let ready = store.documents().read().view().iter().filter(|d| d.is_ready()).count();
                Some(if ready == 0 { "AI".to_string() } else { ready.to_string() })
            }
            Panel::VizIq => Some(match *store.dataset_rows().read() {
                Some(rows) => rows.to_string(),
                None => "AI".to_string(),
            }),
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-logo">
                <span class="logo-mark">"A"</span>
                <span class="logo-text">"Axio"</span>
            </div>
            <ul class="nav-menu">
                {Panel::ALL.into_iter().map(|panel| {
                    let item_class = move || {
                        if active.get() == panel { "nav-item active" } else { "nav-item" }
                    };
                    view! {
                        <li
                            class=item_class
                            data-view=panel.id()
                            on:click=move |_| {
                                log::debug!("[NAV] Switching to {}", panel.id());
                                active.set(panel);
                            }
                        >
                            <span class="nav-icon">{panel.icon()}</span>
                            <span class="nav-label">{panel.title()}</span>
                            {move || badge(panel).map(|text| view! {
                                <span class="nav-badge" id=format!("{}-badge", panel.id())>{text}</span>
                            })}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
