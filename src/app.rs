//! Axio Dashboard App
//!
//! Sidebar navigation, header and the six panels. Every panel stays mounted;
//! switching only toggles which one is visible, so replies are revealed once.

use leptos::prelude::*;

use crate::components::{
    AlertBanner, ChatPanel, DocIqPanel, HeaderClock, ModalHost, NavSidebar, NotesPanel,
    RemindersPanel, TasksPanel, VizIqPanel,
};
use crate::config::Config;
use crate::context::AppContext;
use crate::panel::Panel;
use crate::store::AppStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Config::load());
    let active = RwSignal::new(Panel::default());
    let store = ctx.store;

    ctx.load_all();

    let view_class = move |panel: Panel| {
        move || if active.get() == panel { "view active" } else { "view" }
    };

    view! {
        <div class="app-layout">
            <NavSidebar ctx=ctx active=active />
            <main class="main-content">
                <header class="top-header">
                    <h1 class="view-title">{move || active.get().title()}</h1>
                    <div class="header-stats">
                        <span class="header-stat">
                            "✅ " <strong>{move || store.stats().read().completed_tasks}</strong> " done"
                        </span>
                        <span class="header-stat">
                            "📝 " <strong>{move || store.stats().read().total_notes}</strong> " notes"
                        </span>
                        <HeaderClock ctx=ctx />
                    </div>
                </header>
                <AlertBanner ctx=ctx />
                <section class=view_class(Panel::Chat) id="chat-view"><ChatPanel ctx=ctx /></section>
                <section class=view_class(Panel::Tasks) id="tasks-view"><TasksPanel ctx=ctx /></section>
                <section class=view_class(Panel::Notes) id="notes-view"><NotesPanel ctx=ctx /></section>
                <section class=view_class(Panel::Reminders) id="reminders-view"><RemindersPanel ctx=ctx /></section>
                <section class=view_class(Panel::DocIq) id="dociq-view"><DocIqPanel ctx=ctx /></section>
                <section class=view_class(Panel::VizIq) id="viziq-view"><VizIqPanel ctx=ctx /></section>
            </main>
            <ModalHost ctx=ctx />
        </div>
    }
}
