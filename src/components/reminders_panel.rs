//! Reminders Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, ModalKind};
use crate::format;
use crate::models::Reminder;
use crate::store::AppStateStoreFields;

#[component]
pub fn RemindersPanel(ctx: AppContext) -> impl IntoView {
    let store = ctx.store;
    let reminders = Memo::new(move |_| store.reminders().read().view());

    view! {
        <div class="panel-header">
            <h2>"Reminders"</h2>
            <button class="btn-primary add-btn" on:click=move |_| ctx.open_modal(ModalKind::Reminder)>
                "+ Add Reminder"
            </button>
        </div>
        <div class="reminders-list">
            <Show
                when=move || !reminders.get().is_empty()
                fallback=|| view! {
                    <p class="empty-state">"No reminders set. Add one to stay organized!"</p>
                }
            >
                <For
                    each=move || reminders.get()
                    key=|reminder| reminder.id.clone()
                    children=move |reminder| view! { <ReminderRow ctx=ctx reminder=reminder /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn ReminderRow(ctx: AppContext, reminder: Reminder) -> impl IntoView {
    let id = reminder.id.clone();
    let on_delete = Callback::new(move |_| {
        let id = id.clone();
        let api = ctx.api();
        spawn_local(async move {
            match commands::delete_reminder(&api, &id).await {
                Ok(()) => {
                    ctx.store.reminders().write().remove(&id);
                    ctx.refresh_stats();
                }
                Err(e) => ctx.alert(format!("Failed to delete reminder: {}", e)),
            }
        });
    });

    view! {
        <div class="reminder-item">
            <span class="reminder-icon">"⏰"</span>
            <div class="reminder-info">
                <span class="reminder-title">{reminder.title.clone()}</span>
                <span class="reminder-time">{format::reminder_time(&reminder.datetime)}</span>
            </div>
            <DeleteConfirmButton button_class="delete-btn" what="reminder" on_confirm=on_delete />
        </div>
    }
}
