//! Modal Dialog Component
//!
//! One dialog hosts the task, note and reminder creation forms. Each form is
//! rebuilt whenever the dialog opens, so closing it discards any input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::PrioritySelector;
use crate::context::{AppContext, ModalKind};
use crate::format;
use crate::models::Priority;
use crate::store::AppStateStoreFields;

#[component]
pub fn ModalHost(ctx: AppContext) -> impl IntoView {
    view! {
        {move || ctx.modal.get().map(|kind| view! {
            <div class="modal-overlay active" on:click=move |_| ctx.close_modal()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{kind.title()}</h3>
                        <button class="modal-close" on:click=move |_| ctx.close_modal()>"×"</button>
                    </div>
                    <div class="modal-body">
                        {match kind {
                            ModalKind::Task => view! { <TaskForm ctx=ctx /> }.into_any(),
                            ModalKind::Note => view! { <NoteForm ctx=ctx /> }.into_any(),
                            ModalKind::Reminder => view! { <ReminderForm ctx=ctx /> }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        })}
    }
}

#[component]
fn TaskForm(ctx: AppContext) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked().trim().to_string();
        if text.is_empty() || saving.get_untracked() {
            return;
        }
        let selected = priority.get_untracked();
        let api = ctx.api();
        set_saving.set(true);
        spawn_local(async move {
            match commands::create_task(&api, &text, selected).await {
                Ok(task) => {
                    log::info!("[TASKS] Created {} ({})", task.id, task.priority.as_str());
                    ctx.store.tasks().write().push(task);
                    ctx.refresh_stats();
                    ctx.close_modal();
                }
                Err(e) => {
                    let _ = set_saving.try_set(false);
                    ctx.alert(format!("Failed to add task: {}", e));
                }
            }
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="What needs to be done?"
                required
                autofocus
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <label class="form-label">"Priority"</label>
            <PrioritySelector current=priority on_change=move |p| set_priority.set(p) />
            <FormActions ctx=ctx saving=saving submit_label="Add Task" />
        </form>
    }
}

#[component]
fn NoteForm(ctx: AppContext) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked().trim().to_string();
        let content = content.get_untracked().trim().to_string();
        if title.is_empty() || content.is_empty() || saving.get_untracked() {
            return;
        }
        let api = ctx.api();
        set_saving.set(true);
        spawn_local(async move {
            match commands::create_note(&api, &title, &content).await {
                Ok(note) => {
                    ctx.store.notes().write().push(note);
                    ctx.refresh_stats();
                    ctx.close_modal();
                }
                Err(e) => {
                    let _ = set_saving.try_set(false);
                    ctx.alert(format!("Failed to save note: {}", e));
                }
            }
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Note title"
                required
                autofocus
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Write your note..."
                rows="6"
                required
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <FormActions ctx=ctx saving=saving submit_label="Save Note" />
        </form>
    }
}

#[component]
fn ReminderForm(ctx: AppContext) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (datetime, set_datetime) = signal(format::datetime_local_now());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked().trim().to_string();
        let datetime = datetime.get_untracked();
        if title.is_empty() || datetime.is_empty() || saving.get_untracked() {
            return;
        }
        let api = ctx.api();
        set_saving.set(true);
        spawn_local(async move {
            match commands::create_reminder(&api, &title, &datetime).await {
                Ok(reminder) => {
                    ctx.store.reminders().write().push(reminder);
                    ctx.refresh_stats();
                    ctx.close_modal();
                }
                Err(e) => {
                    let _ = set_saving.try_set(false);
                    ctx.alert(format!("Failed to set reminder: {}", e));
                }
            }
        });
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Remind me to..."
                required
                autofocus
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="datetime-local"
                required
                prop:value=move || datetime.get()
                on:input=move |ev| set_datetime.set(event_target_value(&ev))
            />
            <FormActions ctx=ctx saving=saving submit_label="Set Reminder" />
        </form>
    }
}

#[component]
fn FormActions(ctx: AppContext, saving: ReadSignal<bool>, submit_label: &'static str) -> impl IntoView {
    view! {
        <div class="modal-actions">
            <button type="button" class="btn-secondary" on:click=move |_| ctx.close_modal()>"Cancel"</button>
            <button type="submit" class="btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { submit_label }}
            </button>
        </div>
    }
}
