//! Tasks Panel Component
//!
//! Filterable task list. Toggling completion is two-phase: the flipped task
//! is staged in the mirror, and the server's echo commits it (or the stage
//! is rolled back and the user alerted).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, ModalKind};
use crate::models::{Task, TaskFilter};
use crate::store::AppStateStoreFields;

#[component]
pub fn TasksPanel(ctx: AppContext) -> impl IntoView {
    let store = ctx.store;
    let (filter, set_filter) = signal(TaskFilter::All);

    let visible = Memo::new(move |_| {
        let filter = filter.get();
        store
            .tasks()
            .read()
            .view()
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="panel-header">
            <h2>"Tasks"</h2>
            <button class="btn-primary add-btn" on:click=move |_| ctx.open_modal(ModalKind::Task)>
                "+ Add Task"
            </button>
        </div>
        <div class="task-filters">
            {TaskFilter::ALL.into_iter().map(|f| view! {
                <button
                    class=move || if filter.get() == f { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| set_filter.set(f)
                >
                    {f.label()}
                </button>
            }).collect_view()}
        </div>
        <div class="tasks-list">
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No tasks found."</p> }
            >
                <For
                    each=move || visible.get()
                    key=|task| (task.id.clone(), task.completed, task.priority)
                    children=move |task| view! { <TaskRow ctx=ctx task=task /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn TaskRow(ctx: AppContext, task: Task) -> impl IntoView {
    let id = task.id.clone();
    let completed = task.completed;

    let on_toggle = {
        let id = id.clone();
        move |_| toggle_task(ctx, &id)
    };
    let on_delete = Callback::new(move |_| delete_task(ctx, id.clone()));

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" }>
            <input type="checkbox" class="task-checkbox" prop:checked=completed on:change=on_toggle />
            <span class="task-title">{task.title.clone()}</span>
            <span class=format!("priority-badge {}", task.priority.as_str())>{task.priority.label()}</span>
            <DeleteConfirmButton button_class="delete-btn" what="task" on_confirm=on_delete />
        </div>
    }
}

/// Flip completion of the task as displayed; ignored while a flip is in flight
fn toggle_task(ctx: AppContext, id: &str) {
    let store = ctx.store;
    let current = {
        let tasks = store.tasks().read_untracked();
        if tasks.is_staged(id) {
            return;
        }
        tasks.get(id)
    };
    let Some(current) = current else {
        return;
    };
    let flipped = Task { completed: !current.completed, ..current };
    if !store.tasks().write().stage(flipped.clone()) {
        return;
    }
    let api = ctx.api();
    spawn_local(async move {
        match commands::update_task(&api, &flipped).await {
            Ok(confirmed) => {
                store.tasks().write().commit(confirmed);
                ctx.refresh_stats();
            }
            Err(e) => {
                log::warn!("[TASKS] Toggle of {} rolled back: {}", flipped.id, e);
                store.tasks().write().rollback(&flipped.id);
                ctx.alert(format!("Failed to update task: {}", e));
            }
        }
    });
}

fn delete_task(ctx: AppContext, id: String) {
    let api = ctx.api();
    spawn_local(async move {
        match commands::delete_task(&api, &id).await {
            Ok(()) => {
                ctx.store.tasks().write().remove(&id);
                ctx.refresh_stats();
            }
            Err(e) => ctx.alert(format!("Failed to delete task: {}", e)),
        }
    });
}
