//! Notes Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, ModalKind};
use crate::format;
use crate::models::Note;
use crate::store::AppStateStoreFields;

#[component]
pub fn NotesPanel(ctx: AppContext) -> impl IntoView {
    let store = ctx.store;
    let notes = Memo::new(move |_| store.notes().read().view());

    view! {
        <div class="panel-header">
            <h2>"Notes"</h2>
            <button class="btn-primary add-btn" on:click=move |_| ctx.open_modal(ModalKind::Note)>
                "+ New Note"
            </button>
        </div>
        <div class="notes-grid">
            <Show
                when=move || !notes.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No notes yet. Start writing!"</p> }
            >
                <For
                    each=move || notes.get()
                    key=|note| note.id.clone()
                    children=move |note| view! { <NoteCard ctx=ctx note=note /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn NoteCard(ctx: AppContext, note: Note) -> impl IntoView {
    let id = note.id.clone();
    let on_delete = Callback::new(move |_| {
        let id = id.clone();
        let api = ctx.api();
        spawn_local(async move {
            match commands::delete_note(&api, &id).await {
                Ok(()) => {
                    ctx.store.notes().write().remove(&id);
                    ctx.refresh_stats();
                }
                Err(e) => ctx.alert(format!("Failed to delete note: {}", e)),
            }
        });
    });

    view! {
        <div class="note-card">
            <div class="note-header">
                <h4 class="note-title">{note.title.clone()}</h4>
                <DeleteConfirmButton button_class="delete-btn" what="note" on_confirm=on_delete />
            </div>
            <p class="note-content">{note.content.clone()}</p>
            <span class="note-time">{format::note_time(note.created.as_deref())}</span>
        </div>
    }
}
