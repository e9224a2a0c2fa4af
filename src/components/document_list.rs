//! Document List Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::format;
use crate::models::Document;
use crate::store::AppStateStoreFields;

#[component]
pub fn DocumentList(ctx: AppContext) -> impl IntoView {
    let store = ctx.store;
    let docs = Memo::new(move |_| store.documents().read().view());

    view! {
        <div class="docs-list">
            <Show
                when=move || !docs.get().is_empty()
                fallback=|| view! { <p class="no-docs">"No documents uploaded yet"</p> }
            >
                <For
                    each=move || docs.get()
                    key=|doc| (doc.id.clone(), doc.status)
                    children=move |doc| view! { <DocumentRow ctx=ctx doc=doc /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn DocumentRow(ctx: AppContext, doc: Document) -> impl IntoView {
    let id = doc.id.clone();
    let ready = doc.is_ready();
    let on_remove = Callback::new(move |_| {
        let id = id.clone();
        let api = ctx.api();
        spawn_local(async move {
            match commands::delete_document(&api, &id).await {
                Ok(()) => {
                    ctx.store.documents().write().remove(&id);
                }
                Err(e) => log::error!("[DOCIQ] Failed to remove {}: {}", id, e),
            }
        });
    });

    view! {
        <div class=if ready { "doc-item" } else { "doc-item processing" }>
            <div class=format!("doc-icon {}", doc.icon_class())>"📄"</div>
            <div class="doc-info">
                <div class="doc-name" title=doc.name.clone()>{doc.name.clone()}</div>
                <div class="doc-size">{format::file_size(doc.size)}</div>
            </div>
            <span class=if ready { "doc-status ready" } else { "doc-status processing" }>
                {if ready { "✓ Ready" } else { "⏳ Processing" }}
            </span>
            {ready.then(|| view! { <DeleteConfirmButton button_class="doc-remove" what="document" on_confirm=on_remove /> })}
        </div>
    }
}
