//! DocIQ Panel Component
//!
//! Document upload and question answering over the uploaded documents.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::extension_of;
use web_sys::File;

use crate::commands;
use crate::components::{ChatInput, DocumentList, MessageLog, UploadArea};
use crate::context::AppContext;
use crate::conversation::{ConversationLog, Role};
use crate::error::ApiError;
use crate::format;
use crate::models::{Document, DocumentStatus};
use crate::store::AppStateStoreFields;

pub const DOCIQ_WELCOME: &str = "**Welcome to DocIQ!**\n\n\
I'm your intelligent document assistant. Upload PDF, Word, or text files and ask me anything about their content.\n\n\
*Features:*\n\n\
- Extract key information\n\
- Summarize documents\n\
- Answer specific questions\n\
- Compare multiple documents";

const DOCUMENT_TYPES: &[&str] = &["pdf", "doc", "docx", "txt", "md"];

#[component]
pub fn DocIqPanel(ctx: AppContext) -> impl IntoView {
    let store = ctx.store;
    let log = RwSignal::new(ConversationLog::new(Some(DOCIQ_WELCOME)));
    let (pending, set_pending) = signal::<Option<&'static str>>(None);

    let ready_count = Memo::new(move |_| {
        store.documents().read().view().iter().filter(|d| d.is_ready()).count()
    });

    // Initial document listing
    let api = ctx.api();
    spawn_local(async move {
        match commands::list_documents(&api).await {
            Ok(docs) => {
                log::info!("[DOCIQ] Loaded {} documents", docs.len());
                store.documents().write().replace_all(docs);
            }
            Err(e) => log::error!("[DOCIQ] Failed to load documents: {}", e),
        }
    });

    let on_files = Callback::new(move |files: Vec<File>| {
        let api = ctx.api();
        spawn_local(async move {
            // One at a time, in drop order
            for file in files {
                upload_one(store, log, &api, file).await;
            }
        });
    });

    let on_send = Callback::new(move |(message, _): (String, bool)| {
        let documents = ready_count.get_untracked();
        if documents == 0 {
            return;
        }
        log.update(|l| {
            l.push_user(&message);
        });
        set_pending.set(Some("Analyzing documents..."));
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::ask_documents(&api, &message).await;
            if set_pending.try_set(None).is_some() {
                return;
            }
            log.update(|l| match result {
                Ok(response) => {
                    let key = l.push_assistant(&response, None, false, true);
                    l.annotate(key, format!("Based on {} document(s)", documents));
                }
                Err(ApiError::Server(error)) => {
                    l.push_error(&format!("Error: {}", error));
                }
                Err(e) => {
                    log::error!("[DOCIQ] Ask failed: {}", e);
                    l.push_error("Connection error. Please try again.");
                }
            });
        });
    });

    let on_clear = move |_| {
        if !ctx.confirm("Are you sure you want to clear all documents and chat history?") {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match commands::clear_documents(&api).await {
                Ok(()) => {
                    store.documents().write().clear();
                    log.try_update(|l| l.reset(Some(DOCIQ_WELCOME)));
                }
                Err(e) => ctx.alert(format!("Failed to clear documents: {}", e)),
            }
        });
    };

    let placeholder = Signal::derive(move || match ready_count.get() {
        0 => "Ask a question about your documents...".to_string(),
        n => format!("Ask about your {} document(s)...", n),
    });
    let hint = Signal::derive(move || {
        if ready_count.get() == 0 {
            "Upload documents first to enable chat".to_string()
        } else {
            "Press Enter to send your question".to_string()
        }
    });

    view! {
        <div class="panel-header">
            <h2>"DocIQ"</h2>
            <button class="btn-secondary clear-btn" on:click=on_clear>"Clear All"</button>
        </div>
        <div class="dociq-layout">
            <aside class="dociq-sidebar">
                <UploadArea
                    ctx=ctx
                    title="Drop documents here"
                    subtitle="PDF, Word or text files, or click to browse"
                    allowed=DOCUMENT_TYPES
                    multiple=true
                    on_files=on_files
                />
                <DocumentList ctx=ctx />
            </aside>
            <section class="dociq-chat">
                <MessageLog ctx=ctx log=log pending=pending class="dociq-messages" />
                <ChatInput
                    placeholder=placeholder
                    hint=hint
                    disabled=Signal::derive(move || ready_count.get() == 0 || pending.get().is_some())
                    on_send=on_send
                />
            </section>
        </div>
    }
}

async fn upload_one(
    store: crate::store::AppStore,
    log: RwSignal<ConversationLog>,
    api: &commands::ApiClient,
    file: File,
) {
    let name = file.name();
    let temp = Document {
        id: format!("temp-{}", js_sys::Date::now() as u64),
        name: name.clone(),
        extension: extension_of(&name),
        size: file.size() as u64,
        status: DocumentStatus::Processing,
        chunk_count: 0,
    };
    let temp_id = temp.id.clone();
    store.documents().write().push(temp);

    let result = commands::upload_document(api, &file).await;
    store.documents().write().remove(&temp_id);

    let (role, message) = upload_message(&name, &result);
    match result {
        Ok(doc) => {
            log::info!("[DOCIQ] Uploaded {} ({} sections)", doc.name, doc.chunk_count);
            store.documents().write().push(doc);
        }
        Err(e) => log::warn!("[DOCIQ] Upload of {} failed: {}", name, e),
    }
    log.try_update(|l| match role {
        Role::Error => l.push_error(&message),
        _ => l.push_system(&message),
    });
}

/// Status line reported in the document chat after an upload settles
fn upload_message(name: &str, result: &Result<Document, ApiError>) -> (Role, String) {
    match result {
        Ok(doc) => (
            Role::System,
            format!(
                "Document \"{}\" uploaded successfully! ({}, {} sections extracted)",
                doc.name,
                format::file_size(doc.size),
                doc.chunk_count
            ),
        ),
        Err(ApiError::Server(error)) => (Role::Error, format!("Failed to upload \"{}\": {}", name, error)),
        Err(e) => (Role::Error, format!("Error uploading \"{}\": {}", name, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_messages() {
        let doc = Document {
            id: "d1".into(),
            name: "report.pdf".into(),
            extension: "pdf".into(),
            size: 1536,
            status: DocumentStatus::Ready,
            chunk_count: 4,
        };
        assert_eq!(
            upload_message("report.pdf", &Ok(doc)),
            (Role::System, "Document \"report.pdf\" uploaded successfully! (1.5 KB, 4 sections extracted)".to_string())
        );
        assert_eq!(
            upload_message("x.exe", &Err(ApiError::Server("Unsupported file type".into()))).1,
            "Failed to upload \"x.exe\": Unsupported file type"
        );
        assert_eq!(upload_message("x.pdf", &Err(ApiError::Status(500))).0, Role::Error);
    }
}
