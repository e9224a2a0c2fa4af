//! Message Bubble Component
//!
//! One conversation entry. Indexed user messages can be edited in place.

use leptos::html;
use leptos::prelude::*;

use crate::components::{AiIcon, RevealedMarkdown};
use crate::context::AppContext;
use crate::conversation::{ChatEntry, ConversationLog, Role};

#[component]
pub fn MessageBubble(
    ctx: AppContext,
    entry: ChatEntry,
    log: RwSignal<ConversationLog>,
    scroll: NodeRef<html::Div>,
    on_edit: Option<Callback<(usize, String)>>,
) -> impl IntoView {
    match entry.role {
        Role::User => view! { <UserBubble entry=entry on_edit=on_edit /> }.into_any(),
        Role::Assistant => {
            let key = entry.key;
            let on_done = Callback::new(move |_| {
                log.try_update(|l| l.mark_revealed(key));
            });
            view! {
                <div class=format!("message {}", Role::Assistant.class())>
                    <div class="message-avatar ai-avatar"><AiIcon /></div>
                    <div class="message-content">
                        {entry.context.clone().map(|c| view! { <div class="dociq-context">"📄 " {c}</div> })}
                        {entry.searched.then(|| view! { <div class="search-badge">"🔍 Web search"</div> })}
                        <RevealedMarkdown
                            ctx=ctx
                            text=entry.text.clone()
                            animate=entry.reveal
                            scroll=scroll
                            on_done=on_done
                        />
                        <span class="message-time">{entry.time.clone()}</span>
                    </div>
                </div>
            }
            .into_any()
        }
        Role::System | Role::Error => {
            let prefix = if entry.role == Role::Error { "⚠️ " } else { "ℹ️ " };
            view! {
                <div class=format!("message {}-message", entry.role.class())>
                    <div class="message-content">
                        <div class="message-text">{prefix}{entry.text.clone()}</div>
                        <span class="message-time">{entry.time.clone()}</span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn UserBubble(entry: ChatEntry, on_edit: Option<Callback<(usize, String)>>) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(entry.text.clone());
    let original = StoredValue::new(entry.text.clone());
    let index = entry.index;
    let can_edit = entry.is_editable() && on_edit.is_some();
    let time = entry.time;

    let cancel = move || {
        set_draft.set(original.get_value());
        set_editing.set(false);
    };
    let submit = move || {
        let content = draft.get_untracked();
        if let (Some(index), Some(on_edit)) = (index, on_edit) {
            set_editing.set(false);
            on_edit.run((index, content));
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" if !ev.shift_key() => {
            ev.prevent_default();
            submit();
        }
        "Escape" => {
            ev.prevent_default();
            cancel();
        }
        _ => {}
    };

    view! {
        <div class=format!("message {}", Role::User.class())>
            <div class="message-avatar">"👤"</div>
            <div class="message-content">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div class="message-text">{original.get_value()}</div>
                    }
                >
                    <div class="edit-container">
                        <textarea
                            class="edit-textarea"
                            rows="3"
                            autofocus
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        ></textarea>
                        <div class="edit-actions">
                            <button class="edit-save-btn" on:click=move |_| submit()>"Save & Submit"</button>
                            <button class="edit-cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                        </div>
                    </div>
                </Show>
                <div class="message-footer">
                    <span class="message-time">{time}</span>
                    {can_edit.then(|| view! {
                        <button
                            class="edit-btn"
                            title="Edit message"
                            on:click=move |_| set_editing.set(true)
                        >
                            "✏️"
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}
