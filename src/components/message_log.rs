//! Message Log Component
//!
//! Scrolling list of conversation entries shared by the chat and document
//! chat panels. Code-block copy buttons inside rendered replies are handled
//! here by delegation, since their markup comes from `inner_html`.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::revealed_markdown::scroll_to_bottom;
use crate::components::{MessageBubble, TypingIndicator};
use crate::context::AppContext;
use crate::conversation::ConversationLog;

const COPY_LABEL: &str = "📋 Copy";
const COPIED_LABEL: &str = "✓ Copied!";

#[component]
pub fn MessageLog(
    ctx: AppContext,
    log: RwSignal<ConversationLog>,
    /// Typing indicator status; None hides the indicator
    pending: ReadSignal<Option<&'static str>>,
    #[prop(optional)] on_edit: Option<Callback<(usize, String)>>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let scroll = NodeRef::<html::Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        log.track();
        pending.track();
        Timeout::new(0, move || scroll_to_bottom(scroll)).forget();
    });

    let copy_feedback_ms = ctx.config().copy_feedback_ms;
    let on_click = move |ev: web_sys::MouseEvent| copy_code_block(&ev, copy_feedback_ms);

    view! {
        <div class=format!("chat-messages {}", class) node_ref=scroll on:click=on_click>
            <For
                each=move || log.with(|l| l.entries().to_vec())
                key=|entry| (entry.key, entry.text.clone(), entry.index)
                children=move |entry| view! {
                    <MessageBubble ctx=ctx entry=entry log=log scroll=scroll on_edit=on_edit />
                }
            />
            {move || pending.get().map(|status| view! { <TypingIndicator status=status /> })}
        </div>
    }
}

/// Copy the code of the block whose copy button was clicked
fn copy_code_block(ev: &web_sys::MouseEvent, feedback_ms: u32) {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    let Ok(Some(button)) = target.closest(".code-copy-btn") else {
        return;
    };
    let code = button
        .closest(".code-block-wrapper")
        .ok()
        .flatten()
        .and_then(|wrapper| wrapper.query_selector("pre").ok().flatten())
        .and_then(|pre| pre.text_content())
        .unwrap_or_default();

    spawn_local(async move {
        match commands::write_text(&code).await {
            Ok(()) => {
                button.set_text_content(Some(COPIED_LABEL));
                Timeout::new(feedback_ms, move || button.set_text_content(Some(COPY_LABEL))).forget();
            }
            Err(e) => log::warn!("[COPY] {}", e),
        }
    });
}
