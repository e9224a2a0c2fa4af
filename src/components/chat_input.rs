//! Chat Input Component
//!
//! Enter sends, Shift+Enter inserts a newline, Ctrl+Enter sends with a
//! forced web search (when enabled).

use leptos::prelude::*;

#[component]
pub fn ChatInput(
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] hint: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    /// Show the web search button and honor Ctrl+Enter
    #[prop(optional)] search: bool,
    /// Receives `(message, force_search)`; never called with blank text
    on_send: Callback<(String, bool)>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let send = move |force_search: bool| {
        let message = text.get_untracked().trim().to_string();
        if message.is_empty() || disabled.get_untracked() {
            return;
        }
        set_text.set(String::new());
        on_send.run((message, force_search));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        if ev.ctrl_key() {
            ev.prevent_default();
            send(search);
        } else if !ev.shift_key() {
            ev.prevent_default();
            send(false);
        }
    };

    view! {
        <div class="chat-input-container">
            <div class="chat-input-wrapper">
                <textarea
                    class="chat-input"
                    rows="1"
                    placeholder=move || placeholder.get()
                    disabled=move || disabled.get()
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                {search.then(|| view! {
                    <button
                        class="search-btn"
                        title="Search the web (Ctrl+Enter)"
                        disabled=move || disabled.get()
                        on:click=move |_| send(true)
                    >
                        "🔍"
                    </button>
                })}
                <button class="send-btn" title="Send" disabled=move || disabled.get() on:click=move |_| send(false)>
                    "➤"
                </button>
            </div>
            <p class="input-hint">{move || hint.get()}</p>
        </div>
    }
}
