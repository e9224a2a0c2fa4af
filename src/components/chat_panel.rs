//! Chat Panel Component
//!
//! General assistant conversation with web search and message editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ChatInput, MessageLog};
use crate::context::AppContext;
use crate::conversation::ConversationLog;
use crate::error::ApiError;

pub const CHAT_WELCOME: &str = "Hello! I'm Axio, your AI coding assistant by Perfionix AI. I can help you with code, debugging, algorithms, and programming questions. What would you like to work on?";

const NO_RESPONSE: &str = "Sorry, I encountered an error.";
const CONNECTION_ERROR: &str = "Connection error. Please make sure the server is running.";

#[component]
pub fn ChatPanel(ctx: AppContext) -> impl IntoView {
    let log = RwSignal::new(ConversationLog::new(Some(CHAT_WELCOME)));
    let (pending, set_pending) = signal::<Option<&'static str>>(None);

    let on_send = Callback::new(move |(message, search): (String, bool)| {
        let Some(user_key) = log.try_update(|l| l.push_user(&message)) else {
            return;
        };
        set_pending.set(Some(if search { "Searching the web..." } else { "Thinking..." }));
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::send_message(&api, &message, search).await;
            if set_pending.try_set(None).is_some() {
                return;
            }
            log.update(|l| match result {
                Ok(reply) => match reply.text() {
                    Some(response) => {
                        l.push_assistant(response, reply.ai_index, reply.searched, true);
                        if let Some(index) = reply.user_index {
                            l.assign_index(user_key, index);
                        }
                    }
                    None => {
                        log::warn!("[CHAT] Reply without response: {:?}", reply.error);
                        l.push_assistant(NO_RESPONSE, None, false, false);
                    }
                },
                Err(e) => {
                    log::error!("[CHAT] Send failed: {}", e);
                    if e.is_network() {
                        l.push_error(CONNECTION_ERROR);
                    } else {
                        l.push_assistant(NO_RESPONSE, None, false, false);
                    }
                }
            });
        });
    });

    let on_edit = Callback::new(move |(index, content): (usize, String)| {
        if let Some(Err(e)) = log.try_update(|l| l.begin_edit(index, &content)) {
            ctx.alert(e.to_string());
            return;
        }
        log::info!("[CHAT] Editing message {}", index);
        set_pending.set(Some("Thinking..."));
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::edit_message(&api, index, &content).await;
            if set_pending.try_set(None).is_some() {
                return;
            }
            match result {
                Ok((response, ai_index)) => {
                    log.update(|l| {
                        l.commit_edit(&response, ai_index);
                    });
                }
                Err(e) => {
                    log.update(|l| {
                        l.rollback_edit();
                    });
                    ctx.alert(edit_failure_message(&e));
                }
            }
        });
    });

    let on_reset = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match commands::reset_chat(&api).await {
                Ok(()) => {
                    log.try_update(|l| l.reset(Some(CHAT_WELCOME)));
                }
                Err(e) => log::error!("[CHAT] Reset failed: {}", e),
            }
        });
    };

    view! {
        <div class="panel-header">
            <h2>"AI Chat"</h2>
            <button class="btn-secondary reset-btn" on:click=on_reset>"↺ New Chat"</button>
        </div>
        <MessageLog ctx=ctx log=log pending=pending on_edit=on_edit />
        <ChatInput
            placeholder={"Ask Axio anything...".to_string()}
            hint={"Enter to send • Shift+Enter for new line • Ctrl+Enter to search the web".to_string()}
            disabled=Signal::derive(move || pending.get().is_some())
            search=true
            on_send=on_send
        />
    }
}

fn edit_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Server(message) => format!("Error: {}", message),
        _ => "Failed to submit edit. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_failure_message() {
        assert_eq!(
            edit_failure_message(&ApiError::Server("Can only edit user messages".into())),
            "Error: Can only edit user messages"
        );
        assert_eq!(
            edit_failure_message(&ApiError::Network("offline".into())),
            "Failed to submit edit. Please try again."
        );
    }
}
