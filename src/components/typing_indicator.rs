//! Typing Indicator Component

use leptos::prelude::*;

/// Animated placeholder bubble shown while a reply is pending
#[component]
pub fn TypingIndicator(#[prop(into)] status: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="message assistant typing-indicator-message">
            <div class="message-avatar ai-avatar loading">
                <AiIcon />
            </div>
            <div class="message-content">
                <div class="typing-indicator">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
                <span class="typing-status">{move || status.get()}</span>
            </div>
        </div>
    }
}

/// Assistant avatar
#[component]
pub fn AiIcon() -> impl IntoView {
    view! {
        <div class="ai-icon">
            <div class="ai-core"></div>
            <div class="ai-ring"></div>
            <div class="ai-particles">
                <span></span><span></span><span></span><span></span>
            </div>
        </div>
    }
}
