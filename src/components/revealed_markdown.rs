//! Revealed Markdown Component
//!
//! Shows an assistant reply as rendered markdown. Fresh replies are typed
//! out by a `Reveal` driven from a `Ticker`; the last frame is identical to
//! a one-shot render of the whole text.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::markdown;
use crate::reveal::Reveal;
use crate::ticker::{Tick, Ticker};

#[component]
pub fn RevealedMarkdown(
    ctx: AppContext,
    text: String,
    /// Type the text out instead of showing it at once
    animate: bool,
    /// Log container kept scrolled to the bottom while revealing
    scroll: NodeRef<html::Div>,
    #[prop(into, optional)] on_done: Option<Callback<()>>,
) -> impl IntoView {
    if !animate {
        let html = markdown::render(&text);
        return view! { <div class="message-text" inner_html=html></div> }.into_any();
    }

    let (html, set_html) = signal(String::new());
    let config = ctx.config();
    let mut reveal = Reveal::new(text, config.reveal_chunk_chars);
    log::debug!("[REVEAL] Starting: {} frames", reveal.frame_count());

    let handle = Ticker::start_now(config.reveal_step_ms, move || {
        let Some(frame) = reveal.step() else {
            return Tick::Stop;
        };
        if set_html.try_set(frame.html().to_owned()).is_some() {
            // Bubble is gone
            return Tick::Stop;
        }
        scroll_to_bottom(scroll);
        if frame.is_final() {
            if let Some(done) = on_done {
                done.run(());
            }
            return Tick::Stop;
        }
        Tick::Continue
    });

    let handle = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.cancel();
            }
        });
    });

    view! { <div class="message-text" inner_html=move || html.get()></div> }.into_any()
}

pub fn scroll_to_bottom(scroll: NodeRef<html::Div>) {
    if let Some(el) = scroll.get_untracked() {
        el.set_scroll_top(el.scroll_height());
    }
}
