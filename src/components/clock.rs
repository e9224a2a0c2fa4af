//! Header Clock Component

use chrono::Local;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::format;
use crate::ticker::{Tick, Ticker};

#[component]
pub fn HeaderClock(ctx: AppContext) -> impl IntoView {
    let (text, set_text) = signal(format::clock_text(&Local::now()));

    let handle = Ticker::start(ctx.config().clock_tick_ms, move || {
        match set_text.try_set(format::clock_text(&Local::now())) {
            // Owner disposed: stop ticking
            Some(_) => Tick::Stop,
            None => Tick::Continue,
        }
    });
    let handle = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.cancel();
            }
        });
    });

    view! { <span class="header-clock">{move || text.get()}</span> }
}
