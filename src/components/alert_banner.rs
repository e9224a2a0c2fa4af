//! Alert Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Dismissable banner for errors the user has to see
#[component]
pub fn AlertBanner(ctx: AppContext) -> impl IntoView {
    view! {
        {move || ctx.alert.get().map(|message| view! {
            <div class="alert-banner" role="alert">
                <span class="alert-text">{message}</span>
                <button class="alert-close" on:click=move |_| ctx.dismiss_alert()>"×"</button>
            </div>
        })}
    }
}
