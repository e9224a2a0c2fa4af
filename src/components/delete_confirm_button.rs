//! Delete Confirm Button Component
//!
//! Two-step removal for list rows: a × button arms the row, and the
//! removal only runs after an explicit ✓. The row disarms on either answer.

use leptos::prelude::*;

/// `what` names the row's entity ("task", "note", "document") in the
/// tooltip and the confirmation prompt.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] what: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let (tooltip, prompt) = confirm_labels(&what);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    title=tooltip.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

/// `(tooltip, prompt)` for a row holding a `what`
fn confirm_labels(what: &str) -> (String, String) {
    let what = what.trim();
    if what.is_empty() {
        return ("Delete".to_string(), "Delete?".to_string());
    }
    (format!("Delete {}", what), format!("Delete this {}?", what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_name_the_entity() {
        assert_eq!(
            confirm_labels("reminder"),
            ("Delete reminder".to_string(), "Delete this reminder?".to_string())
        );
        assert_eq!(confirm_labels(" "), ("Delete".to_string(), "Delete?".to_string()));
    }
}
