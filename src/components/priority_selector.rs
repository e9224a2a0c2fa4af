//! Priority Selector Component

use leptos::prelude::*;

use crate::models::Priority;

/// Low / Medium / High toggle buttons for the task form
#[component]
pub fn PrioritySelector(
    current: ReadSignal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::ALL.iter().map(|&priority| {
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || {
                            let base = format!("priority-btn {}", priority.as_str());
                            if is_selected() { format!("{} active", base) } else { base }
                        }
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
