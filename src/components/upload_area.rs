//! Upload Area Component
//!
//! Drop target plus click-to-browse for document and dataset uploads.

use leptos::html;
use leptos::prelude::*;
use leptos_filedrop::{
    accepts, create_file_drop_signals, make_on_dragleave, make_on_dragover, make_on_drop,
    make_on_input_change, open_picker,
};
use web_sys::File;

use crate::context::AppContext;

#[component]
pub fn UploadArea(
    ctx: AppContext,
    title: &'static str,
    subtitle: &'static str,
    /// Allowed extensions (lower-case, no dot)
    allowed: &'static [&'static str],
    #[prop(optional)] multiple: bool,
    on_files: Callback<Vec<File>>,
) -> impl IntoView {
    let drop = create_file_drop_signals();
    let input_ref = NodeRef::<html::Input>::new();

    let accept = allowed.iter().map(|ext| format!(".{}", ext)).collect::<Vec<_>>().join(",");

    let take = move |files: Vec<File>| {
        let (ok, rejected): (Vec<File>, Vec<File>) = files.into_iter().partition(|f| accepts(&f.name(), allowed));
        for file in &rejected {
            ctx.alert(format!("Unsupported file type: {}", file.name()));
        }
        let ok = if multiple { ok } else { ok.into_iter().take(1).collect() };
        if !ok.is_empty() {
            on_files.run(ok);
        }
    };

    view! {
        <div
            class=move || if drop.is_over_read.get() { "upload-area drag-over" } else { "upload-area" }
            on:dragover=make_on_dragover(drop)
            on:dragleave=make_on_dragleave(drop)
            on:drop=make_on_drop(drop, take)
            on:click=move |_| open_picker(input_ref.get_untracked())
        >
            <div class="upload-icon">"⬆"</div>
            <h3>{title}</h3>
            <p>{subtitle}</p>
            <input
                type="file"
                class="file-input"
                hidden
                accept=accept
                multiple=multiple
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=make_on_input_change(take)
            />
        </div>
    }
}
