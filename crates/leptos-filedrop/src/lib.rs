//! Leptos FileDrop Utilities
//!
//! Drag-and-drop and browse-button file intake for Leptos upload areas.
//! Native HTML5 drag events carry the files; a hidden `<input type="file">`
//! covers the click-to-browse path.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList};

/// Drop area state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// True while a drag hovers over the area (drives the `drag-over` class)
    pub is_over_read: ReadSignal<bool>,
    pub is_over_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (is_over_read, is_over_write) = signal(false);
    FileDropSignals {
        is_over_read,
        is_over_write,
    }
}

/// Collect every file of a `FileList` in order
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Lower-cased extension of a file name, empty when there is none
pub fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// Whether a file name carries one of the allowed extensions.
/// An empty allow-list accepts everything.
pub fn accepts(name: &str, allowed: &[&str]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    let ext = extension_of(name);
    allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

/// Create dragover handler: keeps the drop enabled and marks the area
pub fn make_on_dragover(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if !drop.is_over_read.get_untracked() {
            drop.is_over_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(drop: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        drop.is_over_write.set(false);
    }
}

/// Create drop handler; hands the dropped files to `on_files`
pub fn make_on_drop<F>(drop: FileDropSignals, on_files: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(Vec<File>) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        drop.is_over_write.set(false);
        let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
        if !files.is_empty() {
            on_files(files);
        }
    }
}

/// Create change handler for the hidden file input.
/// Resets the input afterwards so picking the same file again still fires.
pub fn make_on_input_change<F>(on_files: F) -> impl Fn(web_sys::Event) + Clone + 'static
where
    F: Fn(Vec<File>) + Clone + 'static,
{
    move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let files = files_from_list(input.files());
        input.set_value("");
        if !files.is_empty() {
            on_files(files);
        }
    }
}

/// Open the browser file picker behind a hidden input
pub fn open_picker(input: Option<web_sys::HtmlInputElement>) {
    if let Some(input) = input {
        input.click();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.PDF"), "pdf");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), "");
    }

    #[test]
    fn test_accepts() {
        let allowed = ["csv", "xlsx", "xls", "json"];
        assert!(accepts("sales.CSV", &allowed));
        assert!(accepts("data.json", &allowed));
        assert!(!accepts("notes.txt", &allowed));
        assert!(!accepts("noext", &allowed));
        assert!(accepts("anything.bin", &[]));
    }
}
