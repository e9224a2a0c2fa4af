//! UI Components
//!
//! Leptos components for the dashboard shell and its panels.

mod alert_banner;
mod chart_card;
mod chat_input;
mod chat_panel;
mod clock;
mod delete_confirm_button;
mod dociq_panel;
mod document_list;
mod message_bubble;
mod message_log;
mod modal;
mod nav_sidebar;
mod notes_panel;
mod priority_selector;
mod reminders_panel;
mod revealed_markdown;
mod tasks_panel;
mod typing_indicator;
mod upload_area;
mod viziq_panel;

pub use alert_banner::AlertBanner;
pub use chart_card::ChartCard;
pub use chat_input::ChatInput;
pub use chat_panel::ChatPanel;
pub use clock::HeaderClock;
pub use delete_confirm_button::DeleteConfirmButton;
pub use dociq_panel::DocIqPanel;
pub use document_list::DocumentList;
pub use message_bubble::MessageBubble;
pub use message_log::MessageLog;
pub use modal::ModalHost;
pub use nav_sidebar::NavSidebar;
pub use notes_panel::NotesPanel;
pub use priority_selector::PrioritySelector;
pub use reminders_panel::RemindersPanel;
pub use revealed_markdown::RevealedMarkdown;
pub use tasks_panel::TasksPanel;
pub use typing_indicator::{AiIcon, TypingIndicator};
pub use upload_area::UploadArea;
pub use viziq_panel::VizIqPanel;
