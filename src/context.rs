//! Application Context
//!
//! Shared handles built once in `App` and handed to every panel as a prop.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, ApiClient};
use crate::config::Config;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Which creation form the modal dialog shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Task,
    Note,
    Reminder,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Task => "Add Task",
            ModalKind::Note => "New Note",
            ModalKind::Reminder => "Set Reminder",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<Config>,
    api: StoredValue<ApiClient>,
    /// Message shown in the alert banner - read
    pub alert: ReadSignal<Option<String>>,
    /// Message shown in the alert banner - write
    set_alert: WriteSignal<Option<String>>,
    /// Open creation form (None = closed)
    pub modal: RwSignal<Option<ModalKind>>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(&config.api_base);
        let (alert, set_alert) = signal(None);
        Self {
            store: AppStore::new(AppState::default()),
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            alert,
            set_alert,
            modal: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> Config {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Show `message` to the user until dismissed
    pub fn alert(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("[ALERT] {}", message);
        self.set_alert.set(Some(message));
    }

    pub fn dismiss_alert(&self) {
        self.set_alert.set(None);
    }

    pub fn open_modal(&self, kind: ModalKind) {
        self.modal.set(Some(kind));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    /// Blocking browser confirmation; false when unavailable
    pub fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    /// Re-fetch the badge counters; failures keep the previous numbers
    pub fn refresh_stats(&self) {
        let store = self.store;
        let api = self.api();
        spawn_local(async move {
            match commands::get_stats(&api).await {
                Ok(stats) => *store.stats().write() = stats,
                Err(e) => log::warn!("[STATS] Refresh failed: {}", e),
            }
        });
    }

    /// Initial load of tasks, notes, reminders and stats
    pub fn load_all(&self) {
        let store = self.store;
        let api = self.api();
        spawn_local(async move {
            match commands::list_tasks(&api).await {
                Ok(tasks) => {
                    log::info!("[APP] Loaded {} tasks", tasks.len());
                    store.tasks().write().replace_all(tasks);
                }
                Err(e) => log::error!("[APP] Failed to load tasks: {}", e),
            }
            match commands::list_notes(&api).await {
                Ok(notes) => store.notes().write().replace_all(notes),
                Err(e) => log::error!("[APP] Failed to load notes: {}", e),
            }
            match commands::list_reminders(&api).await {
                Ok(reminders) => store.reminders().write().replace_all(reminders),
                Err(e) => log::error!("[APP] Failed to load reminders: {}", e),
            }
        });
        self.refresh_stats();
    }
}
