//! View Router
//!
//! The six dashboard panels and their stable DOM ids.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Chat,
    Tasks,
    Notes,
    Reminders,
    DocIq,
    VizIq,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Chat,
        Panel::Tasks,
        Panel::Notes,
        Panel::Reminders,
        Panel::DocIq,
        Panel::VizIq,
    ];

    /// Stable identifier (`data-view` attribute and section id suffix)
    pub fn id(self) -> &'static str {
        match self {
            Panel::Chat => "chat",
            Panel::Tasks => "tasks",
            Panel::Notes => "notes",
            Panel::Reminders => "reminders",
            Panel::DocIq => "dociq",
            Panel::VizIq => "viziq",
        }
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Chat => "AI Chat",
            Panel::Tasks => "Tasks",
            Panel::Notes => "Notes",
            Panel::Reminders => "Reminders",
            Panel::DocIq => "DocIQ",
            Panel::VizIq => "VizIQ",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Panel::Chat => "💬",
            Panel::Tasks => "✅",
            Panel::Notes => "📝",
            Panel::Reminders => "⏰",
            Panel::DocIq => "📄",
            Panel::VizIq => "📊",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_and_are_unique() {
        for panel in Panel::ALL {
            assert_eq!(Panel::from_id(panel.id()), Some(panel));
        }
        let mut ids: Vec<_> = Panel::ALL.iter().map(|p| p.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Panel::from_id("settings"), None);
        assert_eq!(Panel::default(), Panel::Chat);
    }
}
