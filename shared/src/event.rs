use serde::{Deserialize, Serialize};

use crate::field::FieldKey;
use crate::model::ToastId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum Event {
    #[default]
    Noop,

    // Profile form
    FieldChanged {
        field: FieldKey,
        value: String,
    },
    FieldBlurred {
        field: FieldKey,
        value: String,
    },
    ShowProfileToggled {
        checked: bool,
    },
    ProfileSubmitted,

    // Sidebar
    SearchQueryChanged {
        text: String,
    },
    SearchFocusChanged {
        focused: bool,
    },
    SearchSubmitted {
        text: String,
    },
    HistoryItemSelected {
        item: String,
    },
    HistoryItemRemoved {
        index: usize,
    },

    // Notifications
    DismissToast {
        id: ToastId,
    },
}

impl Event {
    /// Stable name for logs. Payloads are left out on purpose: they can carry
    /// the password.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::FieldChanged { .. } => "field_changed",
            Self::FieldBlurred { .. } => "field_blurred",
            Self::ShowProfileToggled { .. } => "show_profile_toggled",
            Self::ProfileSubmitted => "profile_submitted",
            Self::SearchQueryChanged { .. } => "search_query_changed",
            Self::SearchFocusChanged { .. } => "search_focus_changed",
            Self::SearchSubmitted { .. } => "search_submitted",
            Self::HistoryItemSelected { .. } => "history_item_selected",
            Self::HistoryItemRemoved { .. } => "history_item_removed",
            Self::DismissToast { .. } => "dismiss_toast",
        }
    }

    /// The form field an event refers to, if any.
    #[must_use]
    pub const fn field(&self) -> Option<FieldKey> {
        match self {
            Self::FieldChanged { field, .. } | Self::FieldBlurred { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_events_deserialize_from_dom_names() {
        let json = r#"{"FieldChanged":{"field":"postalCode","value":"N1 9GU"}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            Event::FieldChanged {
                field: FieldKey::PostalCode,
                value: "N1 9GU".into()
            }
        );
        assert_eq!(event.field(), Some(FieldKey::PostalCode));
    }

    #[test]
    fn unknown_field_names_are_rejected() {
        let json = r#"{"FieldBlurred":{"field":"showProfile","value":"on"}}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn names_do_not_leak_values() {
        let event = Event::FieldChanged {
            field: FieldKey::Password,
            value: "hunter22".into(),
        };
        assert_eq!(event.name(), "field_changed");
    }

    #[test]
    fn event_size_is_reasonable() {
        let size = std::mem::size_of::<Event>();
        assert!(size <= 64, "Event enum is {size} bytes");
    }
}
