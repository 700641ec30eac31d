use serde::{Deserialize, Serialize};

use crate::field::{FieldKey, InputKind};
use crate::model::{Model, ToastKind, ToastMessage, ToastPosition, ToastStyle};
use crate::profile::ProfileForm;
use crate::sidebar::{SearchResults, Sidebar};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldView {
    pub key: FieldKey,
    pub label: String,
    pub placeholder: String,
    pub input_kind: InputKind,
    pub value: String,
    /// Floating label is shown once the input has content.
    pub show_label: bool,
    /// Red border plus an inline message with an alert icon.
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileView {
    pub fields: Vec<FieldView>,
    pub show_profile: bool,
    pub is_valid: bool,
}

impl From<&ProfileForm> for ProfileView {
    fn from(form: &ProfileForm) -> Self {
        let fields = FieldKey::ALL
            .into_iter()
            .map(|key| {
                let value = form.value(key).to_string();
                FieldView {
                    key,
                    label: key.label().into(),
                    placeholder: key.placeholder().into(),
                    input_kind: key.input_kind(),
                    show_label: !value.is_empty(),
                    value,
                    error: form.visible_error(key).map(|e| e.to_string()),
                }
            })
            .collect();

        Self {
            fields,
            show_profile: form.show_profile,
            is_valid: form.is_valid(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarView {
    pub query: String,
    pub search_focused: bool,
    pub results: SearchResults,
    pub boards: Vec<String>,
    pub locked_boards: Vec<String>,
}

impl From<&Sidebar> for SidebarView {
    fn from(sidebar: &Sidebar) -> Self {
        Self {
            query: sidebar.query.clone(),
            search_focused: sidebar.search_focused,
            results: sidebar.results(),
            boards: Sidebar::boards(),
            locked_boards: Sidebar::locked_boards(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastView {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
    pub position: ToastPosition,
    pub style: ToastStyle,
}

impl From<&ToastMessage> for ToastView {
    fn from(t: &ToastMessage) -> Self {
        Self {
            id: t.id.as_str().to_owned(),
            message: t.message.clone(),
            kind: t.kind,
            duration_ms: t.duration_ms,
            position: ToastPosition::default(),
            style: t.kind.style(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub profile: ProfileView,
    pub sidebar: SidebarView,
    pub toast: Option<ToastView>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        Self {
            profile: ProfileView::from(&model.profile),
            sidebar: SidebarView::from(&model.sidebar),
            toast: model.active_toast.as_ref().map(ToastView::from),
        }
    }
}
