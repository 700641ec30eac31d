use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::ProfileForm;
use crate::sidebar::Sidebar;
use crate::TOAST_DURATION_MS;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(pub String);

impl ToastId {
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
}

/// Presentation hint passed through to the shell's toast renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastStyle {
    pub background: String,
    pub color: String,
    pub font_weight: u16,
}

impl ToastKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Success | Self::Error => TOAST_DURATION_MS,
        }
    }

    #[must_use]
    pub fn style(self) -> ToastStyle {
        let (background, color, font_weight) = match self {
            Self::Success => ("#fff", "green", 400),
            Self::Error => ("#dc2626", "#fff", 500),
        };
        ToastStyle {
            background: background.into(),
            color: color.into(),
            font_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl ToastMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: ToastId::generate(),
            message: message.into(),
            kind,
            duration_ms: kind.default_duration_ms(),
        }
    }
}

/// Everything the page owns. Created at mount, dropped at unmount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub profile: ProfileForm,
    pub sidebar: Sidebar,
    pub active_toast: Option<ToastMessage>,
}

impl Model {
    /// Show a toast, replacing whatever is on screen. Returns its id.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let toast = ToastMessage::new(message, kind);
        let id = toast.id.clone();
        self.active_toast = Some(toast);
        id
    }

    /// Dismiss the toast with `id`. Returns `false` if it was already
    /// replaced or gone.
    pub fn dismiss_toast(&mut self, id: &ToastId) -> bool {
        if self.active_toast.as_ref().is_some_and(|t| &t.id == id) {
            self.active_toast = None;
            true
        } else {
            false
        }
    }
}
