// lib.rs - Profile page and navigation sidebar core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod event;
pub mod field;
pub mod model;
pub mod profile;
pub mod sidebar;
pub mod validation;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::Event;
pub use field::{FieldKey, InputKind, ParseFieldKeyError};
pub use model::{Model, ToastId, ToastKind, ToastMessage};
pub use profile::{FieldState, ProfileForm, ProfileSnapshot, SubmitOutcome};
pub use sidebar::{HistoryEntry, SearchResults, Sidebar};
pub use validation::{error_message, validate_field, FieldError};
pub use view::{FieldView, ProfileView, SidebarView, ToastView, ViewModel};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_ADDRESS_LEN: usize = 5;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 6;

pub const TOAST_DURATION_MS: u64 = 3000;
pub const SUBMIT_SAVED_MESSAGE: &str = "Profile saved successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str = "Please fix the errors in the form";

/// The profile the form opens with.
pub const DEFAULT_PROFILE: [(FieldKey, &str); 8] = [
    (FieldKey::FirstName, "Petter"),
    (FieldKey::LastName, "Cetera"),
    (FieldKey::City, "London"),
    (FieldKey::PostalCode, "E2 4XF"),
    (FieldKey::Address, "123 Example"),
    (FieldKey::Email, "petter@gmail.com"),
    (FieldKey::Phone, "+442223334444"),
    (FieldKey::Password, "Password"),
];

pub const TEMPLATES: &[&str] = &[
    "Software Engineer",
    "Computer hardware engineer",
    "Network Engineer",
    "Technical Support",
    "Network administrator",
    "Management",
    "Data analysis",
    "Computer technician",
];

pub const BOARDS: &[&str] = &["Board 1", "Board 2", "Board 3"];
pub const LOCKED_BOARDS: &[&str] = &["Board agent 1", "Board agent 1", "Board agent 1"];

pub const DEFAULT_SEARCH_HISTORY: &[&str] = &[
    "Past search 1",
    "Past search 2",
    "More find information...",
    "Database Administrator",
    "Computer security",
    "Computer Systems Analyst",
];
