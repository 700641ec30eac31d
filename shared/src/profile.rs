//! Profile form state and the change/blur/submit controller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::FieldKey;
use crate::validation::{validate_field, FieldError};
use crate::DEFAULT_PROFILE;

/// Value, last validation result and touched flag of one text input, kept
/// together so they cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
    pub touched: bool,
}

impl FieldState {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
            touched: false,
        }
    }

    /// The error the user should see. Untouched fields stay quiet even if
    /// an error has been recorded.
    #[must_use]
    pub fn visible_error(&self) -> Option<FieldError> {
        if self.touched {
            self.error
        } else {
            None
        }
    }

    fn revalidate(&mut self, key: FieldKey) {
        self.error = validate_field(key, &self.value).err();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Saved,
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_saved(self) -> bool {
        matches!(self, Self::Saved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    first_name: FieldState,
    last_name: FieldState,
    city: FieldState,
    postal_code: FieldState,
    address: FieldState,
    email: FieldState,
    phone: FieldState,
    password: FieldState,
    pub show_profile: bool,
}

impl Default for ProfileForm {
    fn default() -> Self {
        let mut form = Self {
            first_name: FieldState::default(),
            last_name: FieldState::default(),
            city: FieldState::default(),
            postal_code: FieldState::default(),
            address: FieldState::default(),
            email: FieldState::default(),
            phone: FieldState::default(),
            password: FieldState::default(),
            show_profile: false,
        };
        for (key, value) in DEFAULT_PROFILE {
            *form.field_mut(key) = FieldState::new(value);
        }
        form
    }
}

impl ProfileForm {
    #[must_use]
    pub fn field(&self, key: FieldKey) -> &FieldState {
        match key {
            FieldKey::FirstName => &self.first_name,
            FieldKey::LastName => &self.last_name,
            FieldKey::City => &self.city,
            FieldKey::PostalCode => &self.postal_code,
            FieldKey::Address => &self.address,
            FieldKey::Email => &self.email,
            FieldKey::Phone => &self.phone,
            FieldKey::Password => &self.password,
        }
    }

    fn field_mut(&mut self, key: FieldKey) -> &mut FieldState {
        match key {
            FieldKey::FirstName => &mut self.first_name,
            FieldKey::LastName => &mut self.last_name,
            FieldKey::City => &mut self.city,
            FieldKey::PostalCode => &mut self.postal_code,
            FieldKey::Address => &mut self.address,
            FieldKey::Email => &mut self.email,
            FieldKey::Phone => &mut self.phone,
            FieldKey::Password => &mut self.password,
        }
    }

    #[must_use]
    pub fn value(&self, key: FieldKey) -> &str {
        &self.field(key).value
    }

    /// Store the new value. An error only shows up (or goes away) while
    /// typing once the field has been left at least once.
    pub fn on_change(&mut self, key: FieldKey, value: impl Into<String>) {
        let field = self.field_mut(key);
        field.value = value.into();
        if field.touched {
            field.revalidate(key);
        }
    }

    pub fn set_show_profile(&mut self, checked: bool) {
        self.show_profile = checked;
    }

    /// Mark the field touched and validate the value the input held when it
    /// lost focus.
    pub fn on_blur(&mut self, key: FieldKey, current_value: &str) {
        let field = self.field_mut(key);
        field.touched = true;
        field.error = validate_field(key, current_value).err();
    }

    /// Touch and validate every text field, replacing all previous errors.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        for key in FieldKey::ALL {
            let field = self.field_mut(key);
            field.touched = true;
            field.revalidate(key);
        }

        match self.error_count() {
            0 => SubmitOutcome::Saved,
            error_count => SubmitOutcome::Rejected { error_count },
        }
    }

    #[must_use]
    pub fn visible_error(&self, key: FieldKey) -> Option<FieldError> {
        self.field(key).visible_error()
    }

    /// Number of recorded errors, shown or not.
    #[must_use]
    pub fn error_count(&self) -> usize {
        FieldKey::ALL
            .into_iter()
            .filter(|key| self.field(*key).error.is_some())
            .count()
    }

    /// Whether the current values would pass a submit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        FieldKey::ALL
            .into_iter()
            .all(|key| validate_field(key, self.value(key)).is_ok())
    }

    #[must_use]
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            city: self.city.value.clone(),
            postal_code: self.postal_code.value.clone(),
            address: self.address.value.clone(),
            email: self.email.value.clone(),
            phone: self.phone.value.clone(),
            password: self.password.value.clone(),
            show_profile: self.show_profile,
        }
    }
}

/// The submitted profile as plain values.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub postal_code: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub show_profile: bool,
}

// Redact debug output so submission logs never carry the password.
impl fmt::Debug for ProfileSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileSnapshot")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("city", &self.city)
            .field("postal_code", &self.postal_code)
            .field("address", &self.address)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("show_profile", &self.show_profile)
            .finish()
    }
}
