use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Text inputs of the profile form. `showProfile` is a checkbox and is not
/// a validated field, so it has no key here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FirstName,
    LastName,
    City,
    PostalCode,
    Address,
    Email,
    Phone,
    Password,
}

/// How the shell should render the input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile field: {0:?}")]
pub struct ParseFieldKeyError(pub String);

impl FieldKey {
    /// Form order; submit validates in this order.
    pub const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::City,
        Self::PostalCode,
        Self::Address,
        Self::Email,
        Self::Phone,
        Self::Password,
    ];

    /// DOM `name` attribute used by web shells.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::City => "city",
            Self::PostalCode => "postalCode",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::City => "City",
            Self::PostalCode => "Postal Code",
            Self::Address => "Address",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::City => "City Name",
            other => other.label(),
        }
    }

    #[must_use]
    pub const fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Phone => InputKind::Tel,
            Self::Password => InputKind::Password,
            _ => InputKind::Text,
        }
    }

    /// Values that must never reach logs.
    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKey {
    type Err = ParseFieldKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ParseFieldKeyError(s.to_string()))
    }
}
