//! Non-fatal parse warnings.

use std::fmt;

use serde::Serialize;

/// Classification of a recoverable schema deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WarningCode {
    /// Element `type` has no registered parser.
    UnknownElementType,
    /// Action `type` has no registered parser.
    UnknownActionElementType,
    /// Enum property holds a value outside its known set.
    UnknownEnumValue,
    /// A required property is absent; a default was used.
    RequiredPropertyMissing,
    /// A property has the wrong JSON type or an unusable value.
    InvalidValue,
    /// Card declares a schema version newer than the supported one.
    UnsupportedSchemaVersion,
    /// Warning raised by a host-provided parser.
    CustomWarning,
}

impl WarningCode {
    /// Get the string value used in diagnostics output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownElementType => "UnknownElementType",
            Self::UnknownActionElementType => "UnknownActionElementType",
            Self::UnknownEnumValue => "UnknownEnumValue",
            Self::RequiredPropertyMissing => "RequiredPropertyMissing",
            Self::InvalidValue => "InvalidValue",
            Self::UnsupportedSchemaVersion => "UnsupportedSchemaVersion",
            Self::CustomWarning => "CustomWarning",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recoverable schema issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
}

impl Warning {
    /// Create a new warning.
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Ordered, append-only warning sink.
///
/// Warnings keep their encounter order and are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Warnings {
    entries: Vec<Warning>,
}

impl Warnings {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a warning.
    pub fn push(&mut self, warning: Warning) {
        tracing::debug!(code = %warning.code, message = %warning.message, "Parse warning");
        self.entries.push(warning);
    }

    /// Append a warning built from a code and message.
    pub fn add(&mut self, code: WarningCode, message: impl Into<String>) {
        self.push(Warning::new(code, message));
    }

    /// Number of warnings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no warnings were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.entries.iter()
    }

    /// View the warnings in encounter order.
    #[must_use]
    pub fn as_slice(&self) -> &[Warning] {
        &self.entries
    }

    /// Take ownership of the recorded warnings.
    #[must_use]
    pub fn into_vec(self) -> Vec<Warning> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
