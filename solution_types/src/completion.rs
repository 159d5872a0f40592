//! Completion marker for generated fields.
//!
//! ```text
//! PENDING ──(human edits the textproto)──► RESOLVED
//! ```
//!
//! Fields with no equivalent in blueprint metadata are emitted as
//! `Pending` placeholders. Encoders write the inner value either way;
//! tooling uses the marker to list what still needs manual completion.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Completion<T> {
    /// Value derived from source metadata
    Resolved(T),
    /// Placeholder that must be replaced by a human
    Pending(T),
}

impl<T> Completion<T> {
    pub fn value(&self) -> &T {
        match self {
            Completion::Resolved(v) | Completion::Pending(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Completion::Resolved(v) | Completion::Pending(v) => v,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Completion::Pending(_))
    }

    pub fn is_resolved(&self) -> bool {
        !self.is_pending()
    }

    /// Replace a placeholder with a real value
    pub fn resolve(&mut self, value: T) {
        *self = Completion::Resolved(value);
    }
}

/// An untouched field is resolved to its empty value, not pending.
impl<T: Default> Default for Completion<T> {
    fn default() -> Self {
        Completion::Resolved(T::default())
    }
}
