//! Tri-state field for partial updates.
//!
//! A JSON update body can leave a field out, send it as `null`, or send a
//! value. `Option<T>` collapses the first two, so update DTOs use [`Patch`]
//! together with `#[serde(default)]`:
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct UpdateThing {
//!     #[serde(default)]
//!     label: Patch<String>,
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// A single field of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not present in the payload; keep the stored value.
    Absent,
    /// The field was present as `null`.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// `true` when the payload mentioned the field at all (`null` or value).
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    /// The carried value, if any. Both `Absent` and `Null` yield `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

// Only reached when the key exists, so a missing key falls back to
// `Default` (Absent) through `#[serde(default)]`.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
