//! Gated query results.

/// Outcome of a query that may decline to produce output.
///
/// `NoChange` tells the presentation layer to leave its current outputs
/// alone. It is distinct from an update carrying an empty value.
#[derive(Debug, Clone, PartialEq)]
pub enum Update<T> {
    Updated(T),
    NoChange,
}

impl<T> Update<T> {
    pub fn is_no_change(&self) -> bool {
        matches!(self, Update::NoChange)
    }

    pub fn into_updated(self) -> Option<T> {
        match self {
            Update::Updated(value) => Some(value),
            Update::NoChange => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Update<U> {
        match self {
            Update::Updated(value) => Update::Updated(f(value)),
            Update::NoChange => Update::NoChange,
        }
    }
}

impl<T> From<Option<T>> for Update<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Update::NoChange, Update::Updated)
    }
}
