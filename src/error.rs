//! Errors returned by refused insertions.

use core::fmt;

use thiserror::Error;

/// Why an insertion was refused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Error)]
pub enum InsertErrorKind {
    /// The backing allocation failed or was requested with capacity 0.
    #[error("collection storage is degraded")]
    Degraded,
    /// Every slot is already live.
    #[error("insufficient capacity")]
    Full,
    /// The duplication policy forbids a second equal element.
    #[error("equal element already present")]
    Duplicate,
    /// The requested position lies past the live range.
    #[error("index out of bounds")]
    OutOfBounds,
}

/// Error value returned by a refused insertion.
///
/// The rejected element is handed back so nothing is lost when a push fails.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Error)]
#[error("{kind}")]
pub struct InsertError<T = ()> {
    /// The element that caused the error.
    pub element: T,
    kind: InsertErrorKind,
}

impl<T> InsertError<T> {
    #[inline]
    pub(crate) fn new(element: T, kind: InsertErrorKind) -> Self {
        InsertError { element, kind }
    }

    /// Returns the reason for the refusal.
    #[inline]
    pub fn kind(&self) -> InsertErrorKind {
        self.kind
    }

    /// Gives the rejected element back.
    #[inline]
    pub fn into_element(self) -> T {
        self.element
    }

    /// Drops the element, keeping only the reason.
    #[inline]
    pub fn simplify(self) -> InsertError {
        InsertError { element: (), kind: self.kind }
    }

    #[inline]
    pub(crate) fn map<U, F: FnOnce(T) -> U>(self, f: F) -> InsertError<U> {
        InsertError { element: f(self.element), kind: self.kind }
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InsertError: {}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind() {
        let err = InsertError::new(7, InsertErrorKind::Full);
        assert_eq!(err.to_string(), "insufficient capacity");
        assert_eq!(format!("{:?}", err), "InsertError: insufficient capacity");
    }

    #[test]
    fn element_is_handed_back() {
        let err = InsertError::new("probe", InsertErrorKind::Duplicate);
        assert_eq!(err.kind(), InsertErrorKind::Duplicate);
        assert_eq!(err.simplify().kind(), InsertErrorKind::Duplicate);
        assert_eq!(err.into_element(), "probe");
    }
}
