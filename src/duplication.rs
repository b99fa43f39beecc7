//! Duplication policies: whether an element equal to a live one may be added.

use crate::placement::Placement;

/// Decides whether a candidate element may join the live range.
pub trait Duplication<T> {
    /// `true` if equal elements are refused.
    const FORBIDS: bool;

    /// Returns `true` if `item` may be inserted among `live`, using the
    /// placement policy `P` to look for an equal element.
    fn allows<P: Placement<T>>(live: &[T], item: &T) -> bool;
}

/// Always admits the candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowDuplicates;

impl<T> Duplication<T> for AllowDuplicates {
    const FORBIDS: bool = false;

    #[inline]
    fn allows<P: Placement<T>>(_live: &[T], _item: &T) -> bool {
        true
    }
}

/// Admits the candidate only if no live element equals it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForbidDuplicates;

impl<T: PartialEq> Duplication<T> for ForbidDuplicates {
    const FORBIDS: bool = true;

    #[inline]
    fn allows<P: Placement<T>>(live: &[T], item: &T) -> bool {
        P::find(live, item).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Ascending;
    use crate::placement::{Ordered, Sequential};

    #[test]
    fn allow_ignores_content() {
        assert!(AllowDuplicates::allows::<Sequential>(&[1, 1, 1], &1));
        assert!(AllowDuplicates::allows::<Sequential>(&[], &1));
    }

    #[test]
    fn forbid_checks_presence() {
        assert!(!ForbidDuplicates::allows::<Sequential>(&[3, 1, 2], &1));
        assert!(ForbidDuplicates::allows::<Sequential>(&[3, 1, 2], &4));
        assert!(!ForbidDuplicates::allows::<Ordered<Ascending>>(&[1, 2, 3], &2));
        assert!(ForbidDuplicates::allows::<Ordered<Ascending>>(&[1, 2, 3], &0));
    }
}
