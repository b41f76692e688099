//! # Group Contracts
//!
//! Provides the [`Group`] and [`GroupElement`] traits every group variant implements,
//! and the guard used to reject operands that belong to another group.

use std::fmt;

use crate::errors::GroupError;
use crate::subgroup::Subgroup;

/// An element of exactly one group.
///
/// Elements are immutable values: every operation builds a fresh element.
pub trait GroupElement: Clone + fmt::Debug + fmt::Display {
    type Group: Group<Element = Self>;

    /// The group this element belongs to.
    fn group(&self) -> &Self::Group;

    /// The inverse element (negation in additive notation).
    fn inverse(&self) -> Self;

    /// Applies the group operation.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `other` belongs to another group.
    fn combine(&self, other: &Self) -> Result<Self, GroupError>;

    /// Equality within a single group.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `other` belongs to another group. Elements of
    /// different groups are never reported as merely unequal.
    fn equals(&self, other: &Self) -> Result<bool, GroupError>;

    /// Combines the element with itself `exponent` times.
    ///
    /// Negative exponents combine the inverse, `pow(0)` is the identity.
    ///
    /// # Example
    ///
    /// ```
    /// # use group_algebra::{Group, GroupElement, Integers};
    /// let three = Integers.value(3);
    /// assert_eq!(three.pow(4).unwrap(), Integers.value(12));
    /// assert_eq!(three.pow(-2).unwrap(), Integers.value(-6));
    /// assert_eq!(three.pow(0).unwrap(), Integers.identity());
    /// ```
    fn pow(&self, exponent: i64) -> Result<Self, GroupError> {
        let mut square = if exponent < 0 {
            self.inverse()
        } else {
            self.clone()
        };
        let mut remaining = exponent.unsigned_abs();
        let mut result = self.group().identity();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.combine(&square)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.combine(&square)?;
            }
        }

        Ok(result)
    }
}

/// A group whose subgroups can be queried for membership and normality.
///
/// Root groups (no parent) must answer [`Group::subgroup_member`] and
/// [`Group::subgroup_normal`] without delegating upward, otherwise queries lifted
/// from nested subgroups never terminate.
pub trait Group: Clone + fmt::Debug {
    type Element: GroupElement<Group = Self>;

    fn identity(&self) -> Self::Element;

    /// Builds or retrieves the element named by `identifier`.
    fn element(&self, identifier: i64) -> Result<Self::Element, GroupError>;

    /// Generators taken from the parent group, `None` for root groups.
    fn generators(&self) -> Option<Vec<Self::Element>> {
        None
    }

    /// Whether the group was built without a parent.
    fn is_root(&self) -> bool {
        true
    }

    /// Whether `self` and `other` are the same group (not merely alike).
    fn same_group(&self, other: &Self) -> bool;

    /// Is `subgroup` normal in this group?
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `subgroup` was not generated from this group.
    fn subgroup_normal(&self, subgroup: &Subgroup<Self>) -> Result<bool, GroupError>;

    /// Does `element` belong to `subgroup`?
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `element` is not an element of this group or
    /// `subgroup` was not generated from this group.
    fn subgroup_member(
        &self,
        element: &Self::Element,
        subgroup: &Subgroup<Self>,
    ) -> Result<bool, GroupError>;
}

/// Rejects `actual` unless it is the very group `expected`.
pub(crate) fn ensure_same_group<G: Group>(
    expected: &G,
    actual: &G,
    what: &str,
) -> Result<(), GroupError> {
    if expected.same_group(actual) {
        return Ok(());
    }

    Err(GroupError::TypeConflict(format!(
        "{} belongs to {:?}, expected {:?}",
        what, actual, expected
    )))
}

/// Rejects a subgroup that was not generated from `group`.
pub(crate) fn ensure_subgroup_of<G: Group>(
    group: &G,
    subgroup: &Subgroup<G>,
) -> Result<(), GroupError> {
    if group.same_group(subgroup.parent()) {
        return Ok(());
    }

    Err(GroupError::TypeConflict(format!(
        "Expected a subgroup of {:?}, got {:?}",
        group, subgroup
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integers::Integers;

    #[test]
    fn test_pow_matches_repeated_combination() -> Result<(), GroupError> {
        let two = Integers.value(2);
        let mut expected = Integers.identity();
        for exponent in 0..10 {
            assert_eq!(two.pow(exponent)?, expected);
            expected = expected.combine(&two)?;
        }
        Ok(())
    }

    #[test]
    fn test_pow_of_extreme_exponent() -> Result<(), GroupError> {
        let one = Integers.value(1);
        assert_eq!(one.pow(i64::MIN)?, Integers.value(i64::MIN));
        assert_eq!(one.pow(i64::MAX)?, Integers.value(i64::MAX));
        Ok(())
    }

    #[test]
    fn test_guard_accepts_same_group() {
        assert!(ensure_same_group(&Integers, &Integers, "element").is_ok());
    }
}
