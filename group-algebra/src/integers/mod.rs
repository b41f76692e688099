//! # Integers Module
//!
//! Provides the [`Integers`] group, the additive group ℤ. It is the root every chain of
//! subgroups over ℤ reduces to, and answers membership and normality in closed form.

pub mod helper;

use std::fmt;
use std::ops::Neg;

use log::trace;
use num_bigint::BigInt;

use crate::errors::GroupError;
use crate::group::{Group, GroupElement, ensure_same_group, ensure_subgroup_of};
use crate::subgroup::Subgroup;

pub use helper::{gcd_all, is_multiple};

/// The additive group of all integers.
///
/// There is only one ℤ: every `Integers` value is the same group.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Integers;

/// An integer viewed as an element of [`Integers`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntegersElement {
    group: Integers,
    value: BigInt,
}

impl Integers {
    /// Builds the element for an integer of any size.
    ///
    /// # Example
    ///
    /// ```
    /// # use group_algebra::{GroupElement, Integers};
    /// let sum = Integers.value(7).combine(&Integers.value(-2)).unwrap();
    /// assert_eq!(sum.to_string(), "5");
    /// ```
    pub fn value(&self, n: impl Into<BigInt>) -> IntegersElement {
        IntegersElement {
            group: *self,
            value: n.into(),
        }
    }
}

impl IntegersElement {
    pub fn value(&self) -> &BigInt {
        &self.value
    }
}

impl GroupElement for IntegersElement {
    type Group = Integers;

    fn group(&self) -> &Integers {
        &self.group
    }

    fn inverse(&self) -> Self {
        IntegersElement {
            group: self.group,
            value: -&self.value,
        }
    }

    fn combine(&self, other: &Self) -> Result<Self, GroupError> {
        ensure_same_group(&self.group, &other.group, "Operand")?;

        Ok(IntegersElement {
            group: self.group,
            value: &self.value + &other.value,
        })
    }

    fn equals(&self, other: &Self) -> Result<bool, GroupError> {
        ensure_same_group(&self.group, &other.group, "Operand")?;

        Ok(self.value == other.value)
    }
}

impl Group for Integers {
    type Element = IntegersElement;

    fn identity(&self) -> IntegersElement {
        self.value(0)
    }

    fn element(&self, identifier: i64) -> Result<IntegersElement, GroupError> {
        Ok(self.value(identifier))
    }

    fn same_group(&self, _other: &Self) -> bool {
        true
    }

    /// Always true: ℤ is abelian.
    fn subgroup_normal(&self, subgroup: &Subgroup<Self>) -> Result<bool, GroupError> {
        ensure_subgroup_of(self, subgroup)?;

        Ok(true)
    }

    /// `v` lies in the subgroup generated by `g1..gn` iff `gcd(g1..gn)` divides `v`.
    ///
    /// # Example
    ///
    /// ```
    /// # use group_algebra::{Group, Integers, Subgroup};
    /// let three_z = Subgroup::new(&Integers, vec![Integers.value(6), Integers.value(9)]).unwrap();
    /// assert!(Integers.subgroup_member(&Integers.value(12), &three_z).unwrap());
    /// assert!(!Integers.subgroup_member(&Integers.value(5), &three_z).unwrap());
    /// ```
    fn subgroup_member(
        &self,
        element: &IntegersElement,
        subgroup: &Subgroup<Self>,
    ) -> Result<bool, GroupError> {
        ensure_same_group(self, element.group(), "Element")?;
        ensure_subgroup_of(self, subgroup)?;

        let d = gcd_all(subgroup.original_generators().iter().map(|g| &g.value));
        trace!("membership of {} in {}Z", element.value, d);

        Ok(is_multiple(&element.value, &d))
    }
}

impl Neg for IntegersElement {
    type Output = IntegersElement;

    fn neg(self) -> IntegersElement {
        self.inverse()
    }
}

impl Neg for &IntegersElement {
    type Output = IntegersElement;

    fn neg(self) -> IntegersElement {
        self.inverse()
    }
}

impl fmt::Debug for Integers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integers()")
    }
}

impl fmt::Debug for IntegersElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegersElement({}, {:?})", self.value, self.group)
    }
}

impl fmt::Display for IntegersElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::quickcheck;

    fn multiples_of(generators: &[i64]) -> Subgroup<Integers> {
        Subgroup::new(&Integers, generators.iter().map(|&g| Integers.value(g)).collect())
            .expect("generators belong to Integers")
    }

    #[test]
    fn test_identity() -> Result<(), GroupError> {
        let a = Integers.element(17)?;
        assert!(a.combine(&Integers.identity())?.equals(&a)?);
        assert!(Integers.identity().combine(&a)?.equals(&a)?);
        Ok(())
    }

    #[test]
    fn test_negation() -> Result<(), GroupError> {
        let a = Integers.element(5)?;
        assert_eq!(-&a, Integers.value(-5));
        assert!(a.combine(&-&a)?.equals(&Integers.identity())?);
        assert_eq!(-Integers.identity(), Integers.identity());
        Ok(())
    }

    #[test]
    fn test_unbounded_values() -> Result<(), GroupError> {
        let max = Integers.value(i64::MAX);
        let doubled = max.combine(&max)?;
        assert_eq!(doubled.value(), &(BigInt::from(i64::MAX) * 2));
        Ok(())
    }

    #[test]
    fn test_membership_by_gcd() -> Result<(), GroupError> {
        let three_z = multiples_of(&[6, 9]);
        assert!(Integers.subgroup_member(&Integers.value(12), &three_z)?);
        assert!(Integers.subgroup_member(&Integers.value(-3), &three_z)?);
        assert!(Integers.subgroup_member(&Integers.value(0), &three_z)?);
        assert!(!Integers.subgroup_member(&Integers.value(5), &three_z)?);
        Ok(())
    }

    #[test]
    fn test_membership_in_trivial_subgroup() -> Result<(), GroupError> {
        let trivial = multiples_of(&[0]);
        assert!(Integers.subgroup_member(&Integers.value(0), &trivial)?);
        assert!(!Integers.subgroup_member(&Integers.value(3), &trivial)?);

        let empty = multiples_of(&[]);
        assert!(Integers.subgroup_member(&Integers.value(0), &empty)?);
        assert!(!Integers.subgroup_member(&Integers.value(1), &empty)?);
        Ok(())
    }

    #[test]
    fn test_membership_with_negative_generators() -> Result<(), GroupError> {
        let four_z = multiples_of(&[-8, 12]);
        assert!(Integers.subgroup_member(&Integers.value(4), &four_z)?);
        assert!(!Integers.subgroup_member(&Integers.value(6), &four_z)?);
        Ok(())
    }

    #[test]
    fn test_every_subgroup_is_normal() -> Result<(), GroupError> {
        let cases: [&[i64]; 5] = [&[4], &[6, 9], &[0], &[-5, 0, 15], &[]];
        for generators in cases {
            assert!(Integers.subgroup_normal(&multiples_of(generators))?);
        }
        Ok(())
    }

    #[test]
    fn test_representation() {
        assert_eq!(format!("{:?}", Integers), "Integers()");
        assert_eq!(
            format!("{:?}", Integers.value(-5)),
            "IntegersElement(-5, Integers())"
        );
        assert_eq!(Integers.value(-5).to_string(), "-5");
    }

    quickcheck! {
        fn prop_combine_is_addition(a: i64, b: i64) -> bool {
            let sum = Integers.value(a).combine(&Integers.value(b));
            sum == Ok(Integers.value(BigInt::from(a) + BigInt::from(b)))
        }

        fn prop_negation_is_inverse(a: i64) -> bool {
            -Integers.value(a) == Integers.value(-BigInt::from(a))
                && Integers.value(a).combine(&Integers.identity()) == Ok(Integers.value(a))
        }

        fn prop_multiples_of_generators_are_members(generators: Vec<i32>, k: i32) -> bool {
            let generators: Vec<i64> = generators.into_iter().map(i64::from).collect();
            let subgroup = multiples_of(&generators);

            generators.iter().all(|&g| {
                let multiple = Integers.value(g * i64::from(k));
                Integers.subgroup_member(&multiple, &subgroup) == Ok(true)
            })
        }
    }
}
