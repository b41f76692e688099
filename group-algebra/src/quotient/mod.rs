//! # Quotient Module
//!
//! Provides [`Quotient`], the group of cosets of a normal subgroup. Cosets are carried
//! by a representative from the dividend, and arithmetic works on representatives.

use std::fmt;
use std::ops::Neg;
use std::sync::Arc;

use log::{debug, trace};

use crate::errors::GroupError;
use crate::group::{Group, GroupElement, ensure_same_group, ensure_subgroup_of};
use crate::subgroup::Subgroup;

/// The quotient `dividend / divisor`.
///
/// A quotient is a root group: it has no parent, and subgroups of it are answered by
/// lifting them into the dividend.
pub struct Quotient<G: Group> {
    inner: Arc<QuotientInner<G>>,
}

struct QuotientInner<G: Group> {
    dividend: G,
    divisor: Subgroup<G>,
}

/// A coset, identified by one of its representatives.
pub struct QuotientElement<G: Group> {
    group: Quotient<G>,
    value: G::Element,
}

impl<G: Group> Quotient<G> {
    /// Forms `dividend / divisor`.
    ///
    /// Normality is checked here, once.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `divisor` is not a subgroup of `dividend`.
    /// Returns `GroupError::NormalityViolation` if `divisor` is not normal in `dividend`.
    ///
    /// # Example
    ///
    /// ```
    /// # use group_algebra::{Group, GroupElement, Integers, Quotient, Subgroup};
    /// let four_z = Subgroup::new(&Integers, vec![Integers.value(4)]).unwrap();
    /// let z4 = Quotient::new(&Integers, &four_z).unwrap();
    /// assert!(z4.element(1).unwrap().equals(&z4.element(5).unwrap()).unwrap());
    /// assert!(!z4.element(1).unwrap().equals(&z4.element(2).unwrap()).unwrap());
    /// ```
    pub fn new(dividend: &G, divisor: &Subgroup<G>) -> Result<Self, GroupError> {
        ensure_subgroup_of(dividend, divisor)?;

        if !dividend.subgroup_normal(divisor)? {
            return Err(GroupError::NormalityViolation(format!(
                "{:?} is not normal in {:?}",
                divisor, dividend
            )));
        }

        debug!("quotient of {:?} by {:?}", dividend, divisor);

        Ok(Quotient {
            inner: Arc::new(QuotientInner {
                dividend: dividend.clone(),
                divisor: divisor.clone(),
            }),
        })
    }

    pub fn dividend(&self) -> &G {
        &self.inner.dividend
    }

    pub fn divisor(&self) -> &Subgroup<G> {
        &self.inner.divisor
    }

    /// The coset of `representative`.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `representative` is not an element of the
    /// dividend.
    pub fn coset(&self, representative: G::Element) -> Result<QuotientElement<G>, GroupError> {
        ensure_same_group(self.dividend(), representative.group(), "Representative")?;

        Ok(self.wrap_unchecked(representative))
    }

    fn wrap_unchecked(&self, value: G::Element) -> QuotientElement<G> {
        QuotientElement {
            group: self.clone(),
            value,
        }
    }

    /// Preimage in the dividend of the subgroup generated by the given cosets.
    fn lift(&self, subgroup: &Subgroup<Self>) -> Result<Subgroup<G>, GroupError> {
        let generators = subgroup
            .original_generators()
            .iter()
            .map(|coset| coset.value.clone())
            .chain(self.divisor().original_generators().iter().cloned())
            .collect();

        Subgroup::new(self.dividend(), generators)
    }
}

impl<G: Group> QuotientElement<G> {
    /// The representative chosen for this coset.
    pub fn value(&self) -> &G::Element {
        &self.value
    }
}

impl<G: Group> GroupElement for QuotientElement<G> {
    type Group = Quotient<G>;

    fn group(&self) -> &Quotient<G> {
        &self.group
    }

    fn inverse(&self) -> Self {
        self.group.wrap_unchecked(self.value.inverse())
    }

    fn combine(&self, other: &Self) -> Result<Self, GroupError> {
        ensure_same_group(&self.group, &other.group, "Operand")?;

        Ok(self.group.wrap_unchecked(self.value.combine(&other.value)?))
    }

    /// `aN == bN` iff `a * b⁻¹` lies in `N`.
    fn equals(&self, other: &Self) -> Result<bool, GroupError> {
        ensure_same_group(&self.group, &other.group, "Operand")?;

        let difference = self.combine(&other.inverse())?;
        self.group
            .dividend()
            .subgroup_member(&difference.value, self.group.divisor())
    }
}

impl<G: Group> Group for Quotient<G> {
    type Element = QuotientElement<G>;

    fn identity(&self) -> QuotientElement<G> {
        self.wrap_unchecked(self.dividend().identity())
    }

    fn element(&self, identifier: i64) -> Result<QuotientElement<G>, GroupError> {
        Ok(self.wrap_unchecked(self.dividend().element(identifier)?))
    }

    fn same_group(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// `K/N` is normal in `G/N` iff `K` is normal in `G`.
    fn subgroup_normal(&self, subgroup: &Subgroup<Self>) -> Result<bool, GroupError> {
        ensure_subgroup_of(self, subgroup)?;

        let lifted = self.lift(subgroup)?;
        trace!("normality lifted to {:?}", lifted);

        self.dividend().subgroup_normal(&lifted)
    }

    /// `xN` lies in `K/N` iff `x` lies in `K`.
    fn subgroup_member(
        &self,
        element: &QuotientElement<G>,
        subgroup: &Subgroup<Self>,
    ) -> Result<bool, GroupError> {
        ensure_same_group(self, element.group(), "Element")?;
        ensure_subgroup_of(self, subgroup)?;

        let lifted = self.lift(subgroup)?;
        trace!("membership of {} lifted to {:?}", element, lifted);

        self.dividend().subgroup_member(&element.value, &lifted)
    }
}

impl<G: Group> Clone for Quotient<G> {
    fn clone(&self) -> Self {
        Quotient {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Group> Clone for QuotientElement<G> {
    fn clone(&self) -> Self {
        QuotientElement {
            group: self.group.clone(),
            value: self.value.clone(),
        }
    }
}

impl<G: Group> Neg for QuotientElement<G> {
    type Output = QuotientElement<G>;

    fn neg(self) -> QuotientElement<G> {
        self.inverse()
    }
}

impl<G: Group> Neg for &QuotientElement<G> {
    type Output = QuotientElement<G>;

    fn neg(self) -> QuotientElement<G> {
        self.inverse()
    }
}

impl<G: Group> fmt::Debug for Quotient<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quotient({:?}, {:?})", self.dividend(), self.divisor())
    }
}

impl<G: Group> fmt::Debug for QuotientElement<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuotientElement({:?}, {:?})", self.value, self.group)
    }
}

impl<G: Group> fmt::Display for QuotientElement<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
