//! # Subgroup Module
//!
//! Provides [`Subgroup`], a group generated by elements of a parent group. Subgroups
//! nest: a `Subgroup<Subgroup<Integers>>` is generated by elements of a subgroup of ℤ.
//!
//! A subgroup only knows its generators, so membership and normality questions about
//! its own subgroups are rewritten as questions about subgroups of the parent and
//! handed upward until a root group answers them.

use std::fmt;
use std::ops::Neg;
use std::sync::Arc;

use itertools::Itertools;
use log::{debug, trace};

use crate::errors::GroupError;
use crate::group::{Group, GroupElement, ensure_same_group, ensure_subgroup_of};

/// A group generated by an ordered list of parent elements.
///
/// Cloning is cheap and yields the same group; two subgroups built separately from
/// identical generators are distinct groups whose elements never mix.
pub struct Subgroup<G: Group> {
    inner: Arc<SubgroupInner<G>>,
}

struct SubgroupInner<G: Group> {
    parent: G,
    original_generators: Vec<G::Element>,
}

/// An element of a [`Subgroup`], wrapping an element of the parent group.
pub struct SubgroupElement<G: Group> {
    group: Subgroup<G>,
    value: G::Element,
}

impl<G: Group> Subgroup<G> {
    /// Creates the subgroup of `parent` generated by `generators`.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if any generator is not an element of `parent`.
    pub fn new(parent: &G, generators: Vec<G::Element>) -> Result<Self, GroupError> {
        for generator in &generators {
            ensure_same_group(parent, generator.group(), "Generator")?;
        }

        debug!(
            "subgroup of {:?} generated by [{}]",
            parent,
            generators.iter().format(", ")
        );

        Ok(Subgroup {
            inner: Arc::new(SubgroupInner {
                parent: parent.clone(),
                original_generators: generators,
            }),
        })
    }

    pub fn parent(&self) -> &G {
        &self.inner.parent
    }

    /// The generators as elements of the parent group.
    pub fn original_generators(&self) -> &[G::Element] {
        &self.inner.original_generators
    }

    /// Views a parent element as an element of this subgroup.
    ///
    /// Only the owning group is checked, not membership.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `value` is not an element of the parent.
    pub fn wrap(&self, value: G::Element) -> Result<SubgroupElement<G>, GroupError> {
        ensure_same_group(self.parent(), value.group(), "Wrapped element")?;

        Ok(SubgroupElement {
            group: self.clone(),
            value,
        })
    }

    /// Whether a parent element lies in this subgroup.
    pub fn contains(&self, element: &G::Element) -> Result<bool, GroupError> {
        self.parent().subgroup_member(element, self)
    }

    fn wrap_unchecked(&self, value: G::Element) -> SubgroupElement<G> {
        SubgroupElement {
            group: self.clone(),
            value,
        }
    }
}

impl<G: Group> SubgroupElement<G> {
    /// The wrapped parent element.
    pub fn value(&self) -> &G::Element {
        &self.value
    }
}

impl<G: Group> GroupElement for SubgroupElement<G> {
    type Group = Subgroup<G>;

    fn group(&self) -> &Subgroup<G> {
        &self.group
    }

    fn inverse(&self) -> Self {
        self.group.wrap_unchecked(self.value.inverse())
    }

    fn combine(&self, other: &Self) -> Result<Self, GroupError> {
        ensure_same_group(&self.group, &other.group, "Operand")?;

        Ok(self.group.wrap_unchecked(self.value.combine(&other.value)?))
    }

    fn equals(&self, other: &Self) -> Result<bool, GroupError> {
        ensure_same_group(&self.group, &other.group, "Operand")?;

        self.value.equals(&other.value)
    }
}

impl<G: Group> Group for Subgroup<G> {
    type Element = SubgroupElement<G>;

    fn identity(&self) -> SubgroupElement<G> {
        self.wrap_unchecked(self.parent().identity())
    }

    /// Returns the `identifier`-th generator.
    ///
    /// Only generators are addressable, not words in them.
    fn element(&self, identifier: i64) -> Result<SubgroupElement<G>, GroupError> {
        let count = self.original_generators().len();

        usize::try_from(identifier)
            .ok()
            .and_then(|index| self.original_generators().get(index))
            .map(|generator| self.wrap_unchecked(generator.clone()))
            .ok_or(GroupError::GeneratorIndexOutOfRange {
                index: identifier,
                count,
            })
    }

    fn generators(&self) -> Option<Vec<SubgroupElement<G>>> {
        Some(
            self.original_generators()
                .iter()
                .map(|generator| self.wrap_unchecked(generator.clone()))
                .collect(),
        )
    }

    fn is_root(&self) -> bool {
        false
    }

    fn same_group(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Unions this subgroup's generators with those of `subgroup` and asks the parent
    /// whether the subgroup they generate is normal.
    fn subgroup_normal(&self, subgroup: &Subgroup<Self>) -> Result<bool, GroupError> {
        ensure_subgroup_of(self, subgroup)?;

        let generators = self
            .original_generators()
            .iter()
            .cloned()
            .chain(subgroup.original_generators().iter().map(|g| g.value.clone()))
            .collect();
        let lifted = Subgroup::new(self.parent(), generators)?;
        trace!("normality lifted to {:?}", lifted);

        self.parent().subgroup_normal(&lifted)
    }

    /// Rebuilds `subgroup` directly over the parent and asks the parent about the
    /// wrapped value.
    fn subgroup_member(
        &self,
        element: &SubgroupElement<G>,
        subgroup: &Subgroup<Self>,
    ) -> Result<bool, GroupError> {
        ensure_same_group(self, element.group(), "Element")?;
        ensure_subgroup_of(self, subgroup)?;

        let generators = subgroup
            .original_generators()
            .iter()
            .map(|g| g.value.clone())
            .collect();
        let lifted = Subgroup::new(self.parent(), generators)?;
        trace!("membership of {} lifted to {:?}", element, lifted);

        self.parent().subgroup_member(&element.value, &lifted)
    }
}

impl<G: Group> Clone for Subgroup<G> {
    fn clone(&self) -> Self {
        Subgroup {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Group> Clone for SubgroupElement<G> {
    fn clone(&self) -> Self {
        SubgroupElement {
            group: self.group.clone(),
            value: self.value.clone(),
        }
    }
}

impl<G: Group> Neg for SubgroupElement<G> {
    type Output = SubgroupElement<G>;

    fn neg(self) -> SubgroupElement<G> {
        self.inverse()
    }
}

impl<G: Group> Neg for &SubgroupElement<G> {
    type Output = SubgroupElement<G>;

    fn neg(self) -> SubgroupElement<G> {
        self.inverse()
    }
}

impl<G: Group> fmt::Debug for Subgroup<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subgroup({:?}, [{:?}])",
            self.parent(),
            self.original_generators().iter().format(", ")
        )
    }
}

impl<G: Group> fmt::Debug for SubgroupElement<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubgroupElement({:?}, {:?})", self.value, self.group)
    }
}

impl<G: Group> fmt::Display for SubgroupElement<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
