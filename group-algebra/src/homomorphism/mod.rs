//! # Homomorphism Module
//!
//! Declares the [`Homomorphism`] contract. No implementation ships with this crate.

use crate::errors::GroupError;
use crate::group::Group;
use crate::subgroup::Subgroup;

/// Element type of a group, shortened for signatures below.
pub type ElementOf<G> = <G as Group>::Element;

/// A structure-preserving map between two groups.
///
/// Implementations must satisfy `eval(a * b) == eval(a) * eval(b)` for all `a`, `b`
/// in the domain.
pub trait Homomorphism {
    type Domain: Group;
    type Codomain: Group;

    fn domain(&self) -> &Self::Domain;

    fn codomain(&self) -> &Self::Codomain;

    /// The identity of the codomain, the image of the domain identity.
    fn identity(&self) -> ElementOf<Self::Codomain> {
        self.codomain().identity()
    }

    /// Maps a domain element into the codomain.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::TypeConflict` if `element` is not an element of the domain.
    fn eval(
        &self,
        element: &ElementOf<Self::Domain>,
    ) -> Result<ElementOf<Self::Codomain>, GroupError>;

    /// The subgroup of domain elements mapped to the codomain identity.
    fn kernel(&self) -> Result<Subgroup<Self::Domain>, GroupError>;

    /// The subgroup of codomain elements reached from the domain.
    fn image(&self) -> Result<Subgroup<Self::Codomain>, GroupError>;
}
