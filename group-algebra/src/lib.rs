//! # Group Algebra
//!
//! Symbolic abstract groups: the additive group of integers, subgroups generated
//! from a parent group's elements, quotients by normal subgroups and the
//! [`homomorphism::Homomorphism`] contract.
//!
//! Membership and normality queries on nested subgroups are lifted parent by
//! parent until they reach a root group that answers them in closed form.

pub mod errors;
pub mod group;
pub mod homomorphism;
pub mod integers;
pub mod quotient;
pub mod subgroup;

pub use errors::GroupError;
pub use group::{Group, GroupElement};
pub use homomorphism::Homomorphism;
pub use integers::{Integers, IntegersElement};
pub use quotient::{Quotient, QuotientElement};
pub use subgroup::{Subgroup, SubgroupElement};
