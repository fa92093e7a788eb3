//! Trait of bounding volumes.

use crate::math::{Point, Real};

/// A volume enclosing some geometry, used to cull queries coarsely before exact tests.
///
/// The tree nodes combine their children volumes through [`BoundingVolume::merged`], so the
/// volume of an inner node always encloses everything below it.
pub trait BoundingVolume {
    /// A point inside of this volume, usually its center.
    fn center(&self) -> Point<Real>;

    /// Is `other` fully enclosed by this volume?
    fn contains(&self, other: &Self) -> bool;

    /// Grows this volume so that it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// Grows this volume by `amount` in every direction.
    fn loosen(&mut self, amount: Real);

    /// A copy of this volume grown by `amount` in every direction.
    fn loosened(&self, amount: Real) -> Self;
}
