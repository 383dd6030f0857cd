//! # Ports
//!
//! Trait contracts for the instances taking part in dispatch.
//!
//! - `Accumulate` - every instance owns a private accumulator
//! - `Decrementable` - the single-method capability callers bind to
//!
//! `incr` is deliberately not part of either trait: the base version takes
//! no static state and the subclass version does, so the two signatures
//! already encode which one may touch the counter.

use crate::core::TypeKind;

/// An instance with a private accumulator
pub trait Accumulate {
    /// The runtime type of this instance
    fn type_kind(&self) -> TypeKind;

    /// Current accumulator value
    fn accumulator(&self) -> i32;
}

/// The abstract capability: one operation, `decr`
///
/// Callers hold `Box<dyn Decrementable>` (or `&mut dyn Decrementable`) and
/// invoke through it, so the implementation is picked from the runtime type.
pub trait Decrementable: Accumulate {
    /// Subtract one from the accumulator
    ///
    /// Returns the type whose implementation ran. A subclass that does not
    /// override `decr` reports `TypeKind::Base`.
    fn decr(&mut self) -> TypeKind;
}
