//! # Derived Type
//!
//! The subclass. It embeds a `BaseInstance` as its superclass part,
//! overrides `incr` according to `OverrideMode`, and inherits `decr`
//! unchanged by forwarding to the base implementation.

use crate::core::config::OverrideMode;
use crate::core::{self, StaticState, TypeKind};
use crate::ports::{Accumulate, Decrementable};

use super::base::BaseInstance;

/// An instance of the subclass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedInstance {
    /// Superclass part, holding the accumulator
    base: BaseInstance,

    mode: OverrideMode,
}

impl DerivedInstance {
    /// Create a subclass instance with the given `incr` override
    pub fn new(mode: OverrideMode) -> Self {
        Self {
            base: BaseInstance::new(),
            mode,
        }
    }

    /// Get the `incr` override mode
    pub fn mode(&self) -> OverrideMode {
        self.mode
    }

    /// The overriding `incr`
    ///
    /// `NoOp` does nothing at all. `ChainThrough` runs the base `incr` and
    /// then adds one to the counter in `statics`.
    pub fn incr(&mut self, statics: &mut StaticState) {
        match self.mode {
            OverrideMode::NoOp => {}
            OverrideMode::ChainThrough => {
                self.base.incr();
                statics.bump_counter();
            }
        }
    }

    /// The reporting capability: `i + sum`
    pub fn say(i: i32, sum: i32) -> i32 {
        core::say(i, sum)
    }
}

impl Accumulate for DerivedInstance {
    fn type_kind(&self) -> TypeKind {
        TypeKind::Derived
    }

    fn accumulator(&self) -> i32 {
        self.base.accumulator()
    }
}

// Not overridden: the base implementation runs.
impl Decrementable for DerivedInstance {
    fn decr(&mut self) -> TypeKind {
        self.base.decr()
    }
}
