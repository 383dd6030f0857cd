//! # Base Type
//!
//! The base implementation of `incr` and `decr`. Neither touches the
//! counter: `incr` does not even receive the static state.

use crate::core::TypeKind;
use crate::ports::{Accumulate, Decrementable};

/// An instance of the base type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseInstance {
    /// Private accumulator, starts at 0
    accumulator: i32,
}

impl BaseInstance {
    /// Create a base instance with a zero accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to this instance's accumulator
    pub fn incr(&mut self) {
        self.accumulator = self.accumulator.wrapping_add(1);
    }
}

impl Accumulate for BaseInstance {
    fn type_kind(&self) -> TypeKind {
        TypeKind::Base
    }

    fn accumulator(&self) -> i32 {
        self.accumulator
    }
}

impl Decrementable for BaseInstance {
    fn decr(&mut self) -> TypeKind {
        self.accumulator = self.accumulator.wrapping_sub(1);
        TypeKind::Base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_incr_decr() {
        let mut base = BaseInstance::new();
        assert_eq!(base.accumulator(), 0);

        base.incr();
        assert_eq!(base.accumulator(), 1);

        assert_eq!(base.decr(), TypeKind::Base);
        assert_eq!(base.accumulator(), 0);
    }

    #[test]
    fn test_base_decr_below_zero() {
        let mut base = BaseInstance::new();
        base.decr();
        base.decr();
        assert_eq!(base.accumulator(), -2);
        assert_eq!(base.type_kind(), TypeKind::Base);
    }
}
