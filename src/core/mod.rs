//! # Core Domain
//!
//! Pure arithmetic and process-wide state. No I/O, no dispatch.
//!
//! This module contains:
//! - `TypeKind` - names the two concrete types taking part in dispatch
//! - `series_sum`, `derive_sum`, `say` - the fixed numeric operations
//! - `StaticState` - the explicit container for the counter and derived sum
//!
//! All arithmetic wraps at 32 bits. Nothing here is checked or clamped.

pub mod array;
pub mod config;
pub mod error;

use std::cell::OnceCell;

use tracing::trace;

pub use error::{EvalError, EvalResult};

/// Number of terms in the fixed series folded into the derived sum
pub const SERIES_LEN: i32 = 5;

/// Seed the counter-owning type initializes its counter to by default
pub const DEFAULT_SEED: i32 = 100;

/// The concrete types that take part in dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// The base type (owns `incr` and `decr`)
    Base,
    /// The subclass (overrides `incr`, inherits `decr`)
    Derived,
}

impl TypeKind {
    /// Get the lowercase name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Base => "base",
            TypeKind::Derived => "derived",
        }
    }
}

/// Sum of `0..SERIES_LEN`
pub fn series_sum() -> i32 {
    derive_sum(0)
}

/// `seed + (0 + 1 + 2 + 3 + 4)`, wrapping at each step
pub fn derive_sum(seed: i32) -> i32 {
    let mut sum = seed;
    for i in 0..SERIES_LEN {
        sum = sum.wrapping_add(i);
    }
    sum
}

/// The reporting operation: `i + sum`
pub fn say(i: i32, sum: i32) -> i32 {
    i.wrapping_add(sum)
}

// ============================================================================
// STATIC STATE
// ============================================================================

/// Process-wide state for one evaluation
///
/// Holds the counter owned by the counter-owning type and the derived sum
/// owned by the evaluating type. Each is initialized at most once; the
/// counter reads as `0` until its owner is initialized.
///
/// Outside this crate the counter can be read but not bumped; only the
/// subclass `incr` override moves it.
///
/// ```compile_fail
/// let mut statics = clinit_eval::StaticState::new();
/// statics.bump_counter();
/// ```
#[derive(Debug, Default)]
pub struct StaticState {
    counter: i32,
    counter_initialized: bool,
    derived_sum: OnceCell<i32>,
}

impl StaticState {
    /// Fresh state: counter uninitialized (reads 0), no derived sum
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the counter owner's initializer
    ///
    /// Returns `true` if this call performed the initialization. Later
    /// calls leave the counter untouched and return `false`.
    pub fn init_counter(&mut self, seed: i32) -> bool {
        if self.counter_initialized {
            trace!("counter owner already initialized");
            return false;
        }
        trace!(seed, "initializing counter owner");
        self.counter = seed;
        self.counter_initialized = true;
        true
    }

    /// Current counter value (0 before initialization)
    pub fn counter(&self) -> i32 {
        self.counter
    }

    /// Check if the counter owner has been initialized
    pub fn counter_initialized(&self) -> bool {
        self.counter_initialized
    }

    /// Add one to the counter
    ///
    /// Only the subclass `incr` override calls this.
    pub(crate) fn bump_counter(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }

    /// Compute the derived sum, once
    ///
    /// The first call reads the counter as it stands and fixes the result.
    /// Every later call returns that same value.
    pub fn derive_sum(&self) -> i32 {
        *self.derived_sum.get_or_init(|| {
            let sum = derive_sum(self.counter);
            trace!(seed = self.counter, sum, "initializing derived sum");
            sum
        })
    }

    /// The derived sum, if the static phase has computed it
    pub fn derived_sum(&self) -> EvalResult<i32> {
        self.derived_sum.get().copied().ok_or(EvalError::SumNotComputed)
    }
}
