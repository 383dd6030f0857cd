//! # clinit-eval - Counter-and-Dispatch Evaluator
//!
//! Reproduces a small piece of object-model behavior with the ordering made
//! explicit:
//!
//! - a process-wide **counter** owned by one type, seeded once
//! - a **derived sum** owned by another type, computed exactly once as
//!   `counter + (0 + 1 + 2 + 3 + 4)` from whatever the counter holds then
//! - per-instance **accumulators** bumped by `incr` and `decr`
//! - a single-method capability, `decr`, invoked through a trait object so
//!   the runtime type picks the implementation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       clinit-eval                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure arithmetic, no dispatch)                        │
//! │    StaticState, derive_sum, say, arrays, config             │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Accumulate, Decrementable                                │
//! │                                                              │
//! │  ADAPTERS (concrete types)                                   │
//! │    BaseInstance, DerivedInstance                            │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Evaluator - the phase sequence                           │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use clinit_eval::{EvalConfig, Evaluator};
//!
//! let mut evaluator = Evaluator::new(EvalConfig::default());
//! assert_eq!(evaluator.run().unwrap(), 111);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - arithmetic, static state, configuration
pub mod core;

/// Port definitions - trait contracts for instances
pub mod ports;

/// Adapter implementations - the base type and the subclass
pub mod adapters;

/// Engine - orchestration layer
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{derive_sum, say, series_sum, StaticState, TypeKind};
pub use crate::core::array::{IntArray, RefArray};
pub use crate::core::config::{EvalConfig, InitOrder, OverrideMode, Program};
pub use crate::core::error::{EvalError, EvalResult};

// Port traits
pub use crate::ports::{Accumulate, Decrementable};

// Adapters
pub use crate::adapters::{BaseInstance, DerivedInstance};

// Engine
pub use crate::engine::{Evaluator, Phase, Report};
