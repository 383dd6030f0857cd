//! # Evaluator Configuration
//!
//! Selects between the two program variants and the initialization order.
//! `EvalConfig::default()` is the `Sum` program: seed 100, a no-op `incr`
//! override, counter initialized before the derived sum.

use super::DEFAULT_SEED;

/// What the subclass `incr` override does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideMode {
    /// The override has an empty body; the base `incr` never runs
    #[default]
    NoOp,
    /// Call the base `incr`, then add one to the counter
    ChainThrough,
}

/// Which type finishes initialization first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitOrder {
    /// Seed the counter, then compute the derived sum from it
    #[default]
    CounterFirst,
    /// Compute the derived sum while the counter still reads 0
    SumFirst,
}

/// Which of the two demonstration programs to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Program {
    /// `incr` on the base instance, `decr` through the capability, `say`
    #[default]
    Sum,
    /// As `Sum`, plus a direct `decr` on the base instance and the array phase
    HelloWorld,
}

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Value the counter owner initializes its counter to
    pub counter_seed: i32,

    /// Behavior of the subclass `incr` override
    pub override_mode: OverrideMode,

    /// Order of the two type initializers
    pub init_order: InitOrder,

    /// Subclass `incr` calls made between counter init and the derived sum
    ///
    /// Skipped with a warning under `InitOrder::SumFirst`, where the sum is
    /// fixed before any instance exists.
    pub warmup_increments: u32,

    /// First argument to `say`
    pub input: i32,

    pub program: Program,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            counter_seed: DEFAULT_SEED,
            override_mode: OverrideMode::NoOp,
            init_order: InitOrder::CounterFirst,
            warmup_increments: 0,
            input: 1,
            program: Program::Sum,
        }
    }
}

impl EvalConfig {
    /// The `Sum` program: no-op override
    pub fn sum() -> Self {
        Self::default()
    }

    /// The `HelloWorld` program: chaining override, direct `decr`, arrays
    pub fn hello_world() -> Self {
        Self {
            override_mode: OverrideMode::ChainThrough,
            program: Program::HelloWorld,
            ..Self::default()
        }
    }

    /// Set the counter seed
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.counter_seed = seed;
        self
    }

    /// Set the subclass `incr` behavior
    pub fn with_override_mode(mut self, mode: OverrideMode) -> Self {
        self.override_mode = mode;
        self
    }

    /// Set the type initialization order
    pub fn with_init_order(mut self, order: InitOrder) -> Self {
        self.init_order = order;
        self
    }

    /// Set the number of warmup increments
    pub fn with_warmup_increments(mut self, count: u32) -> Self {
        self.warmup_increments = count;
        self
    }

    /// Set the first argument to `say`
    pub fn with_input(mut self, input: i32) -> Self {
        self.input = input;
        self
    }

    /// Set the program variant
    pub fn with_program(mut self, program: Program) -> Self {
        self.program = program;
        self
    }
}
