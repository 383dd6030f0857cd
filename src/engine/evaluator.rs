//! # Evaluator
//!
//! Runs the linear phase sequence over one `StaticState`:
//!
//! 1. Static phase - initialize the counter owner and the derived sum, in
//!    the configured order
//! 2. Instance phase - `incr` on a base instance
//! 3. Polymorphic phase - `decr` on a subclass instance through
//!    `Box<dyn Decrementable>`
//! 4. Reporting phase - `say(input, sum)`
//! 5. Array phase (`HelloWorld` only), after `say` as in the program text
//!
//! The static phase runs at most once per evaluator. Running again reuses
//! the counter and derived sum already in place.

use tracing::{debug, trace, warn};

use crate::adapters::{BaseInstance, DerivedInstance};
use crate::core::array::{IntArray, RefArray};
use crate::core::config::{EvalConfig, InitOrder, Program};
use crate::core::{EvalResult, StaticState, TypeKind};
use crate::ports::{Accumulate, Decrementable};

/// Length of each array allocated in the array phase
pub const ARRAY_LEN: usize = 10;

/// Bit pattern stored into the first `int` slot
pub const ARRAY_MAGIC: u32 = 0xcafebabe;

/// String literal bound in the array phase
pub const GREETING: &str = "Hello, World.";

/// One step of an evaluation, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The counter owner ran its initializer with this seed
    CounterInitialized { seed: i32 },
    /// A subclass `incr` ran before the derived sum was fixed
    WarmupIncrement { counter: i32 },
    /// Warmups requested under `SumFirst`, not run
    WarmupSkipped { count: u32 },
    /// The derived sum was computed from `seed`
    SumDerived { seed: i32, sum: i32 },
    /// `incr` on the base instance
    BaseIncremented,
    /// `decr` called directly on the base instance
    BaseDecremented,
    /// `decr` through the capability handle
    Dispatched { runtime: TypeKind, resolved: TypeKind },
    /// `0xcafebabe` stored and read back
    ArraysTouched { readback: i32 },
    /// `say` returned `result`
    Reported { result: i32 },
}

/// Everything observable about one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Return value of `say`
    pub result: i32,
    pub derived_sum: i32,
    /// Counter after the run
    pub counter: i32,
    pub base_accumulator: i32,
    pub derived_accumulator: i32,
    /// `int[0]` after storing `0xcafebabe` (`HelloWorld` only)
    pub array_readback: Option<i32>,
    pub phases: Vec<Phase>,
}

/// The counter-and-dispatch evaluator
pub struct Evaluator {
    config: EvalConfig,
    statics: StaticState,
    static_phase_done: bool,
}

impl Evaluator {
    /// Create an evaluator with fresh, uninitialized static state
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            statics: StaticState::new(),
            static_phase_done: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Get the static state
    pub fn statics(&self) -> &StaticState {
        &self.statics
    }

    /// Run all phases and return the reported value
    pub fn run(&mut self) -> EvalResult<i32> {
        Ok(self.run_report()?.result)
    }

    /// Run all phases and return the full report
    pub fn run_report(&mut self) -> EvalResult<Report> {
        let mut phases = Vec::new();

        // ====================================================================
        // STATIC PHASE
        // ====================================================================
        if !self.static_phase_done {
            self.static_phase(&mut phases);
            self.static_phase_done = true;
        } else {
            trace!("static phase already ran");
        }
        let sum = self.statics.derived_sum()?;

        // ====================================================================
        // INSTANCE PHASE
        // ====================================================================
        let mut base = BaseInstance::new();
        base.incr();
        phases.push(Phase::BaseIncremented);
        if self.config.program == Program::HelloWorld {
            base.decr();
            phases.push(Phase::BaseDecremented);
        }

        // ====================================================================
        // POLYMORPHIC PHASE
        // ====================================================================
        let mut handle: Box<dyn Decrementable> =
            Box::new(DerivedInstance::new(self.config.override_mode));
        let resolved = handle.decr();
        debug!(
            runtime = handle.type_kind().as_str(),
            resolved = resolved.as_str(),
            "dispatched decr"
        );
        phases.push(Phase::Dispatched {
            runtime: handle.type_kind(),
            resolved,
        });

        // ====================================================================
        // REPORTING PHASE
        // ====================================================================
        let result = DerivedInstance::say(self.config.input, sum);
        debug!(input = self.config.input, sum, result, "reported");
        phases.push(Phase::Reported { result });

        // ====================================================================
        // ARRAY PHASE
        // ====================================================================
        let array_readback = match self.config.program {
            Program::HelloWorld => {
                let readback = touch_arrays()?;
                phases.push(Phase::ArraysTouched { readback });
                Some(readback)
            }
            Program::Sum => None,
        };

        Ok(Report {
            result,
            derived_sum: sum,
            counter: self.statics.counter(),
            base_accumulator: base.accumulator(),
            derived_accumulator: handle.accumulator(),
            array_readback,
            phases,
        })
    }

    fn static_phase(&mut self, phases: &mut Vec<Phase>) {
        debug!(order = ?self.config.init_order, "static phase");
        match self.config.init_order {
            InitOrder::CounterFirst => {
                self.init_counter(phases);
                self.warmup(phases);
                self.init_sum(phases);
            }
            InitOrder::SumFirst => {
                self.init_sum(phases);
                self.init_counter(phases);
                let count = self.config.warmup_increments;
                if count > 0 {
                    warn!(
                        count,
                        "warmup increments skipped: derived sum fixed before any instance exists"
                    );
                    phases.push(Phase::WarmupSkipped { count });
                }
            }
        }
    }

    fn init_counter(&mut self, phases: &mut Vec<Phase>) {
        let seed = self.config.counter_seed;
        if self.statics.init_counter(seed) {
            phases.push(Phase::CounterInitialized { seed });
        }
    }

    fn warmup(&mut self, phases: &mut Vec<Phase>) {
        if self.config.warmup_increments == 0 {
            return;
        }
        let mut derived = DerivedInstance::new(self.config.override_mode);
        for _ in 0..self.config.warmup_increments {
            derived.incr(&mut self.statics);
            phases.push(Phase::WarmupIncrement {
                counter: self.statics.counter(),
            });
        }
        trace!(
            count = self.config.warmup_increments,
            counter = self.statics.counter(),
            "warmup increments done"
        );
    }

    fn init_sum(&mut self, phases: &mut Vec<Phase>) {
        let seed = self.statics.counter();
        let sum = self.statics.derive_sum();
        phases.push(Phase::SumDerived { seed, sum });
    }
}

/// `int[10]`, `int[10][]`, `String[10]`, then `int[0] = 0xcafebabe`
fn touch_arrays() -> EvalResult<i32> {
    let mut ints = IntArray::new(ARRAY_LEN);
    let rows: RefArray<IntArray> = RefArray::new(ARRAY_LEN);
    let strings: RefArray<String> = RefArray::new(ARRAY_LEN);

    ints.store_bits(0, ARRAY_MAGIC)?;
    let tmp = ints.load(0)?;
    let greeting = GREETING;

    trace!(
        tmp,
        rows = rows.len(),
        strings = strings.len(),
        greeting,
        "arrays touched"
    );
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OverrideMode;

    #[test]
    fn test_end_to_end_default() {
        let mut evaluator = Evaluator::new(EvalConfig::default());
        assert_eq!(evaluator.run().unwrap(), 111);
    }

    #[test]
    fn test_report_default() {
        let mut evaluator = Evaluator::new(EvalConfig::sum());
        let report = evaluator.run_report().unwrap();

        assert_eq!(report.result, 111);
        assert_eq!(report.derived_sum, 110);
        assert_eq!(report.counter, 100);
        assert_eq!(report.base_accumulator, 1);
        assert_eq!(report.derived_accumulator, -1);
        assert_eq!(report.array_readback, None);
    }

    #[test]
    fn test_phase_order() {
        let mut evaluator = Evaluator::new(EvalConfig::sum());
        let report = evaluator.run_report().unwrap();

        assert_eq!(
            report.phases,
            vec![
                Phase::CounterInitialized { seed: 100 },
                Phase::SumDerived { seed: 100, sum: 110 },
                Phase::BaseIncremented,
                Phase::Dispatched {
                    runtime: TypeKind::Derived,
                    resolved: TypeKind::Base,
                },
                Phase::Reported { result: 111 },
            ]
        );
    }

    #[test]
    fn test_chain_through_warmup_feeds_sum() {
        let config = EvalConfig::sum()
            .with_override_mode(OverrideMode::ChainThrough)
            .with_warmup_increments(1);
        let mut evaluator = Evaluator::new(config);
        let report = evaluator.run_report().unwrap();

        assert_eq!(report.derived_sum, 111);
        assert_eq!(report.counter, 101);
        assert_eq!(report.result, 112);
    }

    #[test]
    fn test_noop_warmup_does_not_feed_sum() {
        let config = EvalConfig::sum().with_warmup_increments(3);
        let mut evaluator = Evaluator::new(config);
        let report = evaluator.run_report().unwrap();

        assert_eq!(report.derived_sum, 110);
        assert_eq!(report.counter, 100);
        assert_eq!(report.result, 111);
    }

    #[test]
    fn test_sum_first_reads_default_counter() {
        let config = EvalConfig::sum().with_init_order(InitOrder::SumFirst);
        let mut evaluator = Evaluator::new(config);
        let report = evaluator.run_report().unwrap();

        assert_eq!(report.derived_sum, 10);
        assert_eq!(report.counter, 100);
        assert_eq!(report.result, 11);
        assert_eq!(report.phases[0], Phase::SumDerived { seed: 0, sum: 10 });
        assert_eq!(report.phases[1], Phase::CounterInitialized { seed: 100 });
    }

    #[test]
    fn test_hello_world_program() {
        let mut evaluator = Evaluator::new(EvalConfig::hello_world());
        let report = evaluator.run_report().unwrap();

        assert_eq!(report.result, 111);
        assert_eq!(report.base_accumulator, 0);
        assert_eq!(report.derived_accumulator, -1);
        assert_eq!(report.array_readback, Some(-889275714));
        assert!(report.phases.contains(&Phase::BaseDecremented));
    }

    #[test]
    fn test_hello_world_arrays_after_report() {
        let mut evaluator = Evaluator::new(EvalConfig::hello_world());
        let report = evaluator.run_report().unwrap();

        let tail = &report.phases[report.phases.len() - 2..];
        assert_eq!(
            tail,
            &[
                Phase::Reported { result: 111 },
                Phase::ArraysTouched {
                    readback: -889275714
                },
            ]
        );
    }

    #[test]
    fn test_sum_first_records_skipped_warmups() {
        let config = EvalConfig::sum()
            .with_override_mode(OverrideMode::ChainThrough)
            .with_init_order(InitOrder::SumFirst)
            .with_warmup_increments(3);
        let mut evaluator = Evaluator::new(config);
        let report = evaluator.run_report().unwrap();

        assert_eq!(report.result, 11);
        assert_eq!(report.counter, 100);
        assert!(report.phases.contains(&Phase::WarmupSkipped { count: 3 }));
        assert!(!report
            .phases
            .iter()
            .any(|p| matches!(p, Phase::WarmupIncrement { .. })));
    }

    #[test]
    fn test_sum_first_without_warmups_skips_nothing() {
        let config = EvalConfig::sum().with_init_order(InitOrder::SumFirst);
        let mut evaluator = Evaluator::new(config);
        let report = evaluator.run_report().unwrap();

        assert!(!report
            .phases
            .iter()
            .any(|p| matches!(p, Phase::WarmupSkipped { .. })));
    }

    #[test]
    fn test_static_phase_runs_once() {
        let config = EvalConfig::sum()
            .with_override_mode(OverrideMode::ChainThrough)
            .with_warmup_increments(2);
        let mut evaluator = Evaluator::new(config);

        let first = evaluator.run_report().unwrap();
        let second = evaluator.run_report().unwrap();

        assert_eq!(first.derived_sum, 112);
        assert_eq!(second.derived_sum, 112);
        assert_eq!(second.counter, 102);
        assert!(!second
            .phases
            .iter()
            .any(|p| matches!(p, Phase::CounterInitialized { .. } | Phase::SumDerived { .. })));
    }

    #[test]
    fn test_accumulators_isolated_from_counter() {
        let config = EvalConfig::hello_world().with_seed(0);
        let mut evaluator = Evaluator::new(config);
        let report = evaluator.run_report().unwrap();

        // base incr/decr and the dispatched decr leave the counter alone
        assert_eq!(report.counter, 0);
        assert_eq!(evaluator.statics().counter(), 0);
        assert_eq!(report.derived_sum, 10);
    }

    #[test]
    fn test_custom_input() {
        let config = EvalConfig::sum().with_seed(-10).with_input(5);
        let mut evaluator = Evaluator::new(config);
        assert_eq!(evaluator.run().unwrap(), 5);
    }
}
