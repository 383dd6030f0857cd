//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - Static state is initialized in an explicit order
//! - Adapters are driven through the ports

mod evaluator;

pub use evaluator::{Evaluator, Phase, Report, ARRAY_LEN, ARRAY_MAGIC, GREETING};
