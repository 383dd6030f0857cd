//! # Adapters
//!
//! Concrete implementations of the port traits:
//! - `BaseInstance` - the base type
//! - `DerivedInstance` - the subclass overriding `incr`
//!
//! Callers that only need `decr` should hold them as `dyn Decrementable`.

mod base;
mod derived;

pub use base::BaseInstance;
pub use derived::DerivedInstance;
