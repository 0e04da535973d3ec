//! Per-invocation state types.

mod invocation;

pub use invocation::{Invocation, Mode};
