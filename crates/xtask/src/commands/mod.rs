//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod audit;
mod inspect;

pub use audit::Audit;
pub use inspect::Inspect;
