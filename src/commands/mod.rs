//! Command handler layer.
//!
//! Parse/match CLI inputs here and delegate the work to `services/*`.
//! Handlers return the process exit code; coverage gaps are a normal
//! outcome, unreadable inputs are errors.

pub mod runtime;

pub use runtime::handle_runtime_commands;
