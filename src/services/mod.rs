//! Service layer containing the drift checks and side-effect helpers.
//!
//! ## Service map
//! - `layout.rs` — repo layout defaults + `docdrift.toml` overlay.
//! - `collectors.rs` — controller/policy/command identifier extraction.
//! - `documents.rs` — documentation text loading.
//! - `matcher.rs` — whole-word coverage matching.
//! - `gate.rs` — ordered, fail-fast category evaluation.
//! - `output.rs` — JSON/text output helpers.
//! - `logging.rs` — tracing subscriber setup.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod collectors;
pub mod documents;
pub mod gate;
pub mod layout;
pub mod logging;
pub mod matcher;
pub mod output;
