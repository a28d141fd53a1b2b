//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — layout, identifier sets, categories, report/output structs.
//! - `constants.rs` — default repo paths, naming conventions, pinned commands.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs back the `--json` output. Keep schema-impacting changes
//! synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
