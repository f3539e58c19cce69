//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep input/result/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — input record, computed results, report/output structs.
//! - `constants.rs` — stable constants (state list, tips, form defaults).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration
//! contracts. Keep schema-impacting changes synchronized with
//! `docs/contracts/*`.

pub mod constants;
pub mod models;
