//! Service layer containing the calculation logic and pure helpers.
//!
//! ## Service map
//! - `calculator.rs` — the derived-value computation and affordability
//!   classification.
//! - `form.rs` — raw input coercion and state-name resolution.
//! - `format.rs` — currency/percentage rendering and the breakdown table.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod calculator;
pub mod form;
pub mod format;
pub mod output;
