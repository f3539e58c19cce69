//! JSON/text output helpers. JSON mode wraps every payload in the
//! `{ "ok": true, "data": ... }` envelope documented in `docs/contracts/`.

use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print a list payload: one text row per item, or the whole slice as
/// the JSON `data`.
pub fn emit_list<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Print a single report payload. Text mode renders the lines produced
/// by `lines`, one per row.
pub fn emit_report<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{line}");
        }
    }
    Ok(())
}
