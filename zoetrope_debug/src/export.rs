// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON timeline export.
//!
//! [`export`] writes recorded rotation events as a JSON array, one object
//! per event, for inspection with `jq` or a notebook.

use std::io::{self, Write};

use serde_json::{Value, json};

use zoetrope_core::trace::NavRejection;

use crate::recorder::TraceRecord;

/// Exports recorded events as a JSON array.
///
/// Objects carry an `"event"` discriminant plus the event's own fields, in
/// recording order.
pub fn export(records: &[TraceRecord], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = records.iter().map(to_json).collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn to_json(record: &TraceRecord) -> Value {
    match record {
        TraceRecord::PhaseChange { from, to } => json!({
            "event": "phase_change",
            "from": format!("{from:?}"),
            "to": format!("{to:?}"),
        }),
        TraceRecord::Navigate {
            from,
            to,
            slide_count,
        } => json!({
            "event": "navigate",
            "from": from,
            "to": to,
            "slides": slide_count,
        }),
        TraceRecord::Rejected(NavRejection::EmptySlideSet) => json!({
            "event": "rejected",
            "reason": "empty_slide_set",
        }),
        TraceRecord::Rejected(NavRejection::OutOfRange {
            requested,
            slide_count,
        }) => json!({
            "event": "rejected",
            "reason": "out_of_range",
            "requested": requested,
            "slides": slide_count,
        }),
        TraceRecord::TimerArmed(period) => json!({
            "event": "timer_armed",
            "period_ms": u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
        }),
        TraceRecord::TimerCancelled => json!({
            "event": "timer_cancelled",
        }),
        TraceRecord::Rebind(binding) => json!({
            "event": "rebind",
            "slides": binding.slide_count(),
            "indicators": binding.indicator_count(),
        }),
    }
}
