//! Text and JSON rendering of roll results.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use droll_core::{DieSpec, RollOutcome, Sign};
use serde::Serialize;

/// One roll as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct RollRecord<'a> {
    pub code: &'a str,
    pub rolls: &'a [u32],
    pub sign: Sign,
    pub modifier: u32,
    pub total: i64,
}

impl<'a> RollRecord<'a> {
    pub fn new(spec: &'a DieSpec, outcome: &'a RollOutcome) -> Self {
        Self {
            code: spec.code(),
            rolls: &outcome.rolls,
            sign: spec.sign(),
            modifier: spec.modifier(),
            total: outcome.total,
        }
    }
}

/// `<code>: [<rolls>] <sign> <modifier> = <total>`
pub fn outcome_line(spec: &DieSpec, outcome: &RollOutcome) -> String {
    let rolls: Vec<String> = outcome.rolls.iter().map(u32::to_string).collect();
    format!(
        "{}: [{}] {} {} = {}",
        spec.code(),
        rolls.join(", "),
        spec.sign(),
        spec.modifier(),
        outcome.total
    )
}

pub fn json_line(spec: &DieSpec, outcome: &RollOutcome) -> Result<String, String> {
    serde_json::to_string(&RollRecord::new(spec, outcome)).map_err(|e| e.to_string())
}

pub fn bad_code_line(code: &str) -> String {
    format!("bad die code: {code}")
}

/// Render a report pointing at the part of `code` that could not be read.
pub fn render_malformed(code: &str, span: Range<usize>, message: &str, color: bool) -> String {
    let mut output = Vec::new();
    let id = "die code";

    Report::build(ReportKind::Error, (id, span.clone()))
        .with_config(Config::default().with_color(color))
        .with_message(message)
        .with_label(
            Label::new((id, span))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .write((id, Source::from(code)), &mut output)
        .ok();

    String::from_utf8(output).unwrap_or_default()
}
