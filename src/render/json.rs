//! JSON renderer: structured output for CI and tooling.

use crate::coverage::{Classification, CoverageReport};
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer {
    pub show_missing: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    overall: Overall,
    full: usize,
    partial: usize,
    zero: usize,
    skipped: JsonSkipped<'a>,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
struct Overall {
    matched: usize,
    total: usize,
    percent: f64,
}

#[derive(Serialize)]
struct JsonSkipped<'a> {
    sections: usize,
    endpoints: usize,
    names: &'a [String],
}

#[derive(Serialize)]
struct JsonSection<'a> {
    name: &'a str,
    matched: usize,
    total: usize,
    status: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<&'a [String]>,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &CoverageReport) -> String {
        let view = JsonReport {
            overall: Overall {
                matched: report.matched,
                total: report.total,
                percent: (report.percent() * 10.0).round() / 10.0,
            },
            full: report.count(Classification::Full),
            partial: report.count(Classification::Partial),
            zero: report.count(Classification::Zero),
            skipped: JsonSkipped {
                sections: report.skipped.names.len(),
                endpoints: report.skipped.endpoints,
                names: &report.skipped.names,
            },
            sections: report
                .sections
                .iter()
                .map(|s| JsonSection {
                    name: &s.name,
                    matched: s.stat.matched,
                    total: s.stat.total,
                    status: s.stat.classify(),
                    missing: self.show_missing.then_some(s.missing.as_slice()),
                })
                .collect(),
        };
        // Plain data with string keys.
        let mut out = serde_json::to_string_pretty(&view).expect("coverage report serializes");
        out.push('\n');
        out
    }
}
