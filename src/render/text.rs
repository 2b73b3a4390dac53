//! Plain-text summary, one fact per line.

use crate::coverage::{Classification, CoverageReport};
use crate::render::Renderer;

pub struct TextRenderer {
    pub show_missing: bool,
}

impl Renderer for TextRenderer {
    fn render(&self, report: &CoverageReport) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "overall: {}/{} ({:.1}%)\n",
            report.matched,
            report.total,
            report.percent()
        ));
        out.push_str(&format!("full: {}\n", report.count(Classification::Full)));
        out.push_str(&format!("partial: {}\n", report.count(Classification::Partial)));
        out.push_str(&format!("zero: {}\n", report.count(Classification::Zero)));

        if !report.skipped.names.is_empty() {
            out.push_str(&format!(
                "skipped: {} sections ({} endpoints)\n",
                report.skipped.names.len(),
                report.skipped.endpoints
            ));
        }

        if self.show_missing {
            for section in report.incomplete_sections() {
                if section.missing.is_empty() {
                    continue;
                }
                out.push_str(&format!("\n{}\n", section.name));
                for item in &section.missing {
                    out.push_str(&format!("  {}\n", item));
                }
            }
        }

        out
    }
}
