//! Coverage aggregation: documented sections vs. invoked client endpoints.

use crate::matcher::ClientIndex;
use crate::model::{ClientEndpoints, DocSection, Endpoint, EndpointList};
use serde::Serialize;

/// How much of a section the client covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Full,
    Partial,
    Zero,
}

/// Matched vs. documented endpoint counts for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStat {
    pub matched: usize,
    pub total: usize,
}

impl SectionStat {
    pub fn classify(&self) -> Classification {
        if self.matched == 0 {
            Classification::Zero
        } else if self.matched == self.total {
            Classification::Full
        } else {
            Classification::Partial
        }
    }
}

/// Result for one scored section.
#[derive(Debug, Clone)]
pub struct SectionReport {
    pub name: String,
    pub stat: SectionStat,
    /// Unmatched endpoints as `"METHOD path"`, in documentation order.
    pub missing: Vec<String>,
}

/// Sections excluded from scoring by the caller.
#[derive(Debug, Clone, Default)]
pub struct Skipped {
    pub names: Vec<String>,
    pub endpoints: usize,
}

/// Everything the presenter needs.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub matched: usize,
    pub total: usize,
    /// Scored sections in extraction order.
    pub sections: Vec<SectionReport>,
    pub skipped: Skipped,
}

impl CoverageReport {
    /// Percentage of globally unique documented endpoints covered.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64 * 100.0
        }
    }

    pub fn count(&self, class: Classification) -> usize {
        self.sections
            .iter()
            .filter(|s| s.stat.classify() == class)
            .count()
    }

    /// Partial sections then zero sections, each sorted by name.
    pub fn incomplete_sections(&self) -> Vec<&SectionReport> {
        let mut out = Vec::new();
        for class in [Classification::Partial, Classification::Zero] {
            let mut group: Vec<&SectionReport> = self
                .sections
                .iter()
                .filter(|s| s.stat.classify() == class)
                .collect();
            group.sort_by(|a, b| a.name.cmp(&b.name));
            out.extend(group);
        }
        out
    }
}

/// Score `sections` against `client`, leaving out any section named in `skip`.
pub fn aggregate(
    sections: &[DocSection],
    client: &ClientEndpoints,
    skip: &[String],
) -> CoverageReport {
    let (skipped_sections, scored): (Vec<&DocSection>, Vec<&DocSection>) = sections
        .iter()
        .partition(|s| skip.iter().any(|name| *name == s.name));

    let skipped = Skipped {
        names: skipped_sections.iter().map(|s| s.name.clone()).collect(),
        endpoints: skipped_sections.iter().map(|s| s.endpoints.len()).sum(),
    };

    let index = ClientIndex::new(client);
    let is_covered = |doc: &Endpoint| index.covers(doc);

    let section_reports = scored
        .iter()
        .map(|section| {
            let mut matched = 0;
            let mut missing = Vec::new();
            for endpoint in &section.endpoints {
                if is_covered(endpoint) {
                    matched += 1;
                } else {
                    missing.push(endpoint.to_string());
                }
            }
            SectionReport {
                name: section.name.clone(),
                stat: SectionStat {
                    matched,
                    total: section.endpoints.len(),
                },
                missing,
            }
        })
        .collect();

    // Endpoints repeated across sections count once globally.
    let unique: EndpointList = scored
        .iter()
        .flat_map(|s| s.endpoints.iter().cloned())
        .collect();
    let matched = unique.iter().filter(|ep| is_covered(*ep)).count();

    tracing::debug!(
        "{} sections scored, {} skipped, {} unique documented endpoints",
        scored.len(),
        skipped.names.len(),
        unique.len()
    );

    CoverageReport {
        matched,
        total: unique.len(),
        sections: section_reports,
        skipped,
    }
}
