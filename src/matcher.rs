//! Wildcard-aware structural matching of documented vs. invoked endpoints.

use crate::model::{Endpoint, Method};
use crate::normalize::{normalize, NormalizeOptions, Segment};

/// Does the client call `client` satisfy the documented endpoint `doc`?
///
/// Pairwise form of [`ClientIndex::covers`].
#[allow(dead_code)]
pub fn matches(doc: &Endpoint, client: &Endpoint) -> bool {
    ClientIndex::new([client]).covers(doc)
}

/// Position-by-position comparison. Lengths must agree; a wildcard on
/// either side accepts any segment.
fn segments_match(doc: &[Segment], client: &[Segment]) -> bool {
    doc.len() == client.len()
        && doc.iter().zip(client).all(|(d, c)| match (d, c) {
            (Segment::Wildcard, _) | (_, Segment::Wildcard) => true,
            (Segment::Literal(d), Segment::Literal(c)) => d == c,
        })
}

/// Client endpoints normalized once, for repeated existential queries.
pub struct ClientIndex {
    entries: Vec<(Method, Vec<Segment>)>,
}

impl ClientIndex {
    pub fn new<'a>(client: impl IntoIterator<Item = &'a Endpoint>) -> Self {
        let entries = client
            .into_iter()
            .map(|ep| (ep.method, normalize(&ep.path, NormalizeOptions::CLIENT)))
            .collect();
        ClientIndex { entries }
    }

    /// True if any indexed client endpoint matches `doc`: same method, then
    /// the docs-side segments against the client-side segments.
    pub fn covers(&self, doc: &Endpoint) -> bool {
        let doc_segments = normalize(&doc.path, NormalizeOptions::DOCS);
        self.entries.iter().any(|(method, segments)| {
            *method == doc.method && segments_match(&doc_segments, segments)
        })
    }
}
