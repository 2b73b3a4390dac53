//! Path normalization: reduce a raw path to comparable segments.
//!
//! Documentation paths carry route-description decorations (`(.:format)`,
//! `:id`, `{id}`, `.json`), client paths carry shell interpolation
//! (`$id`, `${id}`). Both are folded into literal segments and a single
//! wildcard marker so that the matcher can compare them position by position.

use std::fmt;

/// Optional format suffix used by route-description docs.
const FORMAT_SUFFIX: &str = "(.:format)";

/// Output-format extension that is not part of a route's identity.
const JSON_SUFFIX: &str = ".json";

/// Textual form of the wildcard marker.
pub const WILDCARD: &str = "*";

/// One normalized path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Matches any single segment at its position.
    Wildcard,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => f.write_str(s),
            Segment::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// Which segment shapes collapse to the wildcard marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// `$var`, `${var}`, `:name` and `{name}` segments
    pub parameters_as_wildcard: bool,
    /// all-digit segments such as sample IDs
    pub numeric_as_wildcard: bool,
}

impl NormalizeOptions {
    /// Documentation side: parameters and sample numeric IDs generalize.
    pub const DOCS: NormalizeOptions = NormalizeOptions {
        parameters_as_wildcard: true,
        numeric_as_wildcard: true,
    };

    /// Client side: a literal number is an intentional sub-resource, keep it.
    pub const CLIENT: NormalizeOptions = NormalizeOptions {
        parameters_as_wildcard: true,
        numeric_as_wildcard: false,
    };
}

/// Normalize `path` into its ordered segment sequence.
pub fn normalize(path: &str, opts: NormalizeOptions) -> Vec<Segment> {
    let path = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };
    let path = path.replace(FORMAT_SUFFIX, "").replace(['(', ')'], "");

    path.split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| classify(seg.strip_suffix(JSON_SUFFIX).unwrap_or(seg), opts))
        .collect()
}

fn classify(seg: &str, opts: NormalizeOptions) -> Segment {
    let is_parameter = seg.contains('$') || seg.starts_with(':') || seg.starts_with('{');
    let is_numeric = seg.bytes().all(|b| b.is_ascii_digit());

    // A colon anywhere is parameter syntax regardless of the options.
    let wildcard = seg == WILDCARD
        || seg.contains(':')
        || (opts.parameters_as_wildcard && is_parameter)
        || (opts.numeric_as_wildcard && !seg.is_empty() && is_numeric);

    if wildcard {
        Segment::Wildcard
    } else {
        Segment::Literal(seg.to_string())
    }
}
