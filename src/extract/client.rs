//! Invoked endpoints: `api_<verb>` call sites in client shell scripts.
//!
//! Each script is scanned twice. The first pass records every
//! `[local] name="/path..."` assignment into an [`AssignmentTable`]; the
//! second pass collects call sites, either with a quoted literal path or
//! with a leading variable that is resolved through the table.
//!
//! Variable tracking is line-based and flow-insensitive: a variable assigned
//! different paths in different branches resolves to all of them.

use super::{find_files, read_text};
use crate::model::{ClientEndpoints, Endpoint, Method};
use anyhow::Result;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::LazyLock;

/// `[local] name = "value"` or `'value'` at the start of a line.
static RE_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:local\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(?:"([^"]+)"|'([^']+)')"#)
        .unwrap()
});

/// Call with a quoted literal path: `api_get "/projects/$id.json"`.
static RE_CALL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"api_(get|post|put|patch|delete|upload)\s+(?:"([^"]+)"|'([^']+)')"#).unwrap()
});

/// Call whose argument starts with a variable: `api_get "$path"`,
/// `api_post ${url}`, `api_get "$path?page=2"`. Whatever follows the
/// leading token is ignored; the variable resolves through the table.
static RE_CALL_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"api_(get|post|put|patch|delete|upload)\s+"?"#,
        r#"(\$[A-Za-z_][A-Za-z0-9_]*|\$\{[A-Za-z_][A-Za-z0-9_]*\})"#
    ))
    .unwrap()
});

/// A literal argument that is nothing but one variable reference.
static RE_BARE_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{?[A-Za-z_][A-Za-z0-9_]*\}?$").unwrap());

/// Variable name to every `/`-rooted literal it was assigned in one script.
#[derive(Debug, Default)]
pub struct AssignmentTable {
    values: HashMap<String, BTreeSet<String>>,
}

impl AssignmentTable {
    /// Build the table from every assignment line in `text`.
    pub fn scan(text: &str) -> Self {
        let mut table = AssignmentTable::default();
        for line in text.lines() {
            let Some(caps) = RE_ASSIGN.captures(line) else {
                continue;
            };
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            if value.starts_with('/') {
                table.record(&caps[1], value);
            }
        }
        table
    }

    pub fn record(&mut self, name: &str, value: &str) {
        self.values
            .entry(name.to_string())
            .or_default()
            .insert(value.to_string());
    }

    /// All paths `name` may hold; empty if it never held one.
    pub fn resolve(&self, name: &str) -> impl Iterator<Item = &str> {
        self.values
            .get(name)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }
}

/// Scan every `*.sh` file under `commands_dir` (recursively) and union
/// the endpoints they invoke. A missing directory yields an empty set.
pub fn load_endpoints(commands_dir: &Path) -> Result<ClientEndpoints> {
    if !commands_dir.is_dir() {
        tracing::warn!("client dir not found: {}", commands_dir.display());
        return Ok(ClientEndpoints::new());
    }

    let files = find_files(commands_dir, "**/*.sh")?;
    let endpoints = files.iter().fold(ClientEndpoints::new(), |mut acc, path| {
        if let Some(text) = read_text(path) {
            let found = parse(&text);
            tracing::debug!("{}: {} endpoints", path.display(), found.len());
            acc.extend(found);
        }
        acc
    });
    Ok(endpoints)
}

/// Endpoints invoked by a single script.
pub fn parse(text: &str) -> ClientEndpoints {
    let assignments = AssignmentTable::scan(text);
    let mut endpoints = ClientEndpoints::new();

    for caps in RE_CALL_LITERAL.captures_iter(text) {
        let Some(method) = Method::from_verb(&caps[1]) else {
            continue;
        };
        let path = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
        if RE_BARE_VARIABLE.is_match(path) {
            continue;
        }
        endpoints.insert(Endpoint::new(method, path));
    }

    for caps in RE_CALL_VARIABLE.captures_iter(text) {
        let Some(method) = Method::from_verb(&caps[1]) else {
            continue;
        };
        let name = caps[2].trim_start_matches('$').trim_matches(['{', '}']);
        for path in assignments.resolve(name) {
            endpoints.insert(Endpoint::new(method, path));
        }
    }

    endpoints
}
