//! Documented endpoints: `METHOD /path` mentions in prose files.

use super::{find_files, read_text};
use crate::model::{DocSection, Endpoint, EndpointList, Method};
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// A method keyword followed by whitespace and a `/`-rooted token.
static RE_DOC_ENDPOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(GET|POST|PUT|PATCH|DELETE)\s+(/\S+)").unwrap());

/// Punctuation that prose puts right after a path.
const TRAILING_PUNCTUATION: &[char] = &['`', ',', '.'];

/// Load every `*.md` file in `sections_dir` as a section, in file-name
/// order. Files with no endpoint mentions are left out.
pub fn load_sections(sections_dir: &Path) -> Result<Vec<DocSection>> {
    let mut sections = Vec::new();
    for path in find_files(sections_dir, "*.md")? {
        let Some(text) = read_text(&path) else {
            continue;
        };
        let endpoints = parse(&text);
        tracing::debug!("{}: {} endpoints", path.display(), endpoints.len());
        if endpoints.is_empty() {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        sections.push(DocSection { name, endpoints });
    }
    Ok(sections)
}

/// Extract the distinct endpoints mentioned in `text`, first occurrence first.
pub fn parse(text: &str) -> EndpointList {
    RE_DOC_ENDPOINT
        .captures_iter(text)
        .filter_map(|caps| {
            let method: Method = caps[1].parse().ok()?;
            let path = caps[2].trim_end_matches(TRAILING_PUNCTUATION);
            Some(Endpoint::new(method, path))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rendered(list: &EndpointList) -> Vec<String> {
        list.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn parse_code_spans_and_punctuation() {
        let text = "Create with `POST /projects.json`.\n\
                    Then call GET /projects/1.json, or `PUT /projects/1.json`.\n";
        assert_eq!(
            rendered(&parse(text)),
            [
                "POST /projects.json",
                "GET /projects/1.json",
                "PUT /projects/1.json"
            ]
        );
    }

    #[test]
    fn parse_is_case_insensitive_and_uppercases() {
        let text = "you can also delete /buckets/1/recordings/2.json\n";
        assert_eq!(rendered(&parse(text)), ["DELETE /buckets/1/recordings/2.json"]);
    }

    #[test]
    fn parse_keeps_case_folded_keywords() {
        let text = "PO\u{17f}T /projects.json\n";
        assert_eq!(rendered(&parse(text)), ["POST /projects.json"]);
    }

    #[test]
    fn parse_deduplicates_in_first_seen_order() {
        let text = "GET /b.json\nPOST /a.json\nGET /b.json\nGET /a.json\n";
        assert_eq!(
            rendered(&parse(text)),
            ["GET /b.json", "POST /a.json", "GET /a.json"]
        );
    }

    #[test]
    fn parse_requires_slash_rooted_path() {
        assert!(parse("GET projects.json\nGET  \n").is_empty());
        assert!(parse("FORGET /this").is_empty());
    }

    #[test]
    fn parse_accepts_parameter_only_paths() {
        // No semantic validation: any `/`-rooted token is accepted.
        assert_eq!(rendered(&parse("GET /$id")), ["GET /$id"]);
    }

    #[test]
    fn load_sections_sorted_and_skips_empty_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("todos.md"), "GET /todos.json\n").unwrap();
        fs::write(dir.path().join("intro.md"), "# Intro\nNo endpoints here.\n").unwrap();
        fs::write(dir.path().join("people.md"), "GET /people.json\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "GET /ignored.json\n").unwrap();

        let sections = load_sections(dir.path()).unwrap();
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["people.md", "todos.md"]);
    }
}
