//! Report presenter: trait-based format dispatch.

pub mod json;
pub mod text;

use crate::coverage::CoverageReport;
use anyhow::{anyhow, Result};

/// Trait for rendering a coverage report into a specific output format.
pub trait Renderer {
    fn render(&self, report: &CoverageReport) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, show_missing: bool) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer { show_missing })),
        "json" => Ok(Box::new(json::JsonRenderer { show_missing })),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::coverage::{aggregate, CoverageReport};
    use crate::model::{ClientEndpoints, DocSection, Endpoint, Method};

    /// projects.md partial, todos.md full, people.md zero, chatbots.md skipped.
    pub fn report() -> CoverageReport {
        let section = |name: &str, eps: &[(Method, &str)]| DocSection {
            name: name.to_string(),
            endpoints: eps.iter().map(|(m, p)| Endpoint::new(*m, *p)).collect(),
        };
        let sections = [
            section("chatbots.md", &[(Method::Get, "/chats/:id/integrations.json")]),
            section("people.md", &[(Method::Get, "/people.json")]),
            section(
                "projects.md",
                &[(Method::Get, "/projects.json"), (Method::Post, "/projects.json")],
            ),
            section("todos.md", &[(Method::Get, "/buckets/1/todos/2.json")]),
        ];
        let client: ClientEndpoints = [
            Endpoint::new(Method::Get, "/projects"),
            Endpoint::new(Method::Get, "/buckets/$bucket/todos/$id.json"),
        ]
        .into_iter()
        .collect();
        aggregate(&sections, &client, &["chatbots.md".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert!(create_renderer("text", false).is_ok());
        assert!(create_renderer("json", true).is_ok());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = create_renderer("html", false).err().unwrap();
        assert!(err.to_string().contains("unknown format: html"));
    }
}
