//! doc-parity: estimate how much of a documented HTTP API a shell client calls.
//!
//! Reads `METHOD /path` mentions from the documentation's section files,
//! collects `api_<verb>` call sites from the client's command scripts, and
//! reports per-section and global coverage.
//!
//! ```text
//! doc-parity --client-root . --docs-root ../api-docs --show-missing
//! ```

mod coverage;
mod extract;
mod matcher;
mod model;
mod normalize;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sibling directory assumed to hold the documentation when `--docs-root`
/// is not given.
const DEFAULT_DOCS_DIR_NAME: &str = "api-docs";

#[derive(Parser)]
#[command(
    name = "doc-parity",
    version,
    about = "Compare client API usage to documented endpoint coverage"
)]
struct Cli {
    /// Path to the client repository root
    #[arg(long, env = "DOC_PARITY_CLIENT_ROOT", default_value = ".")]
    client_root: PathBuf,

    /// Client command scripts, relative to the client root
    #[arg(long, default_value = "lib/commands")]
    commands_dir: PathBuf,

    /// Path to the documentation repository root (default: <client-root>/../api-docs)
    #[arg(long, env = "API_DOCS_PATH")]
    docs_root: Option<PathBuf>,

    /// Documentation section files, relative to the docs root
    #[arg(long, default_value = "sections")]
    sections_dir: PathBuf,

    /// List missing endpoints per partial/zero section
    #[arg(long)]
    show_missing: bool,

    /// Section file names to leave out of scoring (repeatable, comma-separated)
    #[arg(long, value_delimiter = ',')]
    skip: Vec<String>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Reject a bad format before doing any work.
    let renderer = render::create_renderer(&cli.format, cli.show_missing)?;

    let client_root = absolute(&cli.client_root)?;
    let docs_root = resolve_docs_root(&client_root, cli.docs_root.as_deref())?;
    let sections_dir = docs_root.join(&cli.sections_dir);

    if !sections_dir.is_dir() {
        anyhow::bail!("sections dir not found: {}", sections_dir.display());
    }

    let sections = extract::docs::load_sections(&sections_dir)?;
    let client = extract::client::load_endpoints(&client_root.join(&cli.commands_dir))?;
    tracing::debug!(
        "{} sections, {} client endpoints",
        sections.len(),
        client.len()
    );

    let report = coverage::aggregate(&sections, &client, &cli.skip);
    print!("{}", renderer.render(&report));
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Make `path` absolute against the current directory without requiring it
/// to exist.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}

/// An explicit docs root wins; otherwise look for the sibling checkout
/// next to the client root.
fn resolve_docs_root(client_root: &Path, provided: Option<&Path>) -> Result<PathBuf> {
    match provided {
        Some(p) if !p.as_os_str().is_empty() => absolute(p),
        _ => {
            let root = client_root.canonicalize().unwrap_or_else(|_| client_root.to_path_buf());
            let parent = root.parent().unwrap_or(&root);
            Ok(parent.join(DEFAULT_DOCS_DIR_NAME))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_docs_root_wins() {
        let root =
            resolve_docs_root(Path::new("/work/client"), Some(Path::new("/srv/docs"))).unwrap();
        assert_eq!(root, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn docs_root_defaults_to_sibling() {
        let root = resolve_docs_root(Path::new("/work/client"), None).unwrap();
        assert_eq!(root, PathBuf::from("/work/api-docs"));
    }

    #[test]
    fn empty_docs_root_falls_back_to_sibling() {
        let root = resolve_docs_root(Path::new("/work/client"), Some(Path::new(""))).unwrap();
        assert_eq!(root, PathBuf::from("/work/api-docs"));
    }

    #[test]
    fn cli_skip_accepts_repeats_and_commas() {
        let cli = Cli::parse_from([
            "doc-parity",
            "--skip",
            "chatbots.md,webhooks.md",
            "--skip",
            "templates.md",
        ]);
        assert_eq!(cli.skip, ["chatbots.md", "webhooks.md", "templates.md"]);
        assert!(!cli.show_missing);
        assert_eq!(cli.format, "text");
    }
}
