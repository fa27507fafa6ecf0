//! Repo-local architectural lint for the feed crate's hexagonal boundaries.
//!
//! The feed crate keeps its records, mappers, and ports in `domain`, the HTTP
//! adapters in `outbound`, and settings loading in `config`. This crate
//! parses those sources and reports:
//!
//! - `domain` code reaching into `outbound` or `config`, or naming transport
//!   and host crates (`reqwest`, `ortho_config`, `clap`, ...)
//! - `outbound` adapters reaching into `config` or past the ports into the
//!   domain's orchestration (`domain::service`, `domain::repository`)
//! - `config` reaching into `outbound` or performing HTTP itself
//!
//! Run it with `cargo run -p architecture-lint` from anywhere in the workspace.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Name under which the linted crate refers to itself from integration code.
const CRATE_NAME: &str = "feed";

/// A single boundary violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `feed/src`.
    pub file: PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    Io(io::Error),
    /// Rust source parsing failed, or the file sits outside every layer.
    Parse { file: PathBuf, message: String },
    /// One or more boundary violations were found.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error while linting feed architecture: {err}"),
            Self::Parse { file, message } => write!(
                f,
                "Failed to parse feed source ({}): {message}",
                file.display()
            ),
            Self::Violations(violations) => {
                writeln!(f, "Feed architecture boundary violations:")?;
                for violation in violations {
                    writeln!(f, "- {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Lint the feed crate sources on disk.
///
/// `feed_dir` must be the `feed/` directory at the repository root. Only the
/// layered modules are read; binaries and tests are ignored.
pub fn lint_feed_sources(feed_dir: &Path) -> Result<(), ArchitectureLintError> {
    let src_dir = feed_dir.join("src");
    let sources = collect_lint_sources(&src_dir)?;
    lint_sources(&sources)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let layer = ModuleLayer::infer_from_path(&source.file).ok_or_else(|| {
            ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: "file is not part of the domain, outbound, or config layer".to_owned(),
            }
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(lint_parsed_source(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `feed/src`.
    pub file: PathBuf,
    /// Full file contents.
    pub contents: String,
}

/// The architectural layer inferred from a file path under `feed/src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleLayer {
    Domain,
    Outbound,
    Config,
}

impl ModuleLayer {
    fn infer_from_path(relative_path: &Path) -> Option<Self> {
        let first = relative_path
            .components()
            .next()?
            .as_os_str()
            .to_string_lossy();
        match first.as_ref() {
            "domain" | "domain.rs" => Some(Self::Domain),
            "outbound" | "outbound.rs" => Some(Self::Outbound),
            "config" | "config.rs" => Some(Self::Config),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Outbound => "outbound",
            Self::Config => "config",
        }
    }

    /// Internal module paths, as segment prefixes, this layer must not name.
    fn forbidden_internal_prefixes(self) -> &'static [&'static [&'static str]] {
        match self {
            Self::Domain => &[&["outbound"], &["config"]],
            Self::Outbound => &[
                &["config"],
                &["domain", "service"],
                &["domain", "repository"],
            ],
            Self::Config => &[&["outbound"]],
        }
    }

    fn forbidden_crate_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain => BTreeSet::from([
                "clap",
                "color_eyre",
                "ortho_config",
                "reqwest",
                "tracing_subscriber",
                "url",
            ]),
            Self::Outbound => BTreeSet::from([
                "clap",
                "color_eyre",
                "ortho_config",
                "tracing_subscriber",
            ]),
            Self::Config => BTreeSet::from(["color_eyre", "reqwest", "tracing_subscriber"]),
        }
    }
}

fn lint_parsed_source(file: &Path, layer: ModuleLayer, parsed: &syn::File) -> Vec<Violation> {
    let forbidden_prefixes = layer.forbidden_internal_prefixes();
    let forbidden_crates = layer.forbidden_crate_roots();
    let layer_name = layer.name();

    let mut collector = PathCollector::default();
    collector.visit_file(parsed);

    let mut messages = BTreeSet::new();
    for segments in &collector.paths {
        if let Some(prefix) = forbidden_internal_prefix(segments, forbidden_prefixes) {
            messages.insert(format!(
                "{layer_name} module must not depend on crate::{}",
                prefix.join("::")
            ));
        }

        if let Some(root) = forbidden_external_crate_root(segments, &forbidden_crates) {
            messages.insert(format!(
                "{layer_name} module must not depend on external crate `{root}`"
            ));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn forbidden_internal_prefix(
    segments: &[String],
    forbidden: &'static [&'static [&'static str]],
) -> Option<&'static [&'static str]> {
    let internal = internal_module_path(segments)?;
    forbidden.iter().copied().find(|prefix| {
        internal.len() >= prefix.len()
            && internal
                .iter()
                .zip(prefix.iter())
                .all(|(segment, expected)| segment == expected)
    })
}

fn forbidden_external_crate_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = external_crate_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn is_relative_module_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

fn is_layer_root(segment: &str) -> bool {
    matches!(segment, "domain" | "outbound" | "config")
}

/// Crate-relative segments of `segments`, when it names crate-internal code.
fn internal_module_path(segments: &[String]) -> Option<&[String]> {
    let first = segments.first()?.as_str();
    if is_layer_root(first) {
        return Some(segments);
    }
    let start_index = match first {
        "crate" | "self" | "super" => segments
            .iter()
            .position(|segment| !is_relative_module_segment(segment.as_str()))?,
        CRATE_NAME => 1,
        _ => return None,
    };
    segments.get(start_index..)
}

fn external_crate_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    if is_relative_module_segment(root) || root == CRATE_NAME || is_layer_root(root) {
        return None;
    }
    Some(root)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_path(&mut self, path: &syn::Path) {
        let segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.paths.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        self.record_path(node);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }
}

fn collect_lint_sources(src_dir: &Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let mut sources = Vec::new();
    for layer_dir in ["domain", "outbound"] {
        let dir = src_dir.join(layer_dir);
        if dir.is_dir() {
            collect_sources_under(src_dir, &dir, &mut sources)?;
        }
    }
    let config = src_dir.join("config.rs");
    if config.is_file() {
        sources.push(read_source(src_dir, &config)?);
    }
    Ok(sources)
}

fn collect_sources_under(
    src_root: &Path,
    current: &Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sources_under(src_root, &path, sources)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            sources.push(read_source(src_root, &path)?);
        }
    }
    Ok(())
}

fn read_source(src_root: &Path, path: &Path) -> Result<LintSource, ArchitectureLintError> {
    let relative = path
        .strip_prefix(src_root)
        .map_err(|err| ArchitectureLintError::Parse {
            file: path.to_path_buf(),
            message: err.to_string(),
        })?
        .to_path_buf();
    let contents = fs::read_to_string(path)?;
    Ok(LintSource {
        file: relative,
        contents,
    })
}
