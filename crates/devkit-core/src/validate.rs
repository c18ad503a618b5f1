use crate::frontmatter::FrontMatter;
use crate::manifest::Plugin;
use crate::paths;
use crate::types::Category;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
pub const MAX_SKILL_LINES: usize = 500;

// ---------------------------------------------------------------------------
// Issue model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Path relative to the plugin root, or the manifest itself.
    pub file: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub plugin: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    fn error(&mut self, file: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: Severity::Error,
            file: file.to_string(),
            message: message.into(),
        });
    }

    fn warning(&mut self, file: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: Severity::Warning,
            file: file.to_string(),
            message: message.into(),
        });
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

static SEMVER_RE: OnceLock<Regex> = OnceLock::new();

fn semver_re() -> &'static Regex {
    SEMVER_RE.get_or_init(|| {
        Regex::new(r"^\d+\.\d+\.\d+(-[0-9A-Za-z][0-9A-Za-z.\-]*)?(\+[0-9A-Za-z][0-9A-Za-z.\-]*)?$")
            .unwrap()
    })
}

/// Check a plugin's manifest and every declared component. Errors make the
/// plugin undistributable; warnings are style limits.
pub fn validate_plugin(plugin: &Plugin) -> ValidationReport {
    let mut report = ValidationReport {
        plugin: plugin.name().to_string(),
        issues: Vec::new(),
    };

    validate_manifest(plugin, &mut report);

    for &category in Category::all() {
        match plugin.resolve(category) {
            Ok(resolved) => {
                for entry in &resolved.missing {
                    report.warning(
                        paths::MANIFEST_FILE,
                        format!("{category} entry '{entry}' does not resolve to any file"),
                    );
                }
                for path in &resolved.present {
                    let doc = if category.is_directory() {
                        path.join(paths::SKILL_FILE)
                    } else {
                        path.clone()
                    };
                    validate_component(plugin, category, &doc, &mut report);
                }
            }
            Err(e) => report.error(paths::MANIFEST_FILE, format!("cannot resolve {category}: {e}")),
        }
    }

    report
}

fn validate_manifest(plugin: &Plugin, report: &mut ValidationReport) {
    let m = &plugin.manifest;
    if paths::validate_name(&m.name).is_err() {
        report.error(
            paths::MANIFEST_FILE,
            format!("name '{}' must be kebab-case, at most {MAX_NAME_LENGTH} chars", m.name),
        );
    }
    if !semver_re().is_match(&m.version) {
        report.error(
            paths::MANIFEST_FILE,
            format!("version '{}' is not a semver string", m.version),
        );
    }
    if m.description.trim().is_empty() {
        report.error(paths::MANIFEST_FILE, "description is required");
    } else if m.description.len() > MAX_DESCRIPTION_LENGTH {
        report.warning(
            paths::MANIFEST_FILE,
            format!(
                "description is {} chars (max {MAX_DESCRIPTION_LENGTH})",
                m.description.len()
            ),
        );
    }
}

fn validate_component(
    plugin: &Plugin,
    category: Category,
    doc: &Path,
    report: &mut ValidationReport,
) {
    let rel = doc
        .strip_prefix(&plugin.root)
        .unwrap_or(doc)
        .to_string_lossy()
        .into_owned();

    let content = match std::fs::read_to_string(doc) {
        Ok(c) => c,
        Err(e) => {
            report.error(&rel, format!("cannot read: {e}"));
            return;
        }
    };

    let fm = match FrontMatter::parse(doc, &content) {
        Ok((fm, _body)) => fm,
        Err(e) => {
            report.error(&rel, format!("invalid front matter: {e}"));
            return;
        }
    };

    match fm.name() {
        None => report.error(&rel, "front matter is missing required field 'name'"),
        Some(name) => {
            if paths::validate_name(name).is_err() {
                report.error(
                    &rel,
                    format!("name '{name}' must be kebab-case, at most {MAX_NAME_LENGTH} chars"),
                );
            }
        }
    }

    match fm.description() {
        None => report.error(&rel, "front matter is missing required field 'description'"),
        Some(desc) if desc.len() > MAX_DESCRIPTION_LENGTH => {
            report.warning(
                &rel,
                format!("description is {} chars (max {MAX_DESCRIPTION_LENGTH})", desc.len()),
            );
        }
        Some(_) => {}
    }

    if category == Category::Skills {
        let lines = content.lines().count();
        if lines > MAX_SKILL_LINES {
            report.warning(
                &rel,
                format!("SKILL.md is {lines} lines (max {MAX_SKILL_LINES}); move detail into reference files"),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
