//! TOML parsing, serialization, and validation for resolver configurations.
//!
//! A resolver configuration is usually the `[modules]` table of a project's
//! `hdlsyn.toml`, but can also live in a standalone file.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::{Result, TargetError};
use crate::family::FAMILY_CODE_LEN;
use crate::resolver::ModuleResolver;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A validation issue found in a configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Load and validate a resolver configuration from a TOML file.
///
/// Warnings are logged; any error-severity issue fails the load.
pub fn load_resolver_toml(path: &Path) -> Result<ModuleResolver> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    log::debug!("loading resolver configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let resolver = parse_resolver_toml(&content)?;
    if let Err(issues) = validate_resolver(&resolver) {
        let mut errors = Vec::new();
        for issue in issues {
            if issue.is_error() {
                errors.push(issue.message);
            } else {
                log::warn!("{}: {}", path.display(), issue.message);
            }
        }
        if !errors.is_empty() {
            return Err(TargetError::Validation {
                detail: errors.join("; "),
            });
        }
    }
    Ok(resolver)
}

/// Parse a resolver configuration from a TOML string.
///
/// Missing keys fall back to the built-in values.
pub fn parse_resolver_toml(toml_str: &str) -> Result<ModuleResolver> {
    let resolver: ModuleResolver = toml::from_str(toml_str)?;
    Ok(resolver)
}

/// Serialize a resolver configuration to pretty TOML.
pub fn resolver_to_toml(resolver: &ModuleResolver) -> Result<String> {
    let toml_str = toml::to_string_pretty(resolver)?;
    Ok(toml_str)
}

/// Check a directory string for path-syntax problems.
///
/// Directories are plain forward-slash paths relative to the manifest.
pub fn check_relative_dir(what: &str, dir: &str, issues: &mut Vec<ValidationIssue>) {
    if dir.trim().is_empty() {
        issues.push(ValidationIssue::error(format!("{what} is empty")));
        return;
    }
    if dir.starts_with('/') {
        issues.push(ValidationIssue::warning(format!(
            "{what} '{dir}' is absolute; expected a path relative to the manifest"
        )));
    }
    if dir.contains('\\') {
        issues.push(ValidationIssue::warning(format!(
            "{what} '{dir}' uses backslashes; expected forward-slash separators"
        )));
    }
}

/// Validate a resolver configuration for structural correctness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with every problem found.
/// Warnings alone still produce `Err`; callers decide whether they block.
pub fn validate_resolver(resolver: &ModuleResolver) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if resolver.toolchain.trim().is_empty() {
        issues.push(ValidationIssue::error("toolchain identifier is empty"));
    }

    if resolver.shared.is_empty() {
        issues.push(ValidationIssue::warning("no shared module directories"));
    }
    for dir in &resolver.shared {
        check_relative_dir("shared module directory", dir, &mut issues);
    }

    let mut seen = HashSet::new();
    for family in &resolver.families {
        let code = family.code.to_uppercase();
        let well_formed = family.code.chars().count() == FAMILY_CODE_LEN
            && family.code.chars().all(|c| c.is_ascii_alphanumeric());
        if !well_formed {
            issues.push(ValidationIssue::error(format!(
                "family code '{}' must be exactly {FAMILY_CODE_LEN} ASCII letters or digits",
                family.code
            )));
        }
        if !seen.insert(code.clone()) {
            issues.push(ValidationIssue::error(format!(
                "family code '{code}' is listed more than once"
            )));
        }
        check_relative_dir(
            &format!("ip-cores directory of family '{}'", family.code),
            &family.ip_cores,
            &mut issues,
        );
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
