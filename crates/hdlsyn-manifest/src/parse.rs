//! TOML parsing, serialization, validation, and discovery for synthesis manifests.
//!
//! Per-build manifests are stored as `syn/<name>/Manifest.toml` under the
//! design root.

use std::path::{Path, PathBuf};

use hdlsyn_targets::parse::check_relative_dir;
use hdlsyn_targets::{ModuleResolver, ValidationIssue};

use crate::error::{ManifestError, Result};
use crate::synth::SynthManifest;

/// Directory holding one subdirectory per build.
pub const SYN_DIR: &str = "syn";

/// File name of a build manifest inside its build directory.
pub const MANIFEST_FILE: &str = "Manifest.toml";

/// Load a synthesis manifest from a file.
pub fn load_synth_toml(path: &Path) -> Result<SynthManifest> {
    if !path.exists() {
        return Err(ManifestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    log::debug!("loading synthesis manifest {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_synth_toml(&content)
}

/// Parse a synthesis manifest from a TOML string.
pub fn parse_synth_toml(toml_str: &str) -> Result<SynthManifest> {
    let manifest: SynthManifest = toml::from_str(toml_str)?;
    Ok(manifest)
}

/// Serialize a synthesis manifest to pretty TOML.
pub fn synth_to_toml(manifest: &SynthManifest) -> Result<String> {
    let toml_str = toml::to_string_pretty(manifest)?;
    Ok(toml_str)
}

fn is_speed_grade(grade: &str) -> bool {
    grade
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

/// Validate a synthesis manifest against a resolver.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with every problem found.
/// Malformed part strings are left for the vendor tools to reject; only the
/// shape of each value is checked here.
pub fn validate_synth(
    manifest: &SynthManifest,
    resolver: &ModuleResolver,
) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let required = [
        ("target", &manifest.target),
        ("syn_device", &manifest.syn_device),
        ("syn_grade", &manifest.syn_grade),
        ("syn_package", &manifest.syn_package),
        ("syn_top", &manifest.syn_top),
        ("syn_project", &manifest.syn_project),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::error(format!("{key} is empty")));
        }
    }

    match manifest.modules.local.len() {
        1 => {
            if let Some(dir) = manifest.build_dir() {
                check_relative_dir("build directory", dir, &mut issues);
            }
        }
        n => issues.push(ValidationIssue::error(format!(
            "modules.local must name exactly one build directory, found {n}"
        ))),
    }

    if !manifest.syn_grade.is_empty() && !is_speed_grade(&manifest.syn_grade) {
        issues.push(ValidationIssue::warning(format!(
            "syn_grade '{}' is not of the form -<digits>",
            manifest.syn_grade
        )));
    }

    if !manifest.syn_project.is_empty() && !manifest.syn_project.ends_with(".xise") {
        issues.push(ValidationIssue::warning(format!(
            "syn_project '{}' does not end in .xise",
            manifest.syn_project
        )));
    }

    if !manifest.syn_device.is_empty() && manifest.platform_family(resolver).is_none() {
        issues.push(ValidationIssue::warning(format!(
            "no platform IP cores for device '{}' with target '{}'; only shared modules are used",
            manifest.syn_device, manifest.target
        )));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a template manifest for a new build.
///
/// Seeds from the KC705 build, pointing at `../../top/<name>`.
pub fn generate_template(name: &str) -> Result<String> {
    let mut manifest = crate::builtin::fmc250m_kc705();
    manifest.syn_top = name.into();
    manifest.syn_project = format!("{name}.xise");
    manifest.modules.local = vec![format!("../../top/{name}")].into();
    synth_to_toml(&manifest)
}

/// Path of the manifest for build `name` under `project_dir`.
pub fn build_manifest_path(project_dir: &Path, name: &str) -> PathBuf {
    project_dir.join(SYN_DIR).join(name).join(MANIFEST_FILE)
}

/// Check that a build name is a single path component under `syn/`.
pub fn check_build_name(name: &str) -> Result<()> {
    let single_component = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if !single_component {
        return Err(ManifestError::Validation {
            detail: format!("invalid build name '{name}'"),
        });
    }
    Ok(())
}

/// Write a template manifest for a new build and return its path.
///
/// Refuses names that fail [`check_build_name`], and never overwrites an
/// existing manifest.
pub fn write_template(project_dir: &Path, name: &str) -> Result<PathBuf> {
    check_build_name(name)?;

    let path = build_manifest_path(project_dir, name);
    if path.exists() {
        return Err(ManifestError::Validation {
            detail: format!("{} already exists", path.display()),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, generate_template(name)?)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Discover all build manifests in a project's `syn/` directory.
///
/// Returns a list of (build_name, manifest_path) pairs sorted by name.
pub fn discover_builds(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let syn_dir = project_dir.join(SYN_DIR);
    if !syn_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut builds = Vec::new();
    for entry in std::fs::read_dir(&syn_dir)? {
        let entry = entry?;
        let manifest_path = entry.path().join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            builds.push((name.to_string(), manifest_path));
        }
    }
    builds.sort_by(|a, b| a.0.cmp(&b.0));
    log::debug!("found {} build manifests in {}", builds.len(), syn_dir.display());
    Ok(builds)
}
