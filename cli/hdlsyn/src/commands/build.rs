//! `hdlsyn build`: list, describe, validate, and add build manifests.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use hdlsyn_manifest::parse::{
    build_manifest_path, check_build_name, discover_builds, load_synth_toml, synth_to_toml, validate_synth,
    write_template,
};
use hdlsyn_manifest::{builtin_builds, resolve_build, SynthManifest};
use hdlsyn_targets::{ModuleDirSet, ModuleResolver, Severity};
use serde::Serialize;

use super::OutputFormat;

/// Where a build manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildSource {
    Project(PathBuf),
    Builtin,
}

impl fmt::Display for BuildSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSource::Project(path) => write!(f, "{}", path.display()),
            BuildSource::Builtin => write!(f, "built-in"),
        }
    }
}

/// Find a build by name: the project's `syn/<name>/Manifest.toml` first,
/// then the built-in builds.
pub fn find_build(name: &str, project_dir: &Path) -> Result<(SynthManifest, BuildSource)> {
    check_build_name(name)?;
    let path = build_manifest_path(project_dir, name);
    if path.is_file() {
        let manifest = load_synth_toml(&path).with_context(|| format!("loading {}", path.display()))?;
        return Ok((manifest, BuildSource::Project(path)));
    }
    match resolve_build(name) {
        Some(manifest) => Ok((manifest, BuildSource::Builtin)),
        None => bail!("unknown build: '{name}'. Use 'hdlsyn build list' to see available builds."),
    }
}

/// List built-in builds and the builds found in the project.
pub fn list(project_dir: &Path) -> Result<()> {
    println!("Built-in builds:");
    println!();
    for (name, description) in builtin_builds() {
        println!("  {name:<25} {description}");
    }

    let builds = discover_builds(project_dir)?;
    if !builds.is_empty() {
        println!();
        println!("Project builds ({}):", project_dir.display());
        println!();
        for (name, path) in &builds {
            println!("  {name:<25} {}", path.display());
        }
    }
    println!();
    println!("Use 'hdlsyn build describe <name>' for details.");
    Ok(())
}

#[derive(Serialize)]
struct BuildDescription<'a> {
    name: &'a str,
    #[serde(flatten)]
    manifest: &'a SynthManifest,
    module_dirs: ModuleDirSet,
}

/// Describe a build: its parameters and its full module directory set.
pub fn describe(
    name: &str,
    project_dir: &Path,
    resolver: &ModuleResolver,
    format: OutputFormat,
) -> Result<()> {
    let (manifest, source) = find_build(name, project_dir)?;
    print!("{}", render(name, &manifest, &source, resolver, format)?);
    Ok(())
}

pub(crate) fn render(
    name: &str,
    manifest: &SynthManifest,
    source: &BuildSource,
    resolver: &ModuleResolver,
    format: OutputFormat,
) -> Result<String> {
    let module_dirs = manifest.module_dirs(resolver);
    match format {
        OutputFormat::Toml => Ok(synth_to_toml(manifest)?),
        OutputFormat::Json => {
            let description = BuildDescription {
                name,
                manifest,
                module_dirs,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&description)?))
        }
        OutputFormat::Text => {
            let family = match manifest.platform_family(resolver) {
                Some(f) => format!("{} ({})", f.name, f.code),
                None => "unrecognized (no platform IP cores)".to_string(),
            };
            let mut out = String::new();
            out.push_str(&format!("=== Build: {name} ===\n"));
            out.push_str(&format!("Source: {source}\n\n"));
            out.push_str("--- Synthesis ---\n");
            out.push_str(&format!("  Target:  {}\n", manifest.target));
            out.push_str(&format!("  Action:  {}\n", manifest.action));
            out.push_str(&format!("  Part:    {}\n", manifest.part()));
            out.push_str(&format!("  Family:  {family}\n"));
            out.push_str(&format!("  Top:     {}\n", manifest.syn_top));
            out.push_str(&format!("  Project: {}\n\n", manifest.syn_project));
            out.push_str("--- Module directories ---\n");
            for dir in &module_dirs {
                out.push_str(&format!("  {dir}\n"));
            }
            Ok(out)
        }
    }
}

/// Validate a build manifest. Warnings are printed; errors fail the command.
pub fn validate(name: &str, project_dir: &Path, resolver: &ModuleResolver) -> Result<()> {
    let (manifest, source) = find_build(name, project_dir)?;
    log::debug!("validating build '{name}' from {source}");

    match validate_synth(&manifest, resolver) {
        Ok(()) => {
            println!("Build '{name}' is valid.");
            Ok(())
        }
        Err(issues) => {
            let errors = issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count();
            for issue in &issues {
                eprintln!("{}: {}", issue.severity, issue.message);
            }
            if errors > 0 {
                bail!("build '{name}' has {errors} error(s)");
            }
            println!("Build '{name}' is valid with {} warning(s).", issues.len());
            Ok(())
        }
    }
}

/// Scaffold `syn/<name>/Manifest.toml` in the project.
pub fn add(name: &str, project_dir: &Path) -> Result<()> {
    let path = write_template(project_dir, name)?;
    println!("Created {}", path.display());
    println!("Edit syn_device, syn_grade, and syn_package for your board.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_builtin_build() {
        let dir = tempfile::tempdir().unwrap();
        let (manifest, source) = find_build("fmc250m_afc", dir.path()).unwrap();
        assert_eq!(manifest.syn_device, "xc7a200t");
        assert_eq!(source, BuildSource::Builtin);
    }

    #[test]
    fn project_build_shadows_builtin() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "fmc250m_afc").unwrap();
        let (manifest, source) = find_build("fmc250m_afc", dir.path()).unwrap();
        assert_eq!(manifest.syn_top, "fmc250m_afc");
        assert!(matches!(source, BuildSource::Project(_)));
    }

    #[test]
    fn build_name_cannot_leave_syn_dir() {
        let dir = tempfile::tempdir().unwrap();
        let outside = dir.path().join("outside");
        write_template(&outside, "x").unwrap();
        // project/syn/../../outside/syn/x holds a real manifest.
        let project = dir.path().join("project");
        std::fs::create_dir_all(project.join("syn")).unwrap();

        let err = find_build("../../outside/syn/x", &project).unwrap_err();
        assert!(err.to_string().contains("invalid build name"));
        assert!(find_build("..", &project).is_err());
    }

    #[test]
    fn unknown_build_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_build("nonexistent", dir.path()).is_err());
    }

    #[test]
    fn describe_text_lists_module_dirs() {
        let manifest = resolve_build("fmc250m_ml605").unwrap();
        let out = render(
            "fmc250m_ml605",
            &manifest,
            &BuildSource::Builtin,
            &ModuleResolver::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.contains("Part:    xc6vlx240t-1ff1156"));
        assert!(out.contains("Virtex-6 (XC6V)"));
        assert!(out.contains("  platform/virtex6/ip_cores\n  ../../top/ml605/fmc250m\n"));
    }

    #[test]
    fn describe_json_flattens_manifest() {
        let manifest = resolve_build("fmc250m_kc705").unwrap();
        let out = render(
            "fmc250m_kc705",
            &manifest,
            &BuildSource::Builtin,
            &ModuleResolver::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "fmc250m_kc705");
        assert_eq!(value["syn_device"], "xc7k325t");
        assert_eq!(value["module_dirs"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn validate_builtin_with_warning_passes() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate("fmc130m_kc705", dir.path(), &ModuleResolver::default()).is_ok());
    }

    #[test]
    fn validate_broken_project_build_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(dir.path(), "broken").unwrap();
        let content = std::fs::read_to_string(&path)
            .unwrap()
            .replace("syn_top = \"broken\"", "syn_top = \"\"");
        std::fs::write(&path, content).unwrap();

        let err = validate("broken", dir.path(), &ModuleResolver::default()).unwrap_err();
        assert!(err.to_string().contains("1 error"));
    }

    #[test]
    fn add_then_list() {
        let dir = tempfile::tempdir().unwrap();
        add("new_board", dir.path()).unwrap();
        assert!(dir.path().join("syn/new_board/Manifest.toml").is_file());
        assert!(list(dir.path()).is_ok());
        assert!(add("new_board", dir.path()).is_err());
    }
}
