//! `hdlsyn init`: project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hdlsyn_manifest::parse::SYN_DIR;

use crate::project::{ProjectManifest, PROJECT_FILE};

/// Create a new project directory `name` relative to cwd.
pub fn run(name: &str) -> Result<()> {
    create_project(Path::new(name), name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir.join(SYN_DIR)).context("creating syn/ directory")?;
    fs::write(project_dir.join(PROJECT_FILE), ProjectManifest::template(name))
        .with_context(|| format!("writing {PROJECT_FILE}"))?;
    // ISE run output lands next to each build manifest.
    fs::write(project_dir.join(".gitignore"), "syn/*/*\n!syn/*/Manifest.toml\n")
        .context("writing .gitignore")?;

    println!("Created project '{name}'");
    println!("  {name}/{PROJECT_FILE}");
    println!("  {name}/{SYN_DIR}/");
    println!("  {name}/.gitignore");
    println!();
    println!("Add a build with 'hdlsyn build add <name>'.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_project_structure() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("fmc-adc");

        create_project(&project_path, "fmc-adc").unwrap();

        assert!(project_path.join(PROJECT_FILE).is_file());
        assert!(project_path.join("syn").is_dir());
        assert!(project_path.join(".gitignore").is_file());
    }

    #[test]
    fn init_generates_loadable_project() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("loadable");
        create_project(&project_path, "loadable").unwrap();

        let (manifest, found) = ProjectManifest::find_and_load(&project_path.join("syn"))
            .unwrap()
            .unwrap();
        assert_eq!(manifest.project.name, "loadable");
        assert_eq!(found, project_path);
    }

    #[test]
    fn init_refuses_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("existing");
        fs::create_dir(&project_path).unwrap();

        let err = create_project(&project_path, "existing").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
