//! `hdlsyn.toml` project file parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hdlsyn_targets::ModuleResolver;
use serde::Deserialize;

/// File name of the project file.
pub const PROJECT_FILE: &str = "hdlsyn.toml";

/// The top-level project file of a design repository.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Resolver override; the built-in resolver applies when absent.
    #[serde(default)]
    pub modules: Option<ModuleResolver>,
}

/// Project metadata section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Shown when the project is loaded.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl ProjectManifest {
    /// Search upward from `start_dir` for `hdlsyn.toml`, parse and return it
    /// along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(PROJECT_FILE);
            if candidate.is_file() {
                log::debug!("using project file {}", candidate.display());
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: ProjectManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        log::debug!("no {PROJECT_FILE} above {}", start_dir.display());
        Ok(None)
    }

    /// Parse a project file from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing hdlsyn.toml")
    }

    /// The resolver this project builds with.
    pub fn resolver(&self) -> ModuleResolver {
        self.modules.clone().unwrap_or_default()
    }

    /// Generate the default template for `hdlsyn init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"
version = "0.1.0"

# Uncomment to replace the built-in module table.
# [modules]
# toolchain = "xilinx"
# shared = ["modules/addr_decoder"]
#
# [[modules.family]]
# code = "XC7K"
# name = "Kintex-7"
# ip-cores = "platform/kintex7/ip_cores"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdlsyn_targets::BuildTarget;

    #[test]
    fn parse_minimal_project() {
        let manifest = ProjectManifest::from_str("[project]\nname = \"bpm\"\n").unwrap();
        assert_eq!(manifest.project.name, "bpm");
        assert_eq!(manifest.project.version, "0.1.0");
        assert!(manifest.project.description.is_none());
        assert!(manifest.modules.is_none());
        assert_eq!(manifest.resolver(), ModuleResolver::default());
    }

    #[test]
    fn parse_project_with_modules_override() {
        let toml_str = r#"
[project]
name = "bpm"

[modules]
shared = ["modules/wb_spi_bidir"]

[[modules.family]]
code = "XC7Z"
name = "Zynq-7000"
ip-cores = "platform/zynq7/ip_cores"
"#;
        let manifest = ProjectManifest::from_str(toml_str).unwrap();
        let resolver = manifest.resolver();
        assert_eq!(resolver.toolchain, "xilinx");
        let dirs = resolver.resolve(&BuildTarget::new("xilinx", "xc7z020"));
        assert_eq!(
            dirs.into_vec(),
            vec!["modules/wb_spi_bidir", "platform/zynq7/ip_cores"]
        );
    }

    #[test]
    fn parse_project_description() {
        let manifest = ProjectManifest::from_str(
            "[project]\nname = \"bpm\"\ndescription = \"FMC ADC gateware\"\n",
        )
        .unwrap();
        assert_eq!(manifest.project.description.as_deref(), Some("FMC ADC gateware"));
    }

    #[test]
    fn reject_project_without_name() {
        assert!(ProjectManifest::from_str("[project]\nversion = \"1.0\"\n").is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let manifest = ProjectManifest::from_str(&ProjectManifest::template("fmc-adc")).unwrap();
        assert_eq!(manifest.project.name, "fmc-adc");
        assert!(manifest.modules.is_none());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), "[project]\nname = \"parent\"\n").unwrap();

        let nested = dir.path().join("syn").join("fmc250m_kc705");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = ProjectManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.project.name, "parent");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), "not toml [[[").unwrap();
        let err = ProjectManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
