//! The synthesis parameter record.
//!
//! Field names follow the orchestrator's conventions (`syn_device`,
//! `syn_top`, ...), so a manifest reads the same as the one the toolchain
//! flow expects.

use std::fmt;

use hdlsyn_targets::{BuildTarget, ModuleDirSet, ModuleResolver, Modules, PlatformFamily};
use serde::{Deserialize, Serialize};

/// What the orchestrator should do with a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Synthesis,
    Simulation,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Synthesis => write!(f, "synthesis"),
            Action::Simulation => write!(f, "simulation"),
        }
    }
}

/// Static synthesis parameters for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthManifest {
    /// Toolchain family (e.g., "xilinx").
    pub target: String,
    pub action: Action,
    /// Device part number (e.g., "xc7k325t").
    pub syn_device: String,
    /// Speed grade (e.g., "-2").
    pub syn_grade: String,
    /// Package (e.g., "ffg900").
    pub syn_package: String,
    /// Top-level design unit.
    pub syn_top: String,
    /// Project file name (e.g., "kintex7_fmc_adc_250m_4ch.xise").
    pub syn_project: String,
    /// Build-specific source directory, relative to the manifest.
    pub modules: Modules,
}

impl SynthManifest {
    /// Resolution inputs taken from this record.
    pub fn build_target(&self) -> BuildTarget<'_> {
        BuildTarget::new(&self.target, &self.syn_device)
    }

    /// The build-specific directory, if the record names one.
    pub fn build_dir(&self) -> Option<&str> {
        self.modules.local.iter().next().map(String::as_str)
    }

    /// The device family the resolver recognizes for this build.
    pub fn platform_family<'r>(&self, resolver: &'r ModuleResolver) -> Option<&'r PlatformFamily> {
        resolver.family_for(&self.build_target())
    }

    /// Shared directories for this build, extended with its own directory.
    pub fn module_dirs(&self, resolver: &ModuleResolver) -> ModuleDirSet {
        let mut dirs = resolver.resolve(&self.build_target());
        dirs.extend(self.modules.local.iter().cloned());
        dirs
    }

    /// Full part string as the vendor tools spell it (e.g., "xc7k325t-2ffg900").
    pub fn part(&self) -> String {
        format!("{}{}{}", self.syn_device, self.syn_grade, self.syn_package)
    }
}
