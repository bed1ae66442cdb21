//! Module-path resolution.
//!
//! Given a toolchain identifier and a device part number, produce the ordered
//! list of shared source directories a build pulls in. The list always starts
//! with the shared modules; a platform IP-core directory is appended only when
//! the toolchain matches and the device family is in the table.

use serde::{Deserialize, Serialize};

use crate::family::{family_prefix, PlatformFamily};

/// Toolchain identifier recognized by the built-in resolver.
pub const DEFAULT_TOOLCHAIN: &str = "xilinx";

/// Shared module directories every build includes, in order.
pub const SHARED_MODULES: [&str; 6] = [
    "modules/addr_decoder",
    "modules/dcm_shift",
    "modules/fmc_adc_130m_4ch",
    "modules/fmc_adc_250m_4ch",
    "modules/rs232_syscon",
    "modules/wb_spi_bidir",
];

/// The inputs of a single resolution: toolchain and device part number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTarget<'a> {
    /// Toolchain family (e.g., "xilinx").
    pub target: &'a str,
    /// Device part number (e.g., "xc7k325t").
    pub device: &'a str,
}

impl<'a> BuildTarget<'a> {
    pub fn new(target: &'a str, device: &'a str) -> Self {
        Self { target, device }
    }
}

/// Ordered module directories. Duplicates are kept; callers merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleDirSet(Vec<String>);

impl ModuleDirSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dir: impl Into<String>) {
        self.0.push(dir.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ModuleDirSet {
    fn from(dirs: Vec<String>) -> Self {
        Self(dirs)
    }
}

impl Extend<String> for ModuleDirSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ModuleDirSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModuleDirSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The published modules value: one `local` scope holding the directory list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modules {
    pub local: ModuleDirSet,
}

/// Resolver configuration: toolchain, shared base list, and family table.
///
/// Adding a platform is one more [`PlatformFamily`] entry; resolution logic
/// does not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleResolver {
    /// Toolchain identifier that enables family matching.
    #[serde(default = "default_toolchain")]
    pub toolchain: String,
    /// Shared module directories, always included first.
    #[serde(default = "default_shared")]
    pub shared: Vec<String>,
    /// Family table, checked in order.
    #[serde(default = "PlatformFamily::builtin", rename = "family")]
    pub families: Vec<PlatformFamily>,
}

fn default_toolchain() -> String {
    DEFAULT_TOOLCHAIN.to_string()
}

fn default_shared() -> Vec<String> {
    SHARED_MODULES.iter().map(|s| s.to_string()).collect()
}

impl Default for ModuleResolver {
    fn default() -> Self {
        Self {
            toolchain: default_toolchain(),
            shared: default_shared(),
            families: PlatformFamily::builtin(),
        }
    }
}

impl ModuleResolver {
    /// The family whose IP cores a build should include, if any.
    ///
    /// `None` when the toolchain differs, the device is shorter than a family
    /// code, or no family code matches.
    pub fn family_for(&self, build: &BuildTarget<'_>) -> Option<&PlatformFamily> {
        if build.target != self.toolchain {
            return None;
        }
        let prefix = family_prefix(build.device)?;
        self.families.iter().find(|f| f.matches(&prefix))
    }

    /// Shared directories followed by at most one platform IP-core directory.
    pub fn resolve(&self, build: &BuildTarget<'_>) -> ModuleDirSet {
        let mut dirs = ModuleDirSet::from(self.shared.clone());
        if let Some(family) = self.family_for(build) {
            dirs.push(family.ip_cores.clone());
        }
        dirs
    }

    /// Resolve and wrap the result under the `local` scope.
    pub fn modules(&self, build: &BuildTarget<'_>) -> Modules {
        Modules {
            local: self.resolve(build),
        }
    }
}

/// Resolve with the built-in resolver.
pub fn resolve_module_dirs(build: &BuildTarget<'_>) -> ModuleDirSet {
    ModuleResolver::default().resolve(build)
}
