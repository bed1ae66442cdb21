//! Device family table and module-path resolution for FPGA synthesis builds.
//!
//! A build selects its shared source directories from a fixed base list and,
//! when the toolchain and device family are recognized, one platform-specific
//! IP-core directory:
//! - **Family table:** device family code (e.g. `XC7K`) to IP-core directory
//! - **Resolver:** toolchain identifier + base list + family table
//! - **Parsing:** TOML load/store and validation of resolver configurations

pub mod error;
pub mod family;
pub mod parse;
pub mod resolver;

pub use error::{Result, TargetError};
pub use family::{family_prefix, PlatformFamily, FAMILY_CODE_LEN};
pub use parse::{Severity, ValidationIssue};
pub use resolver::{resolve_module_dirs, BuildTarget, ModuleDirSet, ModuleResolver, Modules};
