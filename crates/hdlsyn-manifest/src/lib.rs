//! Synthesis parameter manifests for FPGA builds.
//!
//! Each build of a design lives in `syn/<name>/Manifest.toml` and records the
//! device, speed grade, package, top-level unit, project file, and the single
//! build-specific source directory. The shared directories come from the
//! module resolver in `hdlsyn-targets`.

pub mod builtin;
pub mod error;
pub mod parse;
pub mod synth;

pub use builtin::{builtin_builds, resolve_build};
pub use error::{ManifestError, Result};
pub use synth::{Action, SynthManifest};
