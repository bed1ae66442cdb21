//! `hdlsyn modules`: resolve the module directories for a target and device.

use anyhow::Result;
use hdlsyn_targets::{BuildTarget, ModuleResolver, Modules};

use super::OutputFormat;

/// Print the module directories a build with `target`/`device` includes.
pub fn run(resolver: &ModuleResolver, target: &str, device: &str, format: OutputFormat) -> Result<()> {
    let build = BuildTarget::new(target, device);
    match resolver.family_for(&build) {
        Some(family) => log::info!("device '{device}' is {} ({})", family.name, family.code),
        None => log::info!("no platform family for target '{target}', device '{device}'"),
    }
    print!("{}", render(&resolver.modules(&build), format)?);
    Ok(())
}

pub(crate) fn render(modules: &Modules, format: OutputFormat) -> Result<String> {
    let out: String = match format {
        OutputFormat::Text => modules
            .local
            .iter()
            .map(|dir| format!("{dir}\n"))
            .collect(),
        OutputFormat::Toml => toml::to_string_pretty(modules)?,
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(modules)?),
    };
    Ok(out)
}
