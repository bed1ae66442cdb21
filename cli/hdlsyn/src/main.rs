//! hdlsyn CLI: module resolution and build manifests for FPGA synthesis.

mod commands;
mod project;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::bail;
use clap::{Parser, Subcommand};
use hdlsyn_targets::parse::validate_resolver;
use hdlsyn_targets::ModuleResolver;

use commands::OutputFormat;
use project::{ProjectManifest, PROJECT_FILE};

#[derive(Parser)]
#[command(name = "hdlsyn", version, about = "FPGA synthesis build manifests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    Init {
        /// Project name
        name: String,
    },
    /// Resolve the shared module directories for a target and device
    Modules {
        /// Toolchain family (e.g., xilinx)
        #[arg(long)]
        target: String,
        /// Device part number (e.g., xc7k325t)
        #[arg(long)]
        device: String,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Manage build manifests
    Build {
        #[command(subcommand)]
        action: BuildAction,
    },
}

#[derive(Subcommand)]
enum BuildAction {
    /// List built-in and project builds
    List,
    /// Show the parameters and module directories of a build
    Describe {
        /// Build name
        name: String,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Validate a build manifest
    Validate {
        /// Build name
        name: String,
    },
    /// Add a new build manifest under syn/
    Add {
        /// Build name
        name: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Modules {
            target,
            device,
            format,
        } => {
            let (resolver, _) = load_project(&cwd)?;
            commands::modules::run(&resolver, &target, &device, format)
        }

        Commands::Build { action } => {
            let (resolver, project_dir) = load_project(&cwd)?;
            match action {
                BuildAction::List => commands::build::list(&project_dir),
                BuildAction::Describe { name, format } => {
                    commands::build::describe(&name, &project_dir, &resolver, format)
                }
                BuildAction::Validate { name } => {
                    commands::build::validate(&name, &project_dir, &resolver)
                }
                BuildAction::Add { name } => commands::build::add(&name, &project_dir),
            }
        }
    }
}

/// Resolver and project root for `cwd`.
fn load_project(cwd: &Path) -> anyhow::Result<(ModuleResolver, PathBuf)> {
    let found = ProjectManifest::find_and_load(cwd)?;
    project_resolver(found, cwd)
}

/// Without an `hdlsyn.toml`, the built-in resolver applies and `cwd` is the root.
fn project_resolver(
    found: Option<(ProjectManifest, PathBuf)>,
    cwd: &Path,
) -> anyhow::Result<(ModuleResolver, PathBuf)> {
    let Some((manifest, dir)) = found else {
        return Ok((ModuleResolver::default(), cwd.to_path_buf()));
    };

    log::info!(
        "project '{}' {} at {}",
        manifest.project.name,
        manifest.project.version,
        dir.display()
    );
    if let Some(description) = &manifest.project.description {
        log::info!("{description}");
    }
    let resolver = manifest.resolver();
    if let Err(issues) = validate_resolver(&resolver) {
        for issue in &issues {
            log::warn!("[modules] {}", issue.message);
        }
        if issues.iter().any(|i| i.is_error()) {
            bail!("invalid [modules] table in {}", dir.join(PROJECT_FILE).display());
        }
    }
    Ok((resolver, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_modules_command() {
        let cli = Cli::try_parse_from([
            "hdlsyn", "modules", "--target", "xilinx", "--device", "xc7a200t", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Modules {
                target,
                device,
                format,
            } => {
                assert_eq!(target, "xilinx");
                assert_eq!(device, "xc7a200t");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected modules command"),
        }
    }

    #[test]
    fn no_project_file_uses_builtin_resolver() {
        let dir = tempfile::tempdir().unwrap();
        let (resolver, root) = project_resolver(None, dir.path()).unwrap();
        assert_eq!(resolver, ModuleResolver::default());
        assert_eq!(root, dir.path());
    }

    #[test]
    fn load_project_uses_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_FILE),
            "[project]\nname = \"p\"\n\n[modules]\ntoolchain = \"altera\"\n",
        )
        .unwrap();
        let (resolver, root) = load_project(dir.path()).unwrap();
        assert_eq!(resolver.toolchain, "altera");
        assert_eq!(root, dir.path());
    }

    #[test]
    fn load_project_rejects_bad_family_code() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_FILE),
            "[project]\nname = \"p\"\n\n[[modules.family]]\ncode = \"XC\"\nname = \"x\"\nip-cores = \"ip\"\n",
        )
        .unwrap();
        let err = load_project(dir.path()).unwrap_err();
        assert!(err.to_string().contains("[modules]"));
    }
}
