//! accel CLI: inspect target classification and generate C configuration headers.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use commands::ResolveOptions;
use manifest::AccelManifest;

#[derive(Parser)]
#[command(
    name = "accel",
    version,
    about = "Platform, architecture and toolchain resolution for accel"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an accel.toml in the current directory
    Init {
        /// Library name
        name: String,
        /// Default target triple (default: x86_64-unknown-linux-gnu)
        #[arg(long)]
        target: Option<String>,
    },
    /// Show the resolved profile and capability spellings for a target
    Describe {
        /// Target triple (default: manifest target, then this host)
        #[arg(long)]
        target: Option<String>,
        /// Toolchain override (gcc-family, msvc, c11)
        #[arg(long)]
        toolchain: Option<String>,
        /// Linkage (static, building-library, consuming-library)
        #[arg(long)]
        linkage: Option<String>,
        /// Describe the release configuration
        #[arg(long)]
        release: bool,
        /// Output format (text, toml, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Classify target triples into platform and architecture tags
    Classify {
        /// One or more target triples
        #[arg(required = true)]
        triples: Vec<String>,
    },
    /// List the supported target matrix
    Matrix,
    /// Generate a C configuration header
    Header {
        /// Target triple (default: manifest target, then this host)
        #[arg(long)]
        target: Option<String>,
        /// Toolchain override (gcc-family, msvc, c11)
        #[arg(long)]
        toolchain: Option<String>,
        /// Linkage (static, building-library, consuming-library)
        #[arg(long)]
        linkage: Option<String>,
        /// Generate the release configuration
        #[arg(long)]
        release: bool,
        /// Output path, or "-" for stdout (default: manifest header.output)
        #[arg(long)]
        output: Option<String>,
        /// Include guard (default: manifest header.guard, then derived from the name)
        #[arg(long)]
        guard: Option<String>,
    },
    /// Manage saved build profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List profiles in profiles/
    List,
    /// Create a profile from a target triple
    New {
        /// Profile name
        name: String,
        /// Target triple
        triple: String,
    },
    /// Validate one profile, or all of them
    Check {
        /// Profile name
        name: Option<String>,
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
        Commands::Init { name, target } => {
            let target = target.as_deref().unwrap_or("x86_64-unknown-linux-gnu");
            commands::init::run(&cwd, &name, target).map(|_| ())
        }

        Commands::Describe {
            target,
            toolchain,
            linkage,
            release,
            format,
        } => {
            let (manifest, _) = load_manifest_optional(&cwd)?;
            let opts = ResolveOptions {
                target: target.as_deref(),
                toolchain: toolchain.as_deref(),
                linkage: linkage.as_deref(),
                release,
            };
            let profile = commands::resolve_profile(manifest.as_ref(), &opts)?;
            commands::describe::run(&profile, format.as_deref())
        }

        Commands::Classify { triples } => commands::classify::run(&triples),

        Commands::Matrix => commands::matrix::run(),

        Commands::Header {
            target,
            toolchain,
            linkage,
            release,
            output,
            guard,
        } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            let opts = ResolveOptions {
                target: target.as_deref(),
                toolchain: toolchain.as_deref(),
                linkage: linkage.as_deref(),
                release,
            };
            let profile = commands::resolve_profile(manifest.as_ref(), &opts)?;
            let output = match (output, &manifest) {
                (Some(o), _) => o,
                (None, Some(m)) => m.header_output().to_string(),
                (None, None) => "-".to_string(),
            };
            let guard = match (guard, &manifest) {
                (Some(g), _) => g,
                (None, Some(m)) => m.header_guard(),
                (None, None) => "ACCEL_CONFIG_H".to_string(),
            };
            commands::header::run(&project_dir, &profile, &guard, &output).map(|_| ())
        }

        Commands::Profile { action } => {
            let (_, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            match action {
                ProfileAction::List => commands::profile::list(&project_dir),
                ProfileAction::New { name, triple } => {
                    commands::profile::new(&project_dir, &name, &triple).map(|_| ())
                }
                ProfileAction::Check { name } => {
                    commands::profile::check(&project_dir, name.as_deref())
                }
            }
        }
    }
}

/// Try to load a manifest from the current directory upward. Returns (None, None) if not found.
fn load_manifest_optional(
    cwd: &Path,
) -> anyhow::Result<(Option<AccelManifest>, Option<PathBuf>)> {
    match AccelManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
