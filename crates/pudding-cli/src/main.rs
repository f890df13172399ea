use anyhow::{bail, Context};
use clap::Parser;
use pudding_core::{Config, DocsOpener};
use pudding_deps::{detect_project_type, load_dependencies, Dependency, ProjectType};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pudding")]
#[command(version, about = "Open a dependency's documentation locally in your browser", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "PUDDING_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output (commands run, files read)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open documentation for a dependency
    Open {
        /// Dependency name (e.g. jason, rake)
        name: String,

        /// Search the docs for these keywords
        keywords: Vec<String>,

        /// Version to open; defaults to the one in the lockfile
        #[arg(long = "dep-version", value_name = "VERSION")]
        dep_version: Option<String>,

        /// Project type (elixir, ruby); detected from the directory if omitted
        #[arg(long = "type", value_name = "TYPE")]
        project_type: Option<ProjectType>,

        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// List the dependencies of the project
    List {
        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "pudding_cli=debug,pudding_core=debug,pudding_deps=debug"
    } else {
        "pudding_cli=info,pudding_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Open {
            name,
            keywords,
            dep_version,
            project_type,
            dir,
        } => {
            let config = Config::load_from(&config_path(cli.config)?)?;
            let project_type = resolve_project_type(project_type, &dir)?;
            let dep = resolve_dependency(&dir, project_type, &name, dep_version)?;
            let keywords = keywords.join(" ");

            tracing::info!("Opening {} docs for {}", project_type, dep.name);
            let url = DocsOpener::from_config(&config).fetch_and_open(
                &dep,
                project_type,
                Some(keywords.as_str()),
            )?;
            println!("{}", url);
        }
        Commands::List { dir, json } => {
            let project_type = resolve_project_type(None, &dir)?;
            let info = load_dependencies(&dir, project_type)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for dep in &info.dependencies {
                    match &dep.version {
                        Some(version) => println!("{} {}", dep.name, version),
                        None => println!("{}", dep.name),
                    }
                }
            }
        }
        Commands::Config { init } => {
            let path = config_path(cli.config)?;
            if init && !path.exists() {
                Config::default().save_to(&path)?;
                tracing::info!("Wrote default config to {}", path.display());
            }
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(Config::config_path()?),
    }
}

fn resolve_project_type(explicit: Option<ProjectType>, dir: &Path) -> anyhow::Result<ProjectType> {
    match explicit {
        Some(project_type) => Ok(project_type),
        None => detect_project_type(dir).with_context(|| {
            format!(
                "Could not detect a project in {} (looked for mix.exs, Gemfile, Cargo.toml, package.json, requirements.txt)",
                dir.display()
            )
        }),
    }
}

/// Work out which version of `name` to open
///
/// An explicit version wins. Otherwise the lockfile decides; hex can fetch the
/// latest docs without a version, so Elixir dependencies missing from
/// mix.lock are still attempted. Ecosystems without a docs backend skip the
/// lockfile so the dispatcher reports them as unsupported.
fn resolve_dependency(
    dir: &Path,
    project_type: ProjectType,
    name: &str,
    version: Option<String>,
) -> anyhow::Result<Dependency> {
    if let Some(version) = version {
        return Ok(Dependency::new(name).with_version(version));
    }

    if !project_type.has_docs() {
        return Ok(Dependency::new(name));
    }

    let lock_file = dir.join(project_type.lock_file());
    if project_type == ProjectType::Elixir && !lock_file.exists() {
        return Ok(Dependency::new(name));
    }

    let info = load_dependencies(dir, project_type)?;
    match info.find(name) {
        Some(dep) => Ok(dep.clone()),
        None if project_type == ProjectType::Elixir => Ok(Dependency::new(name)),
        None => bail!("{} is not a dependency in {}", name, lock_file.display()),
    }
}
