mod cmd;
mod output;
mod prompt;
mod root;

use clap::{Parser, Subcommand};
use cmd::list::ListSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "devkit",
    about = "Distribute agents, commands, skills, and rules into AI CLI config directories",
    version,
    propagate_version = true
)]
struct Cli {
    /// Devkit repository root (default: auto-detect from plugins/ or .git/)
    #[arg(long, global = true, env = "DEVKIT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install plugin components into tool config directories
    Install {
        /// Target tool: claude, opencode, copilot, or codex (default: all)
        #[arg(long)]
        tool: Option<String>,

        /// Install a single plugin by name (default: all discovered)
        #[arg(long)]
        plugin: Option<String>,

        /// Overwrite existing files without prompting
        #[arg(long, conflicts_with = "skip_existing")]
        force: bool,

        /// Leave existing files untouched without prompting
        #[arg(long)]
        skip_existing: bool,
    },

    /// Remove installed plugin components
    Uninstall {
        /// Target tool (default: all)
        #[arg(long)]
        tool: Option<String>,

        /// Uninstall a single plugin by name (default: all discovered)
        #[arg(long)]
        plugin: Option<String>,

        /// Don't ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show per-tool install status and item counts
    Status,

    /// Copy a tool's config directory to a timestamped backup
    Backup {
        /// Tool to back up (default: every tool with an existing directory)
        #[arg(long)]
        tool: Option<String>,
    },

    /// List discovered plugins and their components
    List {
        #[command(subcommand)]
        subcommand: ListSubcommand,
    },

    /// Validate plugin manifests and component front matter
    Validate {
        /// Validate a single plugin by name (default: all discovered)
        #[arg(long)]
        plugin: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Install {
            tool,
            plugin,
            force,
            skip_existing,
        } => cmd::install::run(
            &root,
            tool.as_deref(),
            plugin.as_deref(),
            force,
            skip_existing,
            cli.json,
        ),
        Commands::Uninstall { tool, plugin, yes } => {
            cmd::uninstall::run(&root, tool.as_deref(), plugin.as_deref(), yes, cli.json)
        }
        Commands::Status => cmd::status::run(cli.json),
        Commands::Backup { tool } => cmd::backup::run(tool.as_deref(), cli.json),
        Commands::List { subcommand } => cmd::list::run(&root, subcommand, cli.json),
        Commands::Validate { plugin } => cmd::validate::run(&root, plugin.as_deref(), cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
