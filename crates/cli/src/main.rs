mod config_commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tb_core::config::defaults::default_config_path;
use tb_core::ConfigStore;
use tb_protocol::Section;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "configmanager",
    version,
    about = "ConfigManager - Centralized configuration for Team Brain"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to operate on (defaults to the shared Team Brain config).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the whole configuration.
    Show,
    /// Print the value at a dot-notation key.
    Get {
        /// Config key (dot notation, e.g. `agents.ATLAS.model`).
        #[arg(long)]
        key: Option<String>,
    },
    /// Set the value at a dot-notation key and save.
    Set {
        /// Config key (dot notation).
        #[arg(long)]
        key: Option<String>,
        /// Value to set; parsed as JSON when possible, otherwise kept as a string.
        #[arg(long)]
        value: Option<String>,
    },
    /// List one section.
    List {
        /// Section to list.
        #[arg(long, value_enum)]
        section: Option<SectionArg>,
    },
    /// Check the configuration for missing sections and incomplete agents.
    Validate,
    /// Overwrite the configuration with the built-in defaults.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SectionArg {
    Paths,
    Agents,
    Settings,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Paths => Section::Paths,
            SectionArg::Agents => Section::Agents,
            SectionArg::Settings => Section::Settings,
        }
    }
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let path = cli
        .config
        .unwrap_or_else(|| default_config_path().to_path_buf());
    debug!(path = %path.display(), command = ?cli.command, "running command");

    let mut store = ConfigStore::open(path)?;

    let code = match cli.command {
        Commands::Show => config_commands::show(&store),
        Commands::Get { key } => config_commands::get(&store, key.as_deref())?,
        Commands::Set { key, value } => {
            config_commands::set(&mut store, key.as_deref(), value.as_deref())?
        }
        Commands::List { section } => config_commands::list(&store, section.map(Section::from)),
        Commands::Validate => config_commands::validate(&store),
        Commands::Reset { yes } => config_commands::reset(&mut store, yes)?,
    };

    Ok(code)
}
