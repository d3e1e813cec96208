use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "eridu",
    about = "New Eridu party generator - rank three-agent teams for your roster",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to $ERIDU_DIR/logs/eridu.log, or eridu/logs/eridu.log under the local data directory (~/.local/share on Linux) when ERIDU_DIR is unset"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to eridu.yaml config file")]
    pub config: Option<PathBuf>,

    /// Catalog file (JSON or YAML) instead of the built-in agent list
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Attribute / specialty selection shared by `generate` and `disks`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Attribute to allow (up to 3; "Autofill" allows any)
    #[arg(short, long = "attribute", value_delimiter = ',')]
    pub attributes: Vec<String>,

    /// Specialty to allow (up to 3; "Autofill" allows any)
    #[arg(short, long = "specialty", value_delimiter = ',')]
    pub specialties: Vec<String>,

    /// Pad unfilled selections with Autofill (turns strict mode off)
    #[arg(long)]
    pub relaxed: bool,

    /// Only use agents from the configured collection
    #[arg(long)]
    pub collection: bool,

    /// Only use these agents (comma separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "collection")]
    pub owned: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate ranked teams
    Generate {
        #[command(flatten)]
        filter: FilterArgs,

        /// Show at most N teams (0 = all, default from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Show the score breakdown for each team
        #[arg(long)]
        explain: bool,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Browse the agent catalog
    Agents {
        #[command(subcommand)]
        action: AgentsAction,
    },

    /// Drive-disk pieces needed for a set of teams
    Disks {
        /// Explicit team, three comma-separated agents (repeatable)
        #[arg(long = "team")]
        teams: Vec<String>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Without --team: use the top N generated teams (at least 1)
        #[arg(long, default_value_t = 1)]
        top: usize,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum AgentsAction {
    /// List agents, optionally filtered by a search term
    List {
        /// Matches name, attribute, specialty or faction
        search: Option<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show one agent
    Show {
        /// Agent name
        name: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Config key (e.g., generator.limit)
        key: String,
    },
}
