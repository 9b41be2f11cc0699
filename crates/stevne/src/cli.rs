//! Clap derive structures for the `stevne` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Depends only on clap so `build.rs` can include it for man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// stevne -- manage athletics-meet participants, disciplines and results
#[derive(Debug, Parser)]
#[command(
    name = "stevne",
    version,
    about = "Manage athletics-meet rosters from the command line",
    long_about = "Command-line client for an athletics-meet roster server.\n\n\
        Lists, filters and sorts participants, disciplines and results,\n\
        edits participants, and assigns participants to disciplines.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "STEVNE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Roster API origin (overrides profile), e.g. http://localhost:8080
    #[arg(long, short = 'u', env = "STEVNE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STEVNE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "STEVNE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(long, env = "STEVNE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage participants
    #[command(alias = "deltager", alias = "pa")]
    Participants(ParticipantsArgs),

    /// Manage disciplines and their rosters
    #[command(alias = "disciplin", alias = "di")]
    Disciplines(DisciplinesArgs),

    /// View results joined with participant and discipline names
    #[command(alias = "resultater", alias = "re")]
    Results(ResultsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared enums ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    #[value(alias = "mand", alias = "m")]
    Male,
    #[value(alias = "kvinde", alias = "f")]
    Female,
    #[value(alias = "anden")]
    Other,
}

/// Shared search and sort-direction arguments for list commands.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Case-insensitive substring search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

// ── Participants ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ParticipantsArgs {
    #[command(subcommand)]
    pub command: ParticipantsCommand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ParticipantSort {
    Name,
    Age,
    Club,
}

#[derive(Debug, Subcommand)]
pub enum ParticipantsCommand {
    /// List participants
    #[command(alias = "ls")]
    List {
        /// Only participants of this gender
        #[arg(long, short = 'g', conflicts_with = "club")]
        gender: Option<GenderArg>,

        /// Only participants of this club
        #[arg(long, short = 'c')]
        club: Option<String>,

        /// Sort by field
        #[arg(long)]
        sort: Option<ParticipantSort>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show one participant
    Get {
        /// Participant ID
        id: String,
    },

    /// Create a participant
    #[command(alias = "create")]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        gender: GenderArg,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        club: String,
    },

    /// Update a participant; unset fields keep their current value
    #[command(alias = "update")]
    Edit {
        /// Participant ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        gender: Option<GenderArg>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        club: Option<String>,
    },

    /// Delete a participant
    #[command(alias = "rm")]
    Delete {
        /// Participant ID
        id: String,
    },
}

// ── Disciplines ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DisciplinesArgs {
    #[command(subcommand)]
    pub command: DisciplinesCommand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DisciplineSort {
    Name,
    ResultType,
}

#[derive(Debug, Subcommand)]
pub enum DisciplinesCommand {
    /// List disciplines
    #[command(alias = "ls")]
    List {
        /// Only disciplines with this result type
        #[arg(long, short = 't')]
        result_type: Option<String>,

        /// Sort by field
        #[arg(long)]
        sort: Option<DisciplineSort>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Create a discipline
    #[command(alias = "create")]
    Add {
        #[arg(long)]
        name: String,

        /// Unit or format of results, e.g. "tid" or "afstand"
        #[arg(long)]
        result_type: String,
    },

    /// Delete a discipline
    #[command(alias = "rm")]
    Delete {
        /// Discipline ID
        id: String,
    },

    /// Show the participants assigned to a discipline
    Roster {
        /// Discipline ID
        id: String,
    },

    /// Add participants to a discipline's roster
    Assign {
        /// Discipline ID
        id: String,

        /// Participant IDs to add
        #[arg(required = true, num_args = 1..)]
        participants: Vec<String>,
    },
}

// ── Results ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ResultsArgs {
    #[command(subcommand)]
    pub command: ResultsCommand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResultSort {
    /// Numeric result value
    Value,
    Date,
}

#[derive(Debug, Subcommand)]
pub enum ResultsCommand {
    /// List results
    #[command(alias = "ls")]
    List {
        /// Only results of this participant ID
        #[arg(long, conflicts_with_all = ["discipline", "result_type"])]
        participant: Option<String>,

        /// Only results in this discipline ID
        #[arg(long, conflicts_with = "result_type")]
        discipline: Option<String>,

        /// Only results with this result type
        #[arg(long, short = 't')]
        result_type: Option<String>,

        /// Sort by field
        #[arg(long)]
        sort: Option<ResultSort>,

        #[command(flatten)]
        view: ViewArgs,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with a profile
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
