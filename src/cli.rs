use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mainseq")]
#[command(
    about = "Include-dependency coupling analyzer: instability and distance from the main sequence",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a directory: dependency matrix, instability and (optionally) distance
    Analyze {
        /// Directory to analyze
        path: PathBuf,

        /// Abstractness table (JSON object/entry list, or TOML when the extension is .toml)
        #[arg(short, long)]
        abstractness: Option<PathBuf>,

        /// How to combine instability and abstractness when their files differ
        #[arg(long, value_enum)]
        alignment: Option<AlignmentArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .mainseq.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Plain output: ASCII only, no colors
        #[arg(long)]
        plain: bool,
    },

    /// Print the include dependency matrix of a directory
    Matrix {
        /// Directory to scan
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .mainseq.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Plain output: ASCII only, no colors
        #[arg(long)]
        plain: bool,
    },

    /// Fail when any file lies further than the threshold from the main sequence
    Validate {
        /// Directory to analyze
        path: PathBuf,

        /// Abstractness table
        #[arg(short, long)]
        abstractness: PathBuf,

        /// Maximum allowed distance (overrides [thresholds] max_distance)
        #[arg(long)]
        max_distance: Option<f64>,

        /// How to combine instability and abstractness when their files differ
        #[arg(long, value_enum)]
        alignment: Option<AlignmentArg>,

        /// Configuration file (defaults to the nearest .mainseq.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze { verbosity, .. }
            | Commands::Matrix { verbosity, .. }
            | Commands::Validate { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlignmentArg {
    /// Both series must cover exactly the same files
    Strict,
    /// Only files present in both series are analyzed
    Intersection,
}

impl From<AlignmentArg> for crate::metrics::AlignmentPolicy {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Strict => crate::metrics::AlignmentPolicy::Strict,
            AlignmentArg::Intersection => crate::metrics::AlignmentPolicy::Intersection,
        }
    }
}

/// Log level filter for a `-v` count.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
