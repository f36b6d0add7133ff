use anyhow::Result;
use clap::Parser;
use mainseq::cli::{log_level, Cli, Commands};
use mainseq::commands::{
    analyze::AnalyzeConfig, handle_analyze, handle_matrix, init_config, matrix::MatrixConfig,
    validate_project, ValidateConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            path,
            abstractness,
            alignment,
            format,
            output,
            config,
            verbosity: _,
            plain,
        } => handle_analyze(AnalyzeConfig {
            path,
            abstractness,
            alignment: alignment.map(Into::into),
            format: format.into(),
            output,
            config,
            plain,
        }),
        Commands::Matrix {
            path,
            format,
            output,
            config,
            verbosity: _,
            plain,
        } => handle_matrix(MatrixConfig {
            path,
            format: format.into(),
            output,
            config,
            plain,
        }),
        Commands::Validate {
            path,
            abstractness,
            max_distance,
            alignment,
            config,
            verbosity: _,
        } => validate_project(ValidateConfig {
            path,
            abstractness,
            max_distance,
            alignment: alignment.map(Into::into),
            config,
        }),
        Commands::Init { force } => init_config(force),
    }
}

// RUST_LOG wins over -v
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbosity));
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format_timestamp(None).init();
}
