use super::{formatting_for, open_output, resolve_config};
use crate::abstractness::{AbstractnessFile, AbstractnessSource};
use crate::analysis::{AnalysisOptions, ComponentAnalyzer};
use crate::io::output::{create_writer, OutputFormat};
use crate::io::RealFileSystem;
use crate::metrics::AlignmentPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub abstractness: Option<PathBuf>,
    pub alignment: Option<AlignmentPolicy>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let mut options = AnalysisOptions::from_config(&settings);
    if let Some(alignment) = config.alignment {
        options = options.with_alignment(alignment);
    }

    let fs = RealFileSystem::new();
    let walker = settings.scan().walker()?;
    let abstractness = config.abstractness.as_ref().map(AbstractnessFile::new);

    let analysis = ComponentAnalyzer::new(&fs, &walker, options)
        .run(
            &config.path,
            abstractness.as_ref().map(|a| a as &dyn AbstractnessSource),
        )
        .with_context(|| format!("Failed to analyze {}", config.path.display()))?;
    let report = analysis.report();
    log::info!(
        "Analyzed {} files with {} external dependencies",
        report.summary.file_count,
        report.summary.external_count
    );

    let formatting = formatting_for(config.plain, config.output.as_deref());
    let out = open_output(config.output.as_deref())?;
    let mut writer = create_writer(config.format, out, formatting);
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
