use super::resolve_config;
use crate::abstractness::AbstractnessFile;
use crate::analysis::{AnalysisOptions, AnalysisReport, ComponentAnalyzer};
use crate::formatting::{FormattingConfig, Palette};
use crate::io::RealFileSystem;
use crate::metrics::AlignmentPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ValidateConfig {
    pub path: PathBuf,
    pub abstractness: PathBuf,
    pub max_distance: Option<f64>,
    pub alignment: Option<AlignmentPolicy>,
    pub config: Option<PathBuf>,
}

pub fn validate_project(config: ValidateConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let max_distance = config
        .max_distance
        .unwrap_or(settings.thresholds().max_distance);
    if !(0.0..=1.0).contains(&max_distance) {
        anyhow::bail!("--max-distance must be within [0, 1], got {}", max_distance);
    }

    let mut options = AnalysisOptions::from_config(&settings);
    if let Some(alignment) = config.alignment {
        options = options.with_alignment(alignment);
    }

    let fs = RealFileSystem::new();
    let walker = settings.scan().walker()?;
    let abstractness = AbstractnessFile::new(&config.abstractness);
    let report = ComponentAnalyzer::new(&fs, &walker, options)
        .run(&config.path, Some(&abstractness))
        .with_context(|| format!("Failed to analyze {}", config.path.display()))?
        .report();

    validate_report(&report, max_distance)
}

fn validate_report(report: &AnalysisReport, max_distance: f64) -> Result<()> {
    let palette = Palette::new(FormattingConfig::detect());
    let violations = report.violations(max_distance);

    if violations.is_empty() {
        println!(
            "{} {} files within distance {:.2} of the main sequence",
            palette.verdict(true),
            report.summary.file_count,
            max_distance
        );
        return Ok(());
    }

    println!(
        "{} {} of {} files exceed distance {:.2}",
        palette.verdict(false),
        violations.len(),
        report.summary.file_count,
        max_distance
    );
    for component in &violations {
        println!(
            "  {} D={:.2} (A={:.2}, I={:.2}){}",
            component.label,
            component.distance.unwrap_or_default(),
            component.abstractness.unwrap_or_default(),
            component.instability,
            component
                .zone
                .map(|z| format!(" {}", palette.zone(z)))
                .unwrap_or_default()
        );
    }
    anyhow::bail!(
        "{} files exceed the maximum distance of {:.2}",
        violations.len(),
        max_distance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstractness::TableAbstractness;
    use crate::testkit::{series, MockFileSystem};
    use std::path::Path;

    fn report(values: &[f64]) -> AnalysisReport {
        let fs = MockFileSystem::new().with_files(vec![
            ("src/a.h", ""),
            ("src/b.cpp", "#include \"a.h\"\n"),
        ]);
        let abstractness = TableAbstractness::new(series(&["a.h", "b.cpp"], values)).unwrap();
        ComponentAnalyzer::new(&fs, &fs, AnalysisOptions::default())
            .run(Path::new("src"), Some(&abstractness))
            .unwrap()
            .report()
    }

    #[test]
    fn test_validate_passes_on_main_sequence() {
        // a.h: I = 0, b.cpp: I = 1
        assert!(validate_report(&report(&[1.0, 0.0]), 0.7).is_ok());
    }

    #[test]
    fn test_validate_fails_past_threshold() {
        let err = validate_report(&report(&[0.0, 0.0]), 0.7).unwrap_err();
        assert!(err.to_string().contains("1 files exceed"));
    }
}
