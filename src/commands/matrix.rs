use super::{formatting_for, open_output, resolve_config};
use crate::io::output::{create_writer, OutputFormat};
use crate::io::RealFileSystem;
use crate::matrix::MatrixBuilder;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct MatrixConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_matrix(config: MatrixConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let fs = RealFileSystem::new();
    let walker = settings.scan().walker()?;

    let build = MatrixBuilder::new(&fs, &walker)
        .build(&config.path)
        .with_context(|| format!("Failed to scan {}", config.path.display()))?;

    let formatting = formatting_for(config.plain, config.output.as_deref());
    let out = open_output(config.output.as_deref())?;
    let mut writer = create_writer(config.format, out, formatting);
    writer.write_matrix(&build.matrix)
}
