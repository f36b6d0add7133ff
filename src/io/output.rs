use crate::analysis::{AnalysisReport, ComponentReport};
use crate::formatting::{FormattingConfig, Palette};
use crate::matrix::DependencyMatrix;
use crate::metrics::Zone;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

/// Width of the distance bar in terminal output.
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
    fn write_matrix(&mut self, matrix: &DependencyMatrix) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &DependencyMatrix) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(matrix)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_components(report)?;
        self.write_externals(report)?;
        self.write_notes(report)?;
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &DependencyMatrix) -> anyhow::Result<()> {
        writeln!(self.writer, "# Include Dependency Matrix")?;
        writeln!(self.writer)?;
        if matrix.row_count() == 0 {
            writeln!(self.writer, "_No user files found._")?;
            return Ok(());
        }
        writeln!(self.writer, "| | {} |", matrix.column_labels().join(" | "))?;
        writeln!(
            self.writer,
            "|---|{}",
            "---|".repeat(matrix.column_count())
        )?;
        for (row, cells) in matrix.to_dense().iter().enumerate() {
            let cells: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
            writeln!(
                self.writer,
                "| **{}** | {} |",
                matrix.row_labels()[row],
                cells.join(" | ")
            )?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Main Sequence Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Root: `{}`", report.root.display())?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Files Analyzed | {} |", summary.file_count)?;
        writeln!(
            self.writer,
            "| External Dependencies | {} |",
            summary.external_count
        )?;
        writeln!(self.writer, "| Include Edges | {} |", summary.edge_count)?;
        writeln!(
            self.writer,
            "| Mean Instability | {} |",
            format_optional(summary.mean_instability)
        )?;
        writeln!(
            self.writer,
            "| Mean Distance | {} |",
            format_optional(summary.mean_distance)
        )?;
        writeln!(
            self.writer,
            "| Max Distance | {} |",
            format_optional(summary.max_distance)
        )?;
        writeln!(
            self.writer,
            "| Off Main Sequence (band {:.2}) | {} |",
            report.zone_band, summary.files_off_main_sequence
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_components(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.components.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Components")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| File | Ca | Ce | I | A | D | Zone |"
        )?;
        writeln!(
            self.writer,
            "|------|----|----|---|---|---|------|"
        )?;
        for c in &report.components {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} | {} | {} | {} |",
                c.label,
                c.afferent,
                c.efferent,
                c.instability,
                format_optional(c.abstractness),
                format_optional(c.distance),
                c.zone.map(|z| z.to_string()).unwrap_or_else(|| "-".into())
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_externals(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.external_dependencies.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## External Dependencies")?;
        writeln!(self.writer)?;
        for name in &report.external_dependencies {
            writeln!(self.writer, "- `{}`", name)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_notes(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.warnings.is_empty() && report.missing_abstractness.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Notes")?;
        writeln!(self.writer)?;
        for warning in &report.warnings {
            writeln!(self.writer, "- {}", warning)?;
        }
        if !report.missing_abstractness.is_empty() {
            writeln!(
                self.writer,
                "- No abstractness value for: {}",
                report.missing_abstractness.join(", ")
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.formatting.ascii { ASCII_FULL } else { UTF8_FULL })
            .set_content_arrangement(ContentArrangement::Dynamic);
        if !self.formatting.color {
            table.force_no_tty();
        }
        table
    }

    fn component_row(&self, c: &ComponentReport) -> Vec<Cell> {
        let distance_cell = match c.distance {
            Some(d) => {
                let cell = Cell::new(format!("{:.2} {}", d, distance_bar(d, self.formatting.ascii)));
                match c.zone {
                    Some(Zone::MainSequence) => cell.fg(Color::Green),
                    Some(_) => cell.fg(Color::Red),
                    None => cell,
                }
            }
            None => Cell::new("-"),
        };
        vec![
            Cell::new(&c.label),
            Cell::new(c.afferent).set_alignment(CellAlignment::Right),
            Cell::new(c.efferent).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", c.instability)).set_alignment(CellAlignment::Right),
            Cell::new(format_optional(c.abstractness)).set_alignment(CellAlignment::Right),
            distance_cell,
            Cell::new(c.zone.map(|z| z.to_string()).unwrap_or_else(|| "-".into())),
        ]
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let palette = Palette::new(self.formatting);
        writeln!(self.writer, "{}", palette.title("Main Sequence Report"))?;
        writeln!(self.writer, "{}", palette.title("===================="))?;
        writeln!(self.writer)?;

        let summary = &report.summary;
        writeln!(self.writer, "Summary:")?;
        writeln!(self.writer, "  Files analyzed: {}", summary.file_count)?;
        writeln!(
            self.writer,
            "  External dependencies: {}",
            summary.external_count
        )?;
        writeln!(
            self.writer,
            "  Mean instability: {}",
            format_optional(summary.mean_instability)
        )?;
        if let Some(mean) = summary.mean_distance {
            writeln!(self.writer, "  Mean distance: {:.2}", mean)?;
            writeln!(
                self.writer,
                "  Off main sequence: {}",
                palette.off_sequence_count(summary.files_off_main_sequence)
            )?;
        } else {
            writeln!(
                self.writer,
                "  {}",
                palette.muted("Distance not computed (no abstractness supplied)")
            )?;
        }
        writeln!(self.writer)?;

        if report.components.is_empty() {
            writeln!(self.writer, "{}", palette.muted("No user files found."))?;
        } else {
            let mut table = self.table();
            table.set_header(vec!["File", "Ca", "Ce", "I", "A", "D", "Zone"]);
            for component in &report.components {
                table.add_row(self.component_row(component));
            }
            writeln!(self.writer, "{}", table)?;
        }

        for warning in &report.warnings {
            writeln!(self.writer, "{} {}", palette.warning_tag(), warning)?;
        }
        if !report.missing_abstractness.is_empty() {
            writeln!(
                self.writer,
                "{} no abstractness value for {}",
                palette.warning_tag(),
                report.missing_abstractness.join(", ")
            )?;
        }
        if !report.missing_instability.is_empty() {
            writeln!(
                self.writer,
                "{} abstractness given for unknown files {}",
                palette.warning_tag(),
                report.missing_instability.join(", ")
            )?;
        }
        Ok(())
    }

    fn write_matrix(&mut self, matrix: &DependencyMatrix) -> anyhow::Result<()> {
        let palette = Palette::new(self.formatting);
        writeln!(
            self.writer,
            "{}",
            palette.title(&format!(
                "Include Dependency Matrix ({} x {})",
                matrix.row_count(),
                matrix.column_count()
            ))
        )?;
        if matrix.row_count() == 0 {
            writeln!(self.writer, "{}", palette.muted("No user files found."))?;
            return Ok(());
        }

        let mut table = self.table();
        let mut header = vec![Cell::new("")];
        header.extend(matrix.column_labels().iter().enumerate().map(|(i, label)| {
            let cell = Cell::new(label);
            if i >= matrix.row_count() {
                cell.fg(Color::DarkGrey)
            } else {
                cell
            }
        }));
        table.set_header(header);

        for (row, cells) in matrix.to_dense().iter().enumerate() {
            let mut line = vec![Cell::new(&matrix.row_labels()[row])];
            line.extend(
                cells
                    .iter()
                    .map(|&c| Cell::new(c).set_alignment(CellAlignment::Center)),
            );
            table.add_row(line);
        }
        writeln!(self.writer, "{}", table)?;
        Ok(())
    }
}

/// Horizontal bar proportional to a distance in `[0, 1]`.
pub fn distance_bar(distance: f64, ascii: bool) -> String {
    let filled = (distance.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let (full, empty) = if ascii { ('#', '.') } else { ('█', '·') };
    let mut bar = full.to_string().repeat(filled);
    bar.push_str(&empty.to_string().repeat(BAR_WIDTH - filled));
    bar
}

fn format_optional(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
