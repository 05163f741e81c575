//! Result presentation: table on screen, then file exports.
//!
//! Each export is attempted independently. A failed export is reported in
//! the outcome list and never takes the on-screen results down with it.

use std::fmt;
use std::path::{Path, PathBuf};

use dass_core::keys;
use dass_export::error::ExportError;
use dass_export::render::{ReportAnswer, ReportContext, render_report};
use dass_export::styles::ChartStyle;
use dass_export::table::{format_table, result_rows};
use dass_export::{ResultRow, png, tabular};
use dass_instruments::Instrument;
use dass_instruments::session::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Chart,
    Report,
}

impl ExportKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Csv => keys::RESULTS_CSV,
            ExportKind::Chart => keys::CHART_PNG,
            ExportKind::Report => keys::REPORT_MD,
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportKind::Csv => "results CSV",
            ExportKind::Chart => "chart PNG",
            ExportKind::Report => "report",
        })
    }
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub kind: ExportKind,
    pub path: PathBuf,
    pub result: Result<(), ExportError>,
}

#[derive(Debug)]
pub struct Presentation {
    pub rows: Vec<ResultRow>,
    pub table: String,
    pub exports: Vec<ExportOutcome>,
}

impl Presentation {
    pub fn failed_exports(&self) -> impl Iterator<Item = &ExportOutcome> {
        self.exports.iter().filter(|e| e.result.is_err())
    }
}

pub struct ResultPresenter {
    /// `None` disables file exports entirely.
    pub output_dir: Option<PathBuf>,
    pub chart: ChartStyle,
    pub report: bool,
}

impl ResultPresenter {
    /// Build the table and write every enabled export.
    pub fn present(
        &self,
        instrument: &dyn Instrument,
        submission: &Submission,
        completed_at: jiff::Timestamp,
    ) -> Presentation {
        let rows = result_rows(&submission.totals);
        let table = format_table(&rows);

        let mut exports = Vec::new();
        if let Some(dir) = &self.output_dir {
            exports.push(self.export(dir, ExportKind::Csv, || tabular::generate_csv(&rows)));
            exports.push(self.export(dir, ExportKind::Chart, || {
                png::generate_chart_png(&rows, &self.chart)
            }));
            if self.report {
                exports.push(self.export(dir, ExportKind::Report, || {
                    let context = ReportContext::new(
                        instrument.name(),
                        completed_at.to_string(),
                        &rows,
                        report_answers(instrument, submission),
                    );
                    Ok(render_report(&context)?.into_bytes())
                }));
            }
        }

        Presentation {
            rows,
            table,
            exports,
        }
    }

    fn export(
        &self,
        dir: &Path,
        kind: ExportKind,
        generate: impl FnOnce() -> Result<Vec<u8>, ExportError>,
    ) -> ExportOutcome {
        let path = dir.join(kind.file_name());
        let result = generate().and_then(|bytes| write_file(&path, &bytes));

        match &result {
            Ok(()) => tracing::info!(%kind, path = %path.display(), "export written"),
            Err(e) => tracing::warn!(%kind, path = %path.display(), error = %e, "export failed"),
        }

        ExportOutcome { kind, path, result }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, bytes)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

fn report_answers(instrument: &dyn Instrument, submission: &Submission) -> Vec<ReportAnswer> {
    let bank = instrument.bank();
    submission
        .responses
        .iter()
        .filter_map(|response| {
            let question = bank.question(response.question)?;
            Some(ReportAnswer {
                number: response.question + 1,
                subscale: question.subscale.to_string(),
                prompt: question.prompt.clone(),
                label: bank.options.label(response.score)?.to_string(),
                score: response.score,
            })
        })
        .collect()
}
