use dass_cli::present::{ExportKind, ResultPresenter};
use dass_core::models::{Severity, Subscale};
use dass_export::styles::ChartStyle;
use dass_export::tabular::parse_csv;
use dass_instruments::instruments::dass21::Dass21;
use dass_instruments::session::{Session, Submission};

fn submission(scores: &[u32; 21]) -> Submission {
    let mut session = Session::new(&Dass21);
    session.answer_all(scores).unwrap();
    session.submit().unwrap()
}

fn timestamp() -> jiff::Timestamp {
    "2026-10-19T09:30:00Z".parse().unwrap()
}

#[test]
fn exported_csv_reproduces_on_screen_rows() {
    let dir = tempfile::tempdir().unwrap();
    let presenter = ResultPresenter {
        output_dir: Some(dir.path().to_path_buf()),
        chart: ChartStyle::default(),
        report: false,
    };

    let presentation = presenter.present(&Dass21, &submission(&[3; 21]), timestamp());
    assert_eq!(presentation.exports.len(), 2);
    assert_eq!(presentation.failed_exports().count(), 0);

    let csv = std::fs::read(dir.path().join("dass_results.csv")).unwrap();
    assert_eq!(parse_csv(&csv).unwrap(), presentation.rows);

    assert!(presentation.table.contains("Depression  42     Extremely Severe"));
    assert!(dir.path().join("dass_chart.png").is_file());
    assert!(!dir.path().join("dass_report.md").exists());
}

#[test]
fn rows_are_in_fixed_order_with_severities() {
    let presenter = ResultPresenter {
        output_dir: None,
        chart: ChartStyle::default(),
        report: false,
    };
    let presentation = presenter.present(&Dass21, &submission(&[0; 21]), timestamp());

    assert!(presentation.exports.is_empty());
    let rows: Vec<_> = presentation
        .rows
        .iter()
        .map(|r| (r.scale, r.score, r.severity))
        .collect();
    assert_eq!(
        rows,
        vec![
            (Subscale::Depression, 0, Severity::Normal),
            (Subscale::Anxiety, 0, Severity::Normal),
            (Subscale::Stress, 0, Severity::Normal),
        ]
    );
}

#[test]
fn report_lists_every_answer() {
    let dir = tempfile::tempdir().unwrap();
    let presenter = ResultPresenter {
        output_dir: Some(dir.path().to_path_buf()),
        chart: ChartStyle::default(),
        report: true,
    };
    presenter.present(&Dass21, &submission(&[1; 21]), timestamp());

    let md = std::fs::read_to_string(dir.path().join("dass_report.md")).unwrap();
    assert!(md.contains("*DASS-21*, completed 2026-10-19T09:30:00Z"));
    assert!(md.contains("| Stress | 14 | Normal |"));
    assert_eq!(md.matches("**Sometimes**").count(), 21);
}

#[test]
fn failed_chart_export_keeps_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let presenter = ResultPresenter {
        output_dir: Some(dir.path().to_path_buf()),
        chart: ChartStyle {
            width: 10,
            height: 10,
            ..ChartStyle::default()
        },
        report: false,
    };
    let presentation = presenter.present(&Dass21, &submission(&[2; 21]), timestamp());

    let failed: Vec<_> = presentation.failed_exports().map(|e| e.kind).collect();
    assert_eq!(failed, vec![ExportKind::Chart]);
    assert!(dir.path().join("dass_results.csv").is_file());
    assert!(!dir.path().join("dass_chart.png").exists());
    assert_eq!(presentation.rows.len(), 3);
}
