use dass_core::models::{Severity, Subscale};
use dass_export::ResultRow;
use dass_export::error::ExportError;
use dass_export::tabular::{generate_csv, parse_csv};

fn rows() -> Vec<ResultRow> {
    vec![
        ResultRow {
            scale: Subscale::Depression,
            score: 42,
            severity: Severity::ExtremelySevere,
        },
        ResultRow {
            scale: Subscale::Anxiety,
            score: 8,
            severity: Severity::Mild,
        },
        ResultRow {
            scale: Subscale::Stress,
            score: 0,
            severity: Severity::Normal,
        },
    ]
}

#[test]
fn csv_has_header_and_three_rows() {
    let bytes = generate_csv(&rows()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "Scale,Score,Severity\n\
         Depression,42,Extremely Severe\n\
         Anxiety,8,Mild\n\
         Stress,0,Normal\n"
    );
}

#[test]
fn parsed_csv_matches_displayed_rows() {
    let shown = rows();
    let parsed = parse_csv(&generate_csv(&shown).unwrap()).unwrap();
    assert_eq!(parsed, shown);
}

#[test]
fn parses_crlf_files() {
    let data = b"Scale,Score,Severity\r\nAnxiety,10,Moderate\r\n";
    let parsed = parse_csv(data).unwrap();
    assert_eq!(
        parsed,
        vec![ResultRow {
            scale: Subscale::Anxiety,
            score: 10,
            severity: Severity::Moderate,
        }]
    );
}

#[test]
fn rejects_wrong_header() {
    let err = parse_csv(b"Subscale,Score,Severity\nStress,2,Normal\n").unwrap_err();
    assert!(matches!(err, ExportError::InvalidRow { line: 1, .. }));
}

#[test]
fn rejects_bad_cells() {
    let err = parse_csv(b"Scale,Score,Severity\nStress,lots,Normal\n").unwrap_err();
    assert!(matches!(err, ExportError::InvalidRow { line: 2, .. }));

    let err = parse_csv(b"Scale,Score,Severity\nMood,2,Normal\n").unwrap_err();
    assert!(matches!(err, ExportError::InvalidRow { .. }));

    let err = parse_csv(b"Scale,Score,Severity\nStress,2,Fine\n").unwrap_err();
    assert!(matches!(err, ExportError::InvalidRow { .. }));
}
