use dass_core::models::{Severity, Subscale};
use dass_export::ResultRow;
use dass_export::error::ExportError;
use dass_export::render::{ReportAnswer, ReportContext, render_report, render_template};

fn context(answers: Vec<ReportAnswer>) -> ReportContext {
    let rows = [
        (Subscale::Depression, 12, Severity::Mild),
        (Subscale::Anxiety, 20, Severity::ExtremelySevere),
        (Subscale::Stress, 4, Severity::Normal),
    ]
    .map(|(scale, score, severity)| ResultRow {
        scale,
        score,
        severity,
    });
    ReportContext::new("DASS-21", "2026-10-19T09:30:00Z", &rows, answers)
}

#[test]
fn report_contains_the_results_table() {
    let md = render_report(&context(Vec::new())).unwrap();
    assert!(md.starts_with("# Your Results"));
    assert!(md.contains("*DASS-21*, completed 2026-10-19T09:30:00Z"));
    assert!(md.contains("| Scale | Score | Severity |"));
    assert!(md.contains("| Depression | 12 | Mild |"));
    assert!(md.contains("| Anxiety | 20 | Extremely Severe |"));
    assert!(md.contains("| Stress | 4 | Normal |"));
    assert!(!md.contains("## Answers"));
}

#[test]
fn report_lists_answers_unescaped() {
    let answers = vec![ReportAnswer {
        number: 1,
        subscale: "Stress".to_string(),
        prompt: "I don't wind down & can't relax".to_string(),
        label: "Often".to_string(),
        score: 2,
    }];
    let md = render_report(&context(answers)).unwrap();
    assert!(md.contains("## Answers"));
    assert!(md.contains("1. I don't wind down & can't relax"));
    assert!(md.contains("**Often** (Stress, 2)"));
}

#[test]
fn custom_template_uses_same_context() {
    let out = render_template(
        "short.txt",
        "{% for row in rows %}{{ row.scale }}={{ row.score }};{% endfor %}",
        &context(Vec::new()),
    )
    .unwrap();
    assert_eq!(out, "Depression=12;Anxiety=20;Stress=4;");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_template("bad.txt", "{% for row in rows %}", &context(Vec::new())).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
