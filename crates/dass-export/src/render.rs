use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::table::ResultRow;

pub const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Default Markdown report. Any Tera template with the same context
/// variables can replace it.
pub const REPORT_TEMPLATE: &str = r#"# {{ title }}

*{{ instrument }}*, completed {{ completed_at }}

| Scale | Score | Severity |
|---|---|---|
{% for row in rows -%}
| {{ row.scale }} | {{ row.score }} | {{ row.severity }} |
{% endfor %}
{%- if answers %}
## Answers
{% for answer in answers %}
{{ answer.number }}. {{ answer.prompt }}
   **{{ answer.label }}** ({{ answer.subscale }}, {{ answer.score }})
{% endfor -%}
{% endif %}
"#;

/// One answered question as it appears in the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAnswer {
    /// 1-based question number.
    pub number: usize,
    pub subscale: String,
    pub prompt: String,
    pub label: String,
    pub score: u32,
}

/// Template context for a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: String,
    pub instrument: String,
    pub completed_at: String,
    pub rows: Vec<ReportRow>,
    pub answers: Vec<ReportAnswer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub scale: String,
    pub score: u32,
    pub severity: String,
}

impl ReportContext {
    pub fn new(
        instrument: impl Into<String>,
        completed_at: impl Into<String>,
        rows: &[ResultRow],
        answers: Vec<ReportAnswer>,
    ) -> Self {
        Self {
            title: "Your Results".to_string(),
            instrument: instrument.into(),
            completed_at: completed_at.into(),
            rows: rows
                .iter()
                .map(|r| ReportRow {
                    scale: r.scale.to_string(),
                    score: r.score,
                    severity: r.severity.to_string(),
                })
                .collect(),
            answers,
        }
    }
}

/// Render a Tera template with a report context.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in Markdown report.
pub fn render_report(report: &ReportContext) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, report)
}
