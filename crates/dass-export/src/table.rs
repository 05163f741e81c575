use serde::{Deserialize, Serialize};

use dass_core::models::{Severity, Subscale, SubscaleTotal};

/// One line of the results table: Scale, Score, Severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub scale: Subscale,
    pub score: u32,
    pub severity: Severity,
}

impl From<&SubscaleTotal> for ResultRow {
    fn from(total: &SubscaleTotal) -> Self {
        Self {
            scale: total.subscale,
            score: total.score,
            severity: total.severity,
        }
    }
}

pub const HEADERS: [&str; 3] = ["Scale", "Score", "Severity"];

/// Table rows in presentation order (Depression, Anxiety, Stress),
/// whatever order the totals arrive in.
pub fn result_rows(totals: &[SubscaleTotal]) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = totals.iter().map(ResultRow::from).collect();
    rows.sort_by_key(|r| r.scale);
    rows
}

/// Render rows as an aligned plain-text table for the terminal.
pub fn format_table(rows: &[ResultRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| [r.scale.to_string(), r.score.to_string(), r.severity.to_string()])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    push_line(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
