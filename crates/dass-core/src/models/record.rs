use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Severity, Subscale};

/// The option selected for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// 0-based position of the question in the bank.
    pub question: usize,
    /// Score of the selected option (its 0-based position in the option set).
    pub score: u32,
}

/// Scored and classified result for one subscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscaleTotal {
    pub subscale: Subscale,
    /// Unweighted sum of the subscale's response scores.
    pub raw: u32,
    /// Reported score: `raw` times the normalization factor.
    pub score: u32,
    pub severity: Severity,
}

/// What a result store receives for one submitted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub instrument_id: String,
    pub totals: Vec<SubscaleTotal>,
    pub responses: Vec<Response>,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(
        instrument_id: impl Into<String>,
        totals: Vec<SubscaleTotal>,
        responses: Vec<Response>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument_id: instrument_id.into(),
            totals,
            responses,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn total(&self, subscale: Subscale) -> Option<&SubscaleTotal> {
        self.totals.iter().find(|t| t.subscale == subscale)
    }
}
