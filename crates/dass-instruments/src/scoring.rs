use dass_core::models::{Response, Subscale, SubscaleTotal};

use crate::bank::QuestionBank;
use crate::cutoffs::CutoffTable;
use crate::error::InstrumentError;

/// Conversion from the short form's raw sums to the full-length scale.
pub const NORMALIZATION_FACTOR: u32 = 2;

/// Check that `responses` covers the bank exactly once, in order, with
/// in-range scores.
pub fn check_responses(bank: &QuestionBank, responses: &[Response]) -> Result<(), InstrumentError> {
    if responses.len() != bank.len() {
        return Err(InstrumentError::ResponseCount {
            expected: bank.len(),
            actual: responses.len(),
        });
    }

    let max = bank.options.max_score().unwrap_or(0);
    for (index, response) in responses.iter().enumerate() {
        if response.question != index {
            return Err(InstrumentError::UnknownQuestion {
                question: response.question,
                count: bank.len(),
            });
        }
        if response.score > max {
            return Err(InstrumentError::ScoreOutOfRange {
                question: index + 1,
                score: response.score,
                max,
            });
        }
    }
    Ok(())
}

/// Raw per-subscale sums, in [`Subscale::ALL`] order.
pub fn raw_sums(bank: &QuestionBank, responses: &[Response]) -> Result<[u32; 3], InstrumentError> {
    check_responses(bank, responses)?;

    let mut sums = [0u32; 3];
    for (subscale, response) in bank.subscales().zip(responses) {
        let sum = &mut sums[subscale.index()];
        *sum = sum
            .checked_add(response.score)
            .ok_or(InstrumentError::ScoreOverflow { subscale })?;
    }
    Ok(sums)
}

/// Score and classify a complete set of responses.
///
/// Returns one total per subscale in presentation order (Depression,
/// Anxiety, Stress). Subscales with no questions in the bank still get a
/// zero total.
pub fn score(
    bank: &QuestionBank,
    cutoffs: &CutoffTable,
    responses: &[Response],
) -> Result<Vec<SubscaleTotal>, InstrumentError> {
    let sums = raw_sums(bank, responses)?;

    Subscale::ALL
        .into_iter()
        .zip(sums)
        .map(|(subscale, raw)| {
            let score = raw
                .checked_mul(NORMALIZATION_FACTOR)
                .ok_or(InstrumentError::ScoreOverflow { subscale })?;
            let severity = cutoffs.classify(score, subscale)?;
            tracing::debug!(%subscale, raw, score, %severity, "subscale scored");
            Ok(SubscaleTotal {
                subscale,
                raw,
                score,
                severity,
            })
        })
        .collect()
}
