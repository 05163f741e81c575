use thiserror::Error;

use dass_core::models::Subscale;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("instrument '{instrument_id}' has no questions")]
    EmptyBank { instrument_id: String },

    #[error("instrument '{instrument_id}' has no response options")]
    EmptyOptions { instrument_id: String },

    #[error("no severity cutoffs configured for subscale {subscale}")]
    MissingCutoffs { subscale: Subscale },

    #[error("severity cutoffs for {subscale} must be strictly increasing, got {cutoffs:?}")]
    NonIncreasingCutoffs { subscale: Subscale, cutoffs: [u32; 4] },

    #[error("expected {expected} responses, got {actual}")]
    ResponseCount { expected: usize, actual: usize },

    #[error("question {question} does not exist (bank has {count} questions)")]
    UnknownQuestion { question: usize, count: usize },

    #[error("question {question}: score {score} is outside the option range 0..={max}")]
    ScoreOutOfRange { question: usize, score: u32, max: u32 },

    #[error("question {question}: '{label}' is not one of the response options")]
    UnknownOption { question: usize, label: String },

    #[error("{subscale} total does not fit in a 32-bit score")]
    ScoreOverflow { subscale: Subscale },

    #[error("unanswered questions: {}", format_numbers(.unanswered))]
    Incomplete { unanswered: Vec<usize> },

    #[error("invalid instrument definition: {0}")]
    Definition(#[from] serde_json::Error),

    #[error("failed to read instrument definition: {0}")]
    Io(#[from] std::io::Error),
}

fn format_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
